//! Temperature anomalies against a fixed reference period.
//!
//! An anomaly is the signed difference between a target year's mean and the
//! mean over a baseline period. Absence of baseline data is reported as
//! `None`: 0.0 is a legitimate anomaly (exactly the baseline temperature)
//! and must never double as a missing-data marker.

use crate::types::baseline::ReferenceBaseline;
use std::collections::BTreeMap;

/// Mean of the yearly means falling inside the baseline period, or `None`
/// when the period has no data at all.
pub fn baseline_mean(
    yearly_means: &BTreeMap<i32, f64>,
    baseline: ReferenceBaseline,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (_, mean) in yearly_means.range(baseline.years()) {
        sum += mean;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Signed deviation of `target_year`'s mean from the baseline mean
/// (positive = warmer than the baseline).
///
/// Returns `None` when the target year or the whole baseline period has no
/// data.
pub fn anomaly(
    yearly_means: &BTreeMap<i32, f64>,
    target_year: i32,
    baseline: ReferenceBaseline,
) -> Option<f64> {
    let target_mean = yearly_means.get(&target_year)?;
    let reference = baseline_mean(yearly_means, baseline)?;
    Some(target_mean - reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yearly(entries: &[(i32, f64)]) -> BTreeMap<i32, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn anomaly_sign_and_magnitude() {
        // Baseline years all at 14.0, target at 15.0: anomaly is +1.0.
        let mut entries: Vec<(i32, f64)> = (1961..=1990).map(|year| (year, 14.0)).collect();
        entries.push((2000, 15.0));
        let means = yearly(&entries);

        assert_eq!(
            baseline_mean(&means, ReferenceBaseline::Wmo1961To1990),
            Some(14.0)
        );
        assert_eq!(
            anomaly(&means, 2000, ReferenceBaseline::Wmo1961To1990),
            Some(1.0)
        );
    }

    #[test]
    fn colder_target_gives_negative_anomaly() {
        let means = yearly(&[(1961, 14.0), (1990, 14.0), (2000, 13.5)]);
        assert_eq!(
            anomaly(&means, 2000, ReferenceBaseline::Wmo1961To1990),
            Some(-0.5)
        );
    }

    #[test]
    fn baseline_uses_only_years_inside_the_period() {
        let means = yearly(&[(1960, 100.0), (1961, 14.0), (1991, 100.0), (2000, 15.0)]);
        assert_eq!(
            baseline_mean(&means, ReferenceBaseline::Wmo1961To1990),
            Some(14.0)
        );
    }

    #[test]
    fn missing_baseline_is_none_not_zero() {
        // Data only after 1990: the WMO baseline has nothing to average.
        let means = yearly(&[(2000, 15.0), (2001, 15.2)]);
        assert_eq!(baseline_mean(&means, ReferenceBaseline::Wmo1961To1990), None);
        assert_eq!(anomaly(&means, 2000, ReferenceBaseline::Wmo1961To1990), None);
    }

    #[test]
    fn missing_target_year_is_none() {
        let means = yearly(&[(1961, 14.0)]);
        assert_eq!(anomaly(&means, 2000, ReferenceBaseline::Wmo1961To1990), None);
    }

    #[test]
    fn zero_anomaly_is_a_real_value() {
        let means = yearly(&[(1961, 14.0), (2000, 14.0)]);
        assert_eq!(
            anomaly(&means, 2000, ReferenceBaseline::Wmo1961To1990),
            Some(0.0)
        );
    }

    #[test]
    fn pre_industrial_baseline_selects_its_own_range() {
        let means = yearly(&[(1850, 13.0), (1900, 14.0), (1961, 20.0), (2000, 15.0)]);
        assert_eq!(
            baseline_mean(&means, ReferenceBaseline::PreIndustrial1850To1900),
            Some(13.5)
        );
        assert_eq!(
            anomaly(&means, 2000, ReferenceBaseline::PreIndustrial1850To1900),
            Some(1.5)
        );
    }
}
