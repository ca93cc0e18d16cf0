//! Builds the year×month heatmap grid from an aggregated frame.

use crate::aggregate::engine::MEAN_COLUMN;
use crate::types::outputs::TemperatureMatrix;
use polars::frame::DataFrame;
use polars::prelude::PolarsResult;
use std::collections::BTreeMap;

/// Arranges a (year, month, mean) aggregation into a [`TemperatureMatrix`].
///
/// Rows are the years present in `df`, ascending; columns are always the
/// twelve months. A (year, month) pair without an aggregated mean stays an
/// absent cell and must not be rendered as 0 °C.
pub fn month_matrix(df: &DataFrame) -> PolarsResult<TemperatureMatrix> {
    let years = df.column("year")?.i32()?;
    let months = df.column("month")?.i32()?;
    let means = df.column(MEAN_COLUMN)?.f64()?;

    let mut cells: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
    for i in 0..df.height() {
        if let (Some(year), Some(month), Some(mean)) = (years.get(i), months.get(i), means.get(i))
        {
            if (1..=12).contains(&month) {
                cells.entry(year).or_insert([None; 12])[(month - 1) as usize] = Some(mean);
            }
        }
    }

    let mut matrix = TemperatureMatrix {
        years: Vec::with_capacity(cells.len()),
        months: (1..=12).collect(),
        rows: Vec::with_capacity(cells.len()),
    };
    for (year, row) in cells {
        matrix.years.push(year);
        matrix.rows.push(row.to_vec());
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::engine::{aggregate, Partition};
    use polars::df;
    use polars::prelude::IntoLazy;

    #[test]
    fn matrix_lays_out_years_by_months() {
        let frame = df!(
            "year" => &[1901i32, 1900, 1900],
            "month" => &[1i32, 2, 1],
            "land_avg" => &[5.0f64, 3.0, 2.0],
        )
        .unwrap()
        .lazy();
        let df = aggregate(frame, Partition::YearMonth, "land_avg").unwrap();
        let matrix = month_matrix(&df).unwrap();

        assert_eq!(matrix.years, vec![1900, 1901]);
        assert_eq!(matrix.months.len(), 12);
        assert_eq!(matrix.cell(1900, 1), Some(2.0));
        assert_eq!(matrix.cell(1900, 2), Some(3.0));
        assert_eq!(matrix.cell(1901, 1), Some(5.0));
    }

    #[test]
    fn months_without_observations_stay_absent() {
        // March 1900 has only a null measurement; the cell must stay unset
        // rather than surface as a false 0 °C reading.
        let frame = df!(
            "year" => &[1900i32, 1900],
            "month" => &[1i32, 3],
            "land_avg" => &[Some(2.0f64), None],
        )
        .unwrap()
        .lazy();
        let df = aggregate(frame, Partition::YearMonth, "land_avg").unwrap();
        let matrix = month_matrix(&df).unwrap();

        assert_eq!(matrix.cell(1900, 1), Some(2.0));
        assert_eq!(matrix.cell(1900, 3), None);
        assert_ne!(matrix.cell(1900, 3), Some(0.0));
    }

    #[test]
    fn empty_aggregation_builds_empty_matrix() {
        let frame = df!(
            "year" => &[1900i32],
            "month" => &[1i32],
            "land_avg" => &[Option::<f64>::None],
        )
        .unwrap()
        .lazy();
        let df = aggregate(frame, Partition::YearMonth, "land_avg").unwrap();
        let matrix = month_matrix(&df).unwrap();
        assert!(matrix.is_empty());
    }
}
