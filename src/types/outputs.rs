//! Plain value types handed to the presentation layer.
//!
//! Everything here is renderer-agnostic: ordered series for line charts, a
//! year×month grid for heatmaps, per-country scalars for choropleth maps,
//! and formatted KPI pairs. Absence of data is always explicit (`Option`,
//! missing map keys), never encoded as 0.0.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Horizontal coordinate of a series point: a calendar year for yearly
/// aggregates, a date for monthly-resolution series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PointX {
    Year(i32),
    Date(NaiveDate),
}

/// One point of a line-chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: PointX,
    /// Temperature in °C.
    pub value: f64,
}

/// An ordered, labelled line-chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// A year×month grid of mean temperatures for heatmap rendering.
///
/// `rows` is indexed parallel to `years`; each row holds one cell per entry
/// of `months` (always January through December). A cell with no underlying
/// observations is `None` and must be rendered as "no data", not as 0 °C.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TemperatureMatrix {
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl TemperatureMatrix {
    /// Cell value for a (year, month) pair, if the year is present and the
    /// cell holds data.
    pub fn cell(&self, year: i32, month: u32) -> Option<f64> {
        let row = self.years.iter().position(|y| *y == year)?;
        let column = self.months.iter().position(|m| *m == month)?;
        self.rows[row][column]
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Per-country scalars (mean temperature or anomaly) for one year, keyed by
/// country name. Countries without data are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethLayer {
    pub year: i32,
    pub values: BTreeMap<String, f64>,
}

impl ChoroplethLayer {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A formatted key-performance-indicator pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_cell_lookup() {
        let matrix = TemperatureMatrix {
            years: vec![1900, 1901],
            months: (1..=12).collect(),
            rows: vec![vec![Some(1.0); 12], {
                let mut row = vec![Some(2.0); 12];
                row[2] = None;
                row
            }],
        };
        assert_eq!(matrix.cell(1900, 1), Some(1.0));
        assert_eq!(matrix.cell(1901, 3), None);
        assert_eq!(matrix.cell(1902, 1), None);
        assert_eq!(matrix.cell(1900, 13), None);
    }

    #[test]
    fn outputs_serialize_to_json() {
        let series = Series::new(
            "Land average",
            vec![SeriesPoint {
                x: PointX::Year(1900),
                value: 8.5,
            }],
        );
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("Land average"));
        assert!(json.contains("1900"));

        let kpi = Kpi {
            label: "Global average temperature (2000)".into(),
            value: "14.32 °C".into(),
        };
        assert!(serde_json::to_string(&kpi).unwrap().contains("14.32"));
    }
}
