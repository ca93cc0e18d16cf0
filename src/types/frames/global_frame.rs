//! Contains the `GlobalLazyFrame` wrapper for lazy operations on the global
//! land / land+ocean temperature dataset.

use crate::filtering::ClimateFrameFilterExt;
use crate::types::frames::year_bounds;
use crate::types::season::season_expr;
use polars::prelude::{Expr, LazyFrame, PolarsResult};

/// A wrapper around a Polars `LazyFrame` holding the loaded global dataset
/// (columns `date`, `land_avg`, `land_ocean_avg`, `year`, `month`).
///
/// Instances are obtained via [`crate::ClimateDash`]; all methods are lazy
/// and leave the original frame untouched.
#[derive(Clone)]
pub struct GlobalLazyFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl GlobalLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate.
    pub fn filter(&self, predicate: Expr) -> GlobalLazyFrame {
        GlobalLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Restricts to records within the inclusive year range.
    pub fn years(&self, start_year: i32, end_year: i32) -> GlobalLazyFrame {
        GlobalLazyFrame::new(self.frame.clone().filter_years(start_year, end_year))
    }

    /// Adds the derived `season` column from `month`.
    pub fn with_season(&self) -> GlobalLazyFrame {
        GlobalLazyFrame::new(
            self.frame
                .clone()
                .with_columns([season_expr().alias("season")]),
        )
    }

    /// Minimum and maximum year present, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> PolarsResult<Option<(i32, i32)>> {
        year_bounds(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use polars::prelude::IntoLazy;

    fn test_frame() -> GlobalLazyFrame {
        let df = df!(
            "year" => &[1900i32, 1900, 1901, 1902],
            "month" => &[1i32, 7, 1, 12],
            "land_avg" => &[Some(2.0f64), Some(14.0), Some(3.0), None],
        )
        .unwrap();
        GlobalLazyFrame::new(df.lazy())
    }

    #[test]
    fn years_filter_is_inclusive() {
        let df = test_frame().years(1900, 1901).frame.collect().unwrap();
        assert_eq!(df.height(), 3);
    }

    #[test]
    fn with_season_derives_labels() {
        let df = test_frame().with_season().frame.collect().unwrap();
        let seasons = df.column("season").unwrap().str().unwrap();
        assert_eq!(seasons.get(0), Some("Winter"));
        assert_eq!(seasons.get(1), Some("Summer"));
        assert_eq!(seasons.get(3), Some("Winter"));
    }

    #[test]
    fn year_bounds_span_the_data() {
        let bounds = test_frame().year_bounds().unwrap();
        assert_eq!(bounds, Some((1900, 1902)));
    }

    #[test]
    fn year_bounds_empty_frame_is_none() {
        let empty = test_frame().years(2500, 2600);
        assert_eq!(empty.year_bounds().unwrap(), None);
    }
}
