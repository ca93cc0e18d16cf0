//! Contains the `CountryLazyFrame` wrapper for lazy operations on the
//! per-country temperature dataset.

use crate::filtering::ClimateFrameFilterExt;
use crate::types::continent::{self, Continent};
use crate::types::frames::year_bounds;
use polars::prelude::{
    col, lit, Expr, IntoLazy, JoinArgs, JoinType, LazyFrame, PolarsResult,
};
use std::collections::BTreeSet;

/// Names appearing in the country dataset that are continent-level
/// aggregates, not countries. Excluded from country-level analyses.
const REGION_AGGREGATES: &[&str] = &[
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "South America",
    "Oceania",
];

/// A wrapper around a Polars `LazyFrame` holding the loaded per-country
/// dataset (columns `date`, `country`, `avg_temp`, `year`, `month`).
#[derive(Clone)]
pub struct CountryLazyFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl CountryLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate.
    pub fn filter(&self, predicate: Expr) -> CountryLazyFrame {
        CountryLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Restricts to records within the inclusive year range.
    pub fn years(&self, start_year: i32, end_year: i32) -> CountryLazyFrame {
        CountryLazyFrame::new(self.frame.clone().filter_years(start_year, end_year))
    }

    /// Restricts to the given countries.
    pub fn for_countries(&self, countries: &[String]) -> CountryLazyFrame {
        CountryLazyFrame::new(self.frame.clone().filter_countries(countries))
    }

    /// Drops the continent-level aggregate rows the source file mixes in
    /// with real countries.
    pub fn without_region_aggregates(&self) -> CountryLazyFrame {
        let keep = REGION_AGGREGATES
            .iter()
            .fold(lit(true), |acc, name| {
                acc.and(col("country").neq(lit(*name)))
            });
        self.filter(keep)
    }

    /// Adds a `continent` column by joining the static classification table;
    /// unmapped countries get the [`Continent::Other`] label.
    pub fn with_continent(&self) -> PolarsResult<CountryLazyFrame> {
        let lookup = continent::lookup_frame()?.lazy();
        let joined = self
            .frame
            .clone()
            .join(
                lookup,
                [col("country")],
                [col("country")],
                JoinArgs::new(JoinType::Left),
            )
            .with_columns([col("continent").fill_null(lit(Continent::Other.label()))]);
        Ok(CountryLazyFrame::new(joined))
    }

    /// Minimum and maximum year present, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> PolarsResult<Option<(i32, i32)>> {
        year_bounds(&self.frame)
    }

    /// Distinct country names, region aggregates excluded, sorted. Feeds the
    /// UI's country dropdowns.
    pub fn countries(&self) -> PolarsResult<Vec<String>> {
        let df = self
            .without_region_aggregates()
            .frame
            .select([col("country")])
            .collect()?;
        let names = df.column("country")?.str()?;
        let unique: BTreeSet<String> = names.into_iter().flatten().map(str::to_string).collect();
        Ok(unique.into_iter().collect())
    }
}
