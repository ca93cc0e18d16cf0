//! Grouped-mean aggregation over the loaded temperature frames.
//!
//! All dashboard views reduce to one operation: partition records by a key
//! combination and take the arithmetic mean of one measure column per
//! partition, ignoring nulls. A partition whose measurements are all null
//! produces no output row at all; consumers must treat absent keys as
//! "no data", never as zero.

use polars::frame::DataFrame;
use polars::prelude::{col, LazyFrame, PolarsResult, SortMultipleOptions};

/// Name of the mean column in every aggregation result.
pub const MEAN_COLUMN: &str = "mean_temp";

/// The group-by partitions the dashboard views use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Per year, over the whole dataset.
    Year,
    /// Per (year, month).
    YearMonth,
    /// Per (year, season); requires the derived `season` column.
    YearSeason,
    /// Per (country, year).
    CountryYear,
    /// Per (continent, year); requires the joined `continent` column.
    ContinentYear,
    /// Per (country, year, month).
    CountryYearMonth,
}

impl Partition {
    /// Key columns of this partition, in output sort order.
    pub fn key_columns(self) -> &'static [&'static str] {
        match self {
            Partition::Year => &["year"],
            Partition::YearMonth => &["year", "month"],
            Partition::YearSeason => &["year", "season"],
            Partition::CountryYear => &["country", "year"],
            Partition::ContinentYear => &["continent", "year"],
            Partition::CountryYearMonth => &["country", "year", "month"],
        }
    }
}

/// Computes the per-partition mean of `measure` for one of the fixed
/// dashboard partitions. See [`grouped_mean`] for the semantics.
pub fn aggregate(
    frame: LazyFrame,
    partition: Partition,
    measure: &str,
) -> PolarsResult<DataFrame> {
    grouped_mean(frame, partition.key_columns(), measure)
}

/// Partitions `frame` by `keys` and computes the mean of `measure` per
/// partition, as a [`MEAN_COLUMN`] column next to the key columns.
///
/// Null measurements are excluded from each mean; partitions with no
/// non-null measurement are dropped from the result. Rows are sorted by the
/// key columns so output order is deterministic. An input excluding all
/// records yields an empty frame, not an error.
pub fn grouped_mean(frame: LazyFrame, keys: &[&str], measure: &str) -> PolarsResult<DataFrame> {
    let key_exprs: Vec<_> = keys.iter().map(|key| col(*key)).collect();
    frame
        .group_by(key_exprs)
        .agg([col(measure).mean().alias(MEAN_COLUMN)])
        .filter(col(MEAN_COLUMN).is_not_null())
        .sort_by_exprs(
            keys.iter().map(|key| col(*key)).collect::<Vec<_>>(),
            SortMultipleOptions::default(),
        )
        .collect()
}
