pub mod country_frame;
pub mod global_frame;

use polars::prelude::{col, LazyFrame, PolarsResult};

/// Minimum and maximum of the `year` column, `None` when the frame is empty.
pub(crate) fn year_bounds(frame: &LazyFrame) -> PolarsResult<Option<(i32, i32)>> {
    let df = frame
        .clone()
        .select([
            col("year").min().alias("min_year"),
            col("year").max().alias("max_year"),
        ])
        .collect()?;
    let min = df.column("min_year")?.i32()?.get(0);
    let max = df.column("max_year")?.i32()?.get(0);
    Ok(match (min, max) {
        (Some(min), Some(max)) => Some((min, max)),
        _ => None,
    })
}
