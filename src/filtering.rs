use crate::types::continent::Continent;
use crate::types::season::Season;
use polars::prelude::{col, lit, LazyFrame};

pub trait ClimateFrameFilterExt {
    /// Filters a loaded frame by a year range (inclusive).
    /// Assumes the derived 'year' column exists.
    ///
    /// # Arguments
    /// * `start_year`: The start year (inclusive).
    /// * `end_year`: The end year (inclusive).
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied.
    fn filter_years(self, start_year: i32, end_year: i32) -> LazyFrame;

    /// Filters a loaded frame to a single year.
    fn filter_year(self, year: i32) -> LazyFrame;

    /// Filters a frame carrying a 'season' column to the given season
    /// subset. An empty subset matches nothing.
    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame;

    /// Filters the per-country frame to the given countries. An empty
    /// selection matches nothing.
    fn filter_countries(self, countries: &[String]) -> LazyFrame;

    /// Filters a frame carrying a 'continent' column to the given continent
    /// subset. An empty subset matches nothing.
    fn filter_continents(self, continents: &[Continent]) -> LazyFrame;
}

impl ClimateFrameFilterExt for LazyFrame {
    fn filter_years(self, start_year: i32, end_year: i32) -> LazyFrame {
        self.filter(
            col("year")
                .gt_eq(lit(start_year))
                .and(col("year").lt_eq(lit(end_year))),
        )
    }

    fn filter_year(self, year: i32) -> LazyFrame {
        self.filter(col("year").eq(lit(year)))
    }

    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame {
        let predicate = seasons.iter().fold(lit(false), |acc, season| {
            acc.or(col("season").eq(lit(season.label())))
        });
        self.filter(predicate)
    }

    fn filter_countries(self, countries: &[String]) -> LazyFrame {
        let predicate = countries.iter().fold(lit(false), |acc, country| {
            acc.or(col("country").eq(lit(country.as_str())))
        });
        self.filter(predicate)
    }

    fn filter_continents(self, continents: &[Continent]) -> LazyFrame {
        let predicate = continents.iter().fold(lit(false), |acc, continent| {
            acc.or(col("continent").eq(lit(continent.label())))
        });
        self.filter(predicate)
    }
}

/// Normalizes and clamps a caller-supplied year range to the dataset's
/// actual bounds: a reversed pair is swapped, then both ends are clamped
/// into `bounds`. The result is always a valid, in-bounds range.
pub fn clamp_year_range(requested: (i32, i32), bounds: (i32, i32)) -> (i32, i32) {
    let (lo, hi) = if requested.0 <= requested.1 {
        requested
    } else {
        (requested.1, requested.0)
    };
    (lo.clamp(bounds.0, bounds.1), hi.clamp(bounds.0, bounds.1))
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use polars::prelude::IntoLazy;

    fn year_frame() -> LazyFrame {
        df!(
            "year" => &[1899i32, 1900, 1950, 2000, 2001],
            "avg_temp" => &[1.0f64, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap()
        .lazy()
    }

    #[test]
    fn filter_years_is_inclusive_on_both_ends() {
        let df = year_frame().filter_years(1900, 2000).collect().unwrap();
        let years = df.column("year").unwrap().i32().unwrap();
        let collected: Vec<i32> = years.into_iter().flatten().collect();
        assert_eq!(collected, vec![1900, 1950, 2000]);
    }

    #[test]
    fn filter_years_excluding_everything_yields_empty_frame() {
        let df = year_frame().filter_years(2100, 2200).collect().unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn filter_year_selects_single_year() {
        let df = year_frame().filter_year(1950).collect().unwrap();
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn filter_seasons_empty_selection_matches_nothing() {
        let frame = df!(
            "season" => &["Winter", "Summer"],
            "avg_temp" => &[1.0f64, 2.0],
        )
        .unwrap()
        .lazy();
        let df = frame.filter_seasons(&[]).collect().unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn filter_seasons_keeps_selected_subset() {
        let frame = df!(
            "season" => &["Winter", "Spring", "Summer", "Autumn"],
            "avg_temp" => &[1.0f64, 2.0, 3.0, 4.0],
        )
        .unwrap()
        .lazy();
        let df = frame
            .filter_seasons(&[Season::Winter, Season::Summer])
            .collect()
            .unwrap();
        let seasons = df.column("season").unwrap().str().unwrap();
        let collected: Vec<&str> = seasons.into_iter().flatten().collect();
        assert_eq!(collected, vec!["Winter", "Summer"]);
    }

    #[test]
    fn filter_countries_keeps_selection() {
        let frame = df!(
            "country" => &["Germany", "Brazil", "Japan"],
            "avg_temp" => &[1.0f64, 2.0, 3.0],
        )
        .unwrap()
        .lazy();
        let df = frame
            .filter_countries(&["Germany".to_string(), "Japan".to_string()])
            .collect()
            .unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn filter_continents_keeps_subset() {
        let frame = df!(
            "continent" => &["Europe", "Asia", "Other"],
            "avg_temp" => &[1.0f64, 2.0, 3.0],
        )
        .unwrap()
        .lazy();
        let df = frame
            .filter_continents(&[Continent::Other])
            .collect()
            .unwrap();
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn clamp_year_range_swaps_and_clamps() {
        let bounds = (1850, 2015);
        assert_eq!(clamp_year_range((1900, 2000), bounds), (1900, 2000));
        assert_eq!(clamp_year_range((2000, 1900), bounds), (1900, 2000));
        assert_eq!(clamp_year_range((1700, 2100), bounds), (1850, 2015));
        assert_eq!(clamp_year_range((2100, 2200), bounds), (2015, 2015));
    }
}
