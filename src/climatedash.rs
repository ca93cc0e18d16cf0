//! This module provides the main entry point of the crate: the
//! [`ClimateDash`] client. It loads the two temperature datasets once,
//! keeps them cached for the process lifetime, and exposes one query method
//! per dashboard view. Every query re-runs the filter → aggregate → format
//! pipeline against the cached frames and returns plain values the
//! presentation layer can render directly.

use crate::aggregate::anomaly;
use crate::aggregate::engine::{aggregate, grouped_mean, Partition, MEAN_COLUMN};
use crate::aggregate::matrix;
use crate::dataset::frame_cache::FrameCache;
use crate::dataset::loader::DatasetPaths;
use crate::error::ClimateDashError;
use crate::filtering::{clamp_year_range, ClimateFrameFilterExt};
use crate::types::baseline::ReferenceBaseline;
use crate::types::continent::Continent;
use crate::types::dataset_kind::DatasetKind;
use crate::types::frames::country_frame::CountryLazyFrame;
use crate::types::frames::global_frame::GlobalLazyFrame;
use crate::types::outputs::{ChoroplethLayer, Kpi, PointX, Series, SeriesPoint, TemperatureMatrix};
use crate::types::season::Season;
use crate::types::temperature_kind::TemperatureKind;
use crate::utils::{date_from_days, ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use polars::prelude::{col, IntoLazy, SortMultipleOptions};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resolves a caller-supplied year range against the dataset bounds:
/// omitted ends default to the bounds, reversed pairs are swapped, and the
/// result is clamped into the bounds. `None` means the dataset is empty.
fn resolve_years(
    bounds: Option<(i32, i32)>,
    start: Option<i32>,
    end: Option<i32>,
) -> Option<(i32, i32)> {
    let bounds = bounds?;
    let requested = (start.unwrap_or(bounds.0), end.unwrap_or(bounds.1));
    Some(clamp_year_range(requested, bounds))
}

/// Map and KPI values are rounded to two decimals before display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The main client for exploring the temperature datasets.
///
/// Construction resolves and prepares the cache directory; datasets load
/// lazily on the first query touching them and stay cached afterwards.
/// Create an instance with the builder:
///
/// ```no_run
/// # use climatedash::{ClimateDash, ClimateDashError};
/// # use std::path::PathBuf;
/// # fn run() -> Result<(), ClimateDashError> {
/// let dash = ClimateDash::builder()
///     .global_data(PathBuf::from("GlobalTemperatures.csv"))
///     .country_data(PathBuf::from("GlobalLandTemperaturesByCountry.csv"))
///     .build()?;
/// let series = dash.global_series().start_year(1900).end_year(2015).call()?;
/// # Ok(())
/// # }
/// ```
pub struct ClimateDash {
    frames: FrameCache,
}

#[bon]
impl ClimateDash {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `.global_data(PathBuf)`: **Required.** Path to the global
    ///   temperature CSV.
    /// * `.country_data(PathBuf)`: **Required.** Path to the per-country
    ///   temperature CSV.
    /// * `.cache_folder(PathBuf)`: Optional. Where Parquet cache files are
    ///   written. Defaults to a `climatedash_cache` directory under the
    ///   system cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateDashError::CacheDirResolution`] when no default
    /// cache directory can be determined, and
    /// [`ClimateDashError::CacheDirCreation`] /
    /// [`ClimateDashError::CacheDirNotADirectory`] when the cache directory
    /// cannot be prepared.
    #[builder]
    pub fn new(
        global_data: PathBuf,
        country_data: PathBuf,
        cache_folder: Option<PathBuf>,
    ) -> Result<Self, ClimateDashError> {
        let cache_folder = match cache_folder {
            Some(dir) => dir,
            None => get_cache_dir()?,
        };
        ensure_cache_dir_exists(&cache_folder)?;
        Ok(Self {
            frames: FrameCache::new(
                DatasetPaths {
                    global: global_data,
                    country: country_data,
                },
                &cache_folder,
            ),
        })
    }

    /// The global dataset as a typed lazy frame.
    pub fn global(&self) -> Result<GlobalLazyFrame, ClimateDashError> {
        Ok(GlobalLazyFrame::new(
            self.frames.get(DatasetKind::GlobalMonthly)?,
        ))
    }

    /// The per-country dataset as a typed lazy frame.
    pub fn by_country(&self) -> Result<CountryLazyFrame, ClimateDashError> {
        Ok(CountryLazyFrame::new(self.frames.get(DatasetKind::ByCountry)?))
    }

    /// Year bounds of the global dataset, for slider limits.
    pub fn global_year_bounds(&self) -> Result<Option<(i32, i32)>, ClimateDashError> {
        Ok(self.global()?.year_bounds()?)
    }

    /// Year bounds of the per-country dataset.
    pub fn country_year_bounds(&self) -> Result<Option<(i32, i32)>, ClimateDashError> {
        Ok(self.by_country()?.year_bounds()?)
    }

    /// Distinct selectable country names (region aggregates excluded).
    pub fn countries(&self) -> Result<Vec<String>, ClimateDashError> {
        Ok(self.by_country()?.countries()?)
    }

    /// Monthly-resolution global temperature series for the line-chart
    /// view: one series per selected measure, ordered by date, with null
    /// measurements skipped.
    ///
    /// # Arguments
    ///
    /// * `.start_year(i32)` / `.end_year(i32)`: Optional. Defaults to the
    ///   dataset bounds; reversed or out-of-bounds ranges are normalized
    ///   and clamped.
    /// * `.kind(TemperatureKind)`: Optional. Defaults to
    ///   [`TemperatureKind::Both`].
    #[builder]
    pub fn global_series(
        &self,
        start_year: Option<i32>,
        end_year: Option<i32>,
        kind: Option<TemperatureKind>,
    ) -> Result<Vec<Series>, ClimateDashError> {
        let kind = kind.unwrap_or_default();
        let frame = self.global()?;
        let Some((start, end)) = resolve_years(frame.year_bounds()?, start_year, end_year) else {
            return Ok(Vec::new());
        };
        let filtered = frame.years(start, end);

        let mut series = Vec::with_capacity(kind.measures().len());
        for measure in kind.measures() {
            let df = filtered
                .frame
                .clone()
                .select([col("date"), col(measure.column())])
                .filter(col(measure.column()).is_not_null())
                .sort_by_exprs(vec![col("date")], SortMultipleOptions::default())
                .collect()?;
            let dates = df.column("date")?.date()?;
            let values = df.column(measure.column())?.f64()?;
            let mut points = Vec::with_capacity(df.height());
            for i in 0..df.height() {
                let (Some(days), Some(value)) = (dates.get(i), values.get(i)) else {
                    continue;
                };
                let Some(date) = date_from_days(days) else {
                    continue;
                };
                points.push(SeriesPoint {
                    x: PointX::Date(date),
                    value,
                });
            }
            series.push(Series::new(measure.label(), points));
        }
        Ok(series)
    }

    /// Yearly mean land temperature per season, one series per selected
    /// season (x = year). An empty season selection yields no series.
    #[builder]
    pub fn seasonal_series(
        &self,
        start_year: Option<i32>,
        end_year: Option<i32>,
        seasons: Option<Vec<Season>>,
    ) -> Result<Vec<Series>, ClimateDashError> {
        let selected = seasons.unwrap_or_else(|| Season::ALL.to_vec());
        let frame = self.global()?;
        let Some((start, end)) = resolve_years(frame.year_bounds()?, start_year, end_year) else {
            return Ok(Vec::new());
        };
        let filtered = frame.years(start, end).with_season();
        let df = aggregate(
            filtered.frame.filter_seasons(&selected),
            Partition::YearSeason,
            "land_avg",
        )?;

        let years = df.column("year")?.i32()?;
        let labels = df.column("season")?.str()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut by_season: BTreeMap<&str, Vec<SeriesPoint>> = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(year), Some(label), Some(mean)) =
                (years.get(i), labels.get(i), means.get(i))
            {
                by_season.entry(label).or_default().push(SeriesPoint {
                    x: PointX::Year(year),
                    value: mean,
                });
            }
        }

        let mut series = Vec::new();
        for season in &selected {
            if let Some(points) = by_season.remove(season.label()) {
                series.push(Series::new(season.label(), points));
            }
        }
        Ok(series)
    }

    /// Year×month heatmap grid: global mean land temperature, or one
    /// country's mean temperature when `.country(..)` is set. Cells without
    /// observations are absent, not 0 °C.
    #[builder]
    pub fn month_matrix(
        &self,
        country: Option<String>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<TemperatureMatrix, ClimateDashError> {
        let df = match country {
            None => {
                let frame = self.global()?;
                let Some((start, end)) =
                    resolve_years(frame.year_bounds()?, start_year, end_year)
                else {
                    return Ok(TemperatureMatrix::default());
                };
                aggregate(frame.years(start, end).frame, Partition::YearMonth, "land_avg")?
            }
            Some(country) => {
                let frame = self.by_country()?;
                let Some((start, end)) =
                    resolve_years(frame.year_bounds()?, start_year, end_year)
                else {
                    return Ok(TemperatureMatrix::default());
                };
                let selection = [country];
                aggregate(
                    frame.years(start, end).for_countries(&selection).frame,
                    Partition::CountryYearMonth,
                    "avg_temp",
                )?
            }
        };
        Ok(matrix::month_matrix(&df)?)
    }

    /// Yearly mean temperature per selected country, one series per
    /// country in selection order (x = year). Countries without data in the
    /// range produce no series.
    #[builder]
    pub fn country_series(
        &self,
        countries: Vec<String>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<Vec<Series>, ClimateDashError> {
        let frame = self.by_country()?;
        let Some((start, end)) = resolve_years(frame.year_bounds()?, start_year, end_year) else {
            return Ok(Vec::new());
        };
        let filtered = frame
            .years(start, end)
            .without_region_aggregates()
            .for_countries(&countries);
        let df = aggregate(filtered.frame, Partition::CountryYear, "avg_temp")?;

        let names = df.column("country")?.str()?;
        let years = df.column("year")?.i32()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut by_country: BTreeMap<&str, Vec<SeriesPoint>> = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(name), Some(year), Some(mean)) =
                (names.get(i), years.get(i), means.get(i))
            {
                by_country.entry(name).or_default().push(SeriesPoint {
                    x: PointX::Year(year),
                    value: mean,
                });
            }
        }

        let mut series = Vec::new();
        for country in &countries {
            if let Some(points) = by_country.remove(country.as_str()) {
                series.push(Series::new(country.clone(), points));
            }
        }
        Ok(series)
    }

    /// Yearly mean temperature per continent after classification, one
    /// series per selected continent (x = year). Unmapped countries appear
    /// under the visible `Other` category.
    #[builder]
    pub fn continent_series(
        &self,
        continents: Option<Vec<Continent>>,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Result<Vec<Series>, ClimateDashError> {
        let selected = continents.unwrap_or_else(|| Continent::ALL.to_vec());
        let frame = self.by_country()?;
        let Some((start, end)) = resolve_years(frame.year_bounds()?, start_year, end_year) else {
            return Ok(Vec::new());
        };
        let classified = frame
            .years(start, end)
            .without_region_aggregates()
            .with_continent()?;
        let df = aggregate(
            classified.frame.filter_continents(&selected),
            Partition::ContinentYear,
            "avg_temp",
        )?;

        let labels = df.column("continent")?.str()?;
        let years = df.column("year")?.i32()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut by_continent: BTreeMap<&str, Vec<SeriesPoint>> = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(label), Some(year), Some(mean)) =
                (labels.get(i), years.get(i), means.get(i))
            {
                by_continent.entry(label).or_default().push(SeriesPoint {
                    x: PointX::Year(year),
                    value: mean,
                });
            }
        }

        let mut series = Vec::new();
        for continent in &selected {
            if let Some(points) = by_continent.remove(continent.label()) {
                series.push(Series::new(continent.label(), points));
            }
        }
        Ok(series)
    }

    /// Per-country mean temperature for one year, keyed by country name and
    /// rounded to two decimals, for choropleth coloring. Countries without
    /// data that year are absent.
    #[builder]
    pub fn country_temperature_map(&self, year: i32) -> Result<ChoroplethLayer, ClimateDashError> {
        let frame = self.by_country()?.without_region_aggregates();
        let df = aggregate(
            frame.frame.filter_year(year),
            Partition::CountryYear,
            "avg_temp",
        )?;

        let names = df.column("country")?.str()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut values = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(name), Some(mean)) = (names.get(i), means.get(i)) {
                values.insert(name.to_string(), round2(mean));
            }
        }
        Ok(ChoroplethLayer { year, values })
    }

    /// Per-country temperature anomaly for one year against the chosen
    /// baseline, for choropleth coloring. A country lacking target-year or
    /// baseline data is absent from the result; absence of data is never
    /// reported as a 0 °C deviation.
    ///
    /// # Arguments
    ///
    /// * `.year(i32)`: **Required.** Target year.
    /// * `.baseline(ReferenceBaseline)`: Optional. Defaults to the WMO
    ///   1961–1990 period.
    #[builder]
    pub fn anomaly_map(
        &self,
        year: i32,
        baseline: Option<ReferenceBaseline>,
    ) -> Result<ChoroplethLayer, ClimateDashError> {
        let baseline = baseline.unwrap_or_default();
        let yearly = self.country_yearly_means()?;
        let mut values = BTreeMap::new();
        for (country, means) in &yearly {
            if let Some(deviation) = anomaly::anomaly(means, year, baseline) {
                values.insert(country.clone(), round2(deviation));
            }
        }
        Ok(ChoroplethLayer { year, values })
    }

    /// Worldwide mean temperature for one year: the mean over that year's
    /// per-country means. `None` when no country has data for the year.
    pub fn global_average(&self, year: i32) -> Result<Option<f64>, ClimateDashError> {
        Ok(self.global_yearly_means()?.get(&year).copied())
    }

    /// Worldwide temperature anomaly for one year against the chosen
    /// baseline, computed over the global yearly means. `None` when the
    /// target year or the whole baseline period has no data.
    #[builder]
    pub fn global_anomaly(
        &self,
        year: i32,
        baseline: Option<ReferenceBaseline>,
    ) -> Result<Option<f64>, ClimateDashError> {
        let baseline = baseline.unwrap_or_default();
        Ok(anomaly::anomaly(&self.global_yearly_means()?, year, baseline))
    }

    /// KPI pair for the worldwide mean temperature of one year.
    pub fn global_average_kpi(&self, year: i32) -> Result<Option<Kpi>, ClimateDashError> {
        Ok(self.global_average(year)?.map(|value| Kpi {
            label: format!("Global average temperature ({})", year),
            value: format!("{:.2} °C", round2(value)),
        }))
    }

    /// KPI pair for the worldwide anomaly of one year vs a baseline.
    pub fn global_anomaly_kpi(
        &self,
        year: i32,
        baseline: ReferenceBaseline,
    ) -> Result<Option<Kpi>, ClimateDashError> {
        let value = self.global_anomaly().year(year).baseline(baseline).call()?;
        Ok(value.map(|value| Kpi {
            label: format!("Temperature anomaly ({} vs {})", year, baseline),
            value: format!("{:+.2} °C", round2(value)),
        }))
    }

    /// Per-country map of year → yearly mean temperature.
    fn country_yearly_means(
        &self,
    ) -> Result<BTreeMap<String, BTreeMap<i32, f64>>, ClimateDashError> {
        let frame = self.by_country()?.without_region_aggregates();
        let df = aggregate(frame.frame, Partition::CountryYear, "avg_temp")?;

        let names = df.column("country")?.str()?;
        let years = df.column("year")?.i32()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut map: BTreeMap<String, BTreeMap<i32, f64>> = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(name), Some(year), Some(mean)) =
                (names.get(i), years.get(i), means.get(i))
            {
                map.entry(name.to_string()).or_default().insert(year, mean);
            }
        }
        Ok(map)
    }

    /// Global yearly means: per year, the mean over that year's per-country
    /// means.
    fn global_yearly_means(&self) -> Result<BTreeMap<i32, f64>, ClimateDashError> {
        let frame = self.by_country()?.without_region_aggregates();
        let per_country = aggregate(frame.frame, Partition::CountryYear, "avg_temp")?;
        let df = grouped_mean(per_country.lazy(), &["year"], MEAN_COLUMN)?;

        let years = df.column("year")?.i32()?;
        let means = df.column(MEAN_COLUMN)?.f64()?;
        let mut map = BTreeMap::new();
        for i in 0..df.height() {
            if let (Some(year), Some(mean)) = (years.get(i), means.get(i)) {
                map.insert(year, mean);
            }
        }
        Ok(map)
    }
}
