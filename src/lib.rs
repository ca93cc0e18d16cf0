mod aggregate;
mod climatedash;
mod dataset;
mod error;
mod filtering;
mod types;
mod utils;

pub use climatedash::*;
pub use error::ClimateDashError;

pub use aggregate::anomaly::{anomaly, baseline_mean};
pub use aggregate::engine::{aggregate, grouped_mean, Partition, MEAN_COLUMN};
pub use aggregate::matrix::month_matrix;

pub use filtering::{clamp_year_range, ClimateFrameFilterExt};

pub use types::baseline::ReferenceBaseline;
pub use types::continent::{classify, Continent};
pub use types::dataset_kind::DatasetKind;
pub use types::outputs::{ChoroplethLayer, Kpi, PointX, Series, SeriesPoint, TemperatureMatrix};
pub use types::season::{season_expr, Season};
pub use types::temperature_kind::{Measure, TemperatureKind};

pub use types::frames::country_frame::CountryLazyFrame;
pub use types::frames::global_frame::GlobalLazyFrame;

pub use dataset::error::DatasetError;
pub use dataset::loader::{DatasetLoader, DatasetPaths};
