use crate::dataset::error::DatasetError;
use crate::types::dataset_kind::DatasetKind;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locations of the two source CSV snapshots.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub global: PathBuf,
    pub country: PathBuf,
}

/// Reads the source CSVs, normalizes them, and caches the result as Parquet.
///
/// The first load of each dataset parses and validates the CSV (any
/// malformed or missing timestamp is fatal), derives the `year` and `month`
/// columns, and writes a Parquet file into the cache directory. Later loads
/// scan the Parquet file directly.
pub struct DatasetLoader {
    paths: DatasetPaths,
    cache_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(paths: DatasetPaths, cache_dir: &Path) -> DatasetLoader {
        DatasetLoader {
            paths,
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    /// Loads a dataset as a LazyFrame, through the Parquet cache.
    pub fn get_frame(&self, kind: DatasetKind) -> Result<LazyFrame, DatasetError> {
        let parquet_path = self.cache_dir.join(kind.cache_file_name());

        if fs::metadata(&parquet_path).is_ok() {
            info!(
                "Cache hit for {} dataset at {:?}",
                kind, parquet_path
            );
        } else {
            warn!(
                "Cache miss for {} dataset. Reading and processing the CSV source.",
                kind
            );
            let df = self.read_source(kind)?;

            fs::create_dir_all(&self.cache_dir)
                .map_err(|e| DatasetError::CacheDirCreation(self.cache_dir.clone(), e))?;
            Self::cache_dataframe(df, &self.cache_dir, &parquet_path)?;
            info!("Cached {} dataset to {:?}", kind, parquet_path);
        }

        LazyFrame::scan_parquet(&parquet_path, Default::default())
            .map_err(|e| DatasetError::ParquetScan(parquet_path.clone(), e))
    }

    fn source_path(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::GlobalMonthly => &self.paths.global,
            DatasetKind::ByCountry => &self.paths.country,
        }
    }

    /// Reads and normalizes one CSV source into a validated DataFrame.
    fn read_source(&self, kind: DatasetKind) -> Result<DataFrame, DatasetError> {
        let path = self.source_path(kind).to_path_buf();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))
            .map_err(|e| DatasetError::CsvRead {
                dataset: kind,
                path: path.clone(),
                source: e,
            })?
            .finish()
            .map_err(|e| DatasetError::CsvRead {
                dataset: kind,
                path,
                source: e,
            })?;
        Self::decompose(df, kind)
    }

    /// Renames the measure columns, parses timestamps strictly, and derives
    /// `year` and `month`. A timestamp that fails to parse aborts the load;
    /// so does a row with no timestamp at all.
    fn decompose(df: DataFrame, kind: DatasetKind) -> Result<DataFrame, DatasetError> {
        for column in kind.required_source_columns() {
            if df.get_column_index(column).is_none() {
                return Err(DatasetError::MissingColumn {
                    dataset: kind,
                    column,
                });
            }
        }
        if df.get_column_index(kind.timestamp_column()).is_none() {
            return Err(DatasetError::MissingColumn {
                dataset: kind,
                column: kind.timestamp_column(),
            });
        }

        let date = col(kind.timestamp_column())
            .str()
            .to_date(StrptimeOptions {
                format: Some("%Y-%m-%d".into()),
                strict: true,
                ..Default::default()
            })
            .alias("date");

        let mut selection: Vec<Expr> = vec![date];
        match kind {
            DatasetKind::GlobalMonthly => {
                selection.push(
                    col("LandAverageTemperature")
                        .cast(DataType::Float64)
                        .alias("land_avg"),
                );
                selection.push(
                    col("LandAndOceanAverageTemperature")
                        .cast(DataType::Float64)
                        .alias("land_ocean_avg"),
                );
            }
            DatasetKind::ByCountry => {
                selection.push(col("Country").alias("country"));
                selection.push(
                    col("AverageTemperature")
                        .cast(DataType::Float64)
                        .alias("avg_temp"),
                );
            }
        }

        let df = df
            .lazy()
            .select(selection)
            .with_columns([
                col("date").dt().year().alias("year"),
                col("date").dt().month().cast(DataType::Int32).alias("month"),
            ])
            .collect()
            .map_err(|e| DatasetError::Decompose {
                dataset: kind,
                source: e,
            })?;

        let missing = df.column("date")?.null_count();
        if missing > 0 {
            return Err(DatasetError::MissingTimestamps {
                dataset: kind,
                count: missing,
            });
        }

        debug_assert_eq!(df.get_column_names_str(), kind.loaded_columns());
        Ok(df)
    }

    /// Writes a DataFrame to the Parquet cache path. The write goes through
    /// a temp file in the same directory so a crash never leaves a truncated
    /// cache file behind.
    fn cache_dataframe(
        mut df: DataFrame,
        cache_dir: &Path,
        path: &Path,
    ) -> Result<(), DatasetError> {
        let tmp = NamedTempFile::new_in(cache_dir)
            .map_err(|e| DatasetError::ParquetWriteIo(path.to_path_buf(), e))?;
        ParquetWriter::new(tmp.as_file())
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut df)
            .map_err(|e| DatasetError::ParquetWritePolars(path.to_path_buf(), e))?;
        tmp.persist(path)
            .map_err(|e| DatasetError::ParquetWriteIo(path.to_path_buf(), e.error))?;
        Ok(())
    }
}
