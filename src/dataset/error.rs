use crate::types::dataset_kind::DatasetKind;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read CSV source '{path}' for {dataset} dataset")]
    CsvRead {
        dataset: DatasetKind,
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' not found in {dataset} dataset")]
    MissingColumn {
        dataset: DatasetKind,
        column: &'static str,
    },

    #[error("Failed to decompose timestamps for {dataset} dataset")]
    Decompose {
        dataset: DatasetKind,
        #[source]
        source: PolarsError,
    },

    #[error("{count} record(s) without a timestamp in {dataset} dataset")]
    MissingTimestamps { dataset: DatasetKind, count: usize },

    // Errors while writing the parquet cache file
    #[error("I/O error writing parquet cache file '{0}'")]
    ParquetWriteIo(PathBuf, #[source] std::io::Error),
    #[error("Encoding error writing parquet cache file '{0}'")]
    ParquetWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to scan parquet cache file '{0}'")]
    ParquetScan(PathBuf, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
