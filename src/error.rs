use crate::dataset::error::DatasetError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateDashError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("Failed to determine cache directory")]
    CacheDirResolution,

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Cache path '{0}' exists but is not a directory")]
    CacheDirNotADirectory(PathBuf),
}
