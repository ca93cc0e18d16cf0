use crate::error::ClimateDashError;
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "climatedash_cache";

pub fn get_cache_dir() -> Result<PathBuf, ClimateDashError> {
    dirs::cache_dir()
        .map(|p| p.join(CACHE_DIR_NAME))
        .ok_or(ClimateDashError::CacheDirResolution)
}

pub fn ensure_cache_dir_exists(path: &Path) -> Result<(), ClimateDashError> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(ClimateDashError::CacheDirNotADirectory(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating cache directory: {}", path.display());
            fs::create_dir_all(path)
                .map_err(|e| ClimateDashError::CacheDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(ClimateDashError::CacheDirCreation(path.to_path_buf(), e)),
    }
}

/// Converts a Polars Date value (days since 1970-01-01) to a `NaiveDate`.
/// The offset shifts to days since 0001-01-01, which chrono expects.
pub fn date_from_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days + 719_163)
}
