use crate::dataset::error::DatasetError;
use crate::dataset::loader::{DatasetLoader, DatasetPaths};
use crate::types::dataset_kind::DatasetKind;
use polars::prelude::LazyFrame;
use std::collections::{hash_map::Entry, HashMap};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Process-wide memoization of the loaded dataset frames.
///
/// Each dataset is loaded at most once per process; later requests clone the
/// cached `LazyFrame`. The cache is never invalidated, since the source
/// files are fixed snapshots.
pub struct FrameCache {
    loader: DatasetLoader,
    lazyframe_cache: Mutex<HashMap<DatasetKind, LazyFrame>>,
}

impl FrameCache {
    pub fn new(paths: DatasetPaths, cache_dir: &Path) -> Self {
        Self {
            loader: DatasetLoader::new(paths, cache_dir),
            lazyframe_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the LazyFrame for a dataset, loading it on first access.
    pub fn get(&self, kind: DatasetKind) -> Result<LazyFrame, DatasetError> {
        // Fast path: already loaded.
        {
            let cache = self
                .lazyframe_cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.get(&kind) {
                return Ok(cached.clone());
            }
        } // Lock released before the load.

        let loaded_frame = self.loader.get_frame(kind)?;

        let mut cache = self
            .lazyframe_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match cache.entry(kind) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert(loaded_frame.clone());
                Ok(loaded_frame)
            }
        }
    }
}
