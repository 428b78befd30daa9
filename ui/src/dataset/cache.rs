//! Load-once dataset cache.
//!
//! Entries are keyed by [`CacheKey`] (canonical path plus modification time)
//! and are never evicted: a given key is parsed at most once per process.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use dioxus::logger::tracing::debug;
use once_cell::sync::Lazy;

use super::{Dataset, DatasetError};

/// Identity of one load: which file, as of which modification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
}

impl CacheKey {
    pub fn for_path(path: &Path) -> Result<Self, DatasetError> {
        let open_error = |err: std::io::Error| DatasetError::Open {
            path: path.to_path_buf(),
            source: Arc::new(err),
        };
        let canonical = path.canonicalize().map_err(open_error)?;
        let modified = fs::metadata(&canonical)
            .map_err(open_error)?
            .modified()
            .ok();
        Ok(Self {
            path: canonical,
            modified,
        })
    }
}

#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<CacheKey, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on first access.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, DatasetError> {
        let key = CacheKey::for_path(path)?;

        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            debug!(path = %key.path.display(), "dataset cache hit");
            return Ok(Arc::clone(hit));
        }

        let loaded = Arc::new(Dataset::load(&key.path)?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have raced us here; keep whichever landed first.
        let entry = entries.entry(key).or_insert(loaded);
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static SHARED: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Process-wide memoized load of `path`.
pub fn shared(path: &Path) -> Result<Arc<Dataset>, DatasetError> {
    SHARED.get_or_load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::SAMPLE;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;

    fn write_sample(dir: &Path) -> PathBuf {
        let path = dir.join("academia_boxe.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        path
    }

    #[test]
    fn second_load_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());
        let cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn modified_file_gets_its_own_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path());
        let cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();

        let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(b"Eva,40,300,Iniciante,1,0,0\n").unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(60))
            .unwrap();
        drop(file);

        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 5);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn missing_file_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::new();
        let err = cache.get_or_load(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(cache.is_empty());
    }
}
