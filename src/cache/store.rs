//! Cache Store Module
//!
//! URL-keyed page cache persisted as a single JSON object on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::cache::CacheStats;
use crate::error::{DogError, Result};

// == Cache Store ==
/// Raw response bodies keyed by request URL.
///
/// The whole mapping is rewritten to disk on every `put`; there is no
/// buffering. A store without a backing path never touches the filesystem.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Backing JSON file, if any
    path: Option<PathBuf>,
    /// URL -> body
    entries: HashMap<String, String>,
    /// Lookup and write counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructors ==
    /// Creates an empty store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the cache file at `path`.
    ///
    /// A missing or unreadable file yields an empty cache rather than an error,
    /// so the first run and a run after a corrupted write both start clean.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Cache file {} is corrupt, starting empty: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!("No cache loaded from {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        let mut stats = CacheStats::new();
        stats.set_total_entries(entries.len());

        Self {
            path: Some(path),
            entries,
            stats,
        }
    }

    // == Get ==
    /// Returns the cached body for `url`, recording a hit or miss.
    pub fn get(&mut self, url: &str) -> Option<&str> {
        if self.entries.contains_key(url) {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        self.entries.get(url).map(String::as_str)
    }

    // == Put ==
    /// Stores `body` under `url` and immediately persists the whole cache.
    pub fn put(&mut self, url: impl Into<String>, body: impl Into<String>) -> Result<()> {
        self.entries.insert(url.into(), body.into());
        self.stats.set_total_entries(self.entries.len());
        self.flush()
    }

    // == Flush ==
    /// Rewrites the backing file with the full mapping.
    ///
    /// The JSON is written to a sibling temp file first and renamed over the
    /// cache file.
    pub fn flush(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let contents = serde_json::to_string(&self.entries)
            .map_err(|e| DogError::Cache(format!("serialize failed: {}", e)))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| DogError::Cache(format!("write {} failed: {}", tmp.display(), e)))?;
        fs::rename(&tmp, path)
            .map_err(|e| DogError::Cache(format!("rename to {} failed: {}", path.display(), e)))?;

        self.stats.record_write();
        Ok(())
    }

    /// Returns true if `url` is cached, without touching the counters.
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
