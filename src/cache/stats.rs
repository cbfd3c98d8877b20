//! Cache Statistics Module
//!
//! Tracks page cache hits, misses, and file rewrites.

use std::fmt;

use serde::Serialize;

// == Cache Stats ==
/// Tracks page cache performance metrics.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that required a network fetch
    pub misses: u64,
    /// Number of full cache file rewrites
    pub writes: u64,
    /// Current number of cached pages
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cache lookups, answered or not.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Returns hits / lookups, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages, {} hits / {} misses ({:.0}% hit rate), {} writes",
            self.total_entries,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.writes
        )
    }
}
