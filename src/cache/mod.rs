//! Cache Module
//!
//! Provides a file-backed page cache keyed by request URL.

mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::CacheStore;
