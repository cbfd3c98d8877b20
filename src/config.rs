//! Configuration Module
//!
//! Handles loading scraper and server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::extract::ValueCellPick;

/// Breed directory scraped when `DIRECTORY_URL` is unset.
pub const DEFAULT_DIRECTORY_URL: &str =
    "http://www.animalplanet.com/breed-selector/dog-breeds/all-breeds-a-z.html";

/// Scraper and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Breed directory page that seeds the scrape
    pub directory_url: String,
    /// JSON file holding cached page bodies
    pub cache_file: PathBuf,
    /// SQLite database file
    pub database_path: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Which summary value cell becomes the breed's rank
    pub value_cell_pick: ValueCellPick,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DIRECTORY_URL` - Breed directory page (default: animalplanet A-Z listing)
    /// - `CACHE_FILE` - Page cache file (default: cache.json)
    /// - `DATABASE_PATH` - SQLite file (default: doginfo.sqlite)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    /// - `VALUE_CELL_PICK` - `first` or `last` (default: first)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            directory_url: env::var("DIRECTORY_URL").unwrap_or(defaults.directory_url),
            cache_file: env::var("CACHE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_file),
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
            value_cell_pick: env::var("VALUE_CELL_PICK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.value_cell_pick),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            cache_file: PathBuf::from("cache.json"),
            database_path: PathBuf::from("doginfo.sqlite"),
            server_port: 5000,
            request_timeout: 30,
            value_cell_pick: ValueCellPick::First,
        }
    }
}
