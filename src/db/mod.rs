//! Database Module
//!
//! SQLite storage for scraped breeds: schema, full reloads and the
//! parameterized query surface used by the API and CLI.
//!
//! A connection is opened per logical operation and dropped when it ends.

mod dictionary;
mod loader;
mod queries;
mod schema;

#[cfg(test)]
mod fixtures;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::Result;

pub(crate) use dictionary::NameDictionary;
pub use loader::LoadSummary;
pub use queries::{
    DogFilter, DogRow, DogSort, FilterOptions, GroupBy, GroupRow, GroupSort, Grouping, SortOrder,
    DEFAULT_DOG_LIMIT, GROUP_LIMIT,
};

// == Database ==
/// Handle to the breed database file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}
