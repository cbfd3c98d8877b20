//! Tasks Module
//!
//! Long-running jobs driven by the binary.
//!
//! # Tasks
//! - Scrape: walk the breed directory, normalize every breed page and load
//!   the result into the database

pub mod scrape;

pub use scrape::{run_scrape, scrape_and_load, BreedFailure, ScrapeReport};
