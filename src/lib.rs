//! Dog Info - Breed data scraper and query server
//!
//! Scrapes a breed directory and its detail pages, normalizes each breed's
//! facts, loads them into SQLite and serves filtered and grouped queries.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use db::Database;
pub use error::{DogError, Result};
pub use tasks::{run_scrape, scrape_and_load};
