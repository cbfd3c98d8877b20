//! Data Models Module
//!
//! Breed records produced by scraping, plus request/response DTOs for the API.

pub mod breed;
pub mod chart;
pub mod requests;
pub mod responses;

pub use breed::{BreedLink, BreedRecord, FactRecord, VitalStat};
pub use chart::BarChart;
pub use requests::{DogsQuery, GroupingsQuery};
pub use responses::{DogsResponse, GroupingsResponse, HealthResponse};
