//! Response DTOs for the query API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::db::{DogRow, GroupBy, GroupRow};
use crate::models::BarChart;

/// Column headers of a breed listing, in row order.
pub const DOG_HEADERS: [&str; 8] = [
    "Dog Breed",
    "Rank",
    "Origin",
    "Breed Group",
    "Size",
    "Barkiness",
    "Min Life Span",
    "Max Life Span",
];

/// Response body for GET /dogs
#[derive(Debug, Clone, Serialize)]
pub struct DogsResponse {
    pub headers: Vec<String>,
    pub count: usize,
    pub results: Vec<DogRow>,
    /// Present when a plot was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<BarChart>,
}

impl DogsResponse {
    pub fn new(results: Vec<DogRow>, chart: Option<BarChart>) -> Self {
        Self {
            headers: DOG_HEADERS.iter().map(|h| h.to_string()).collect(),
            count: results.len(),
            results,
            chart,
        }
    }
}

/// Response body for GET /groupings
#[derive(Debug, Clone, Serialize)]
pub struct GroupingsResponse {
    pub headers: Vec<String>,
    pub results: Vec<GroupRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<BarChart>,
}

impl GroupingsResponse {
    pub fn new(group_by: GroupBy, results: Vec<GroupRow>, chart: Option<BarChart>) -> Self {
        let headers = [
            group_by.label(),
            "Number of Dogs",
            "AKC Rank",
            "Min Life Span",
            "Max Life Span",
        ];
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            results,
            chart,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
