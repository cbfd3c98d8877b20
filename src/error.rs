//! Error types for the scraper and query server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Dog Error Enum ==
/// Unified error type for scraping, loading and querying.
#[derive(Error, Debug)]
pub enum DogError {
    /// Network or HTTP failure while fetching a page
    #[error("Fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Expected page structure is absent
    #[error("Parse error on {page}: missing {field}")]
    Parse { page: String, field: String },

    /// Per-breed extractor outputs no longer line up
    #[error("Data inconsistency: {0}")]
    DataInconsistency(String),

    /// Unrecognized filter, sort or grouping name
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Cache file could not be written
    #[error("Cache error: {0}")]
    Cache(String),

    /// SQLite failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DogError {
    /// Builds a parse error for a missing field.
    pub fn parse(page: impl Into<String>, field: impl Into<String>) -> Self {
        DogError::Parse {
            page: page.into(),
            field: field.into(),
        }
    }

    /// Rewrites the page of a parse error, leaving other variants untouched.
    pub fn in_page(self, page: &str) -> Self {
        match self {
            DogError::Parse { field, .. } => DogError::Parse {
                page: page.to_string(),
                field,
            },
            other => other,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for DogError {
    fn into_response(self) -> Response {
        let status = match &self {
            DogError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            DogError::Parse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DogError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            DogError::DataInconsistency(_)
            | DogError::Cache(_)
            | DogError::Database(_)
            | DogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, DogError>;
