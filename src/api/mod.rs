//! API Module
//!
//! HTTP handlers and routing for the breed query REST API.
//!
//! # Endpoints
//! - `GET /dogs` - List breeds with filters, sort and limit
//! - `GET /groupings` - Aggregate breeds per group
//! - `GET /filters` - Distinct values for each filter
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
