//! API Routes
//!
//! Configures the Axum router with all query endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{dogs_handler, filters_handler, groupings_handler, health_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /dogs` - List breeds with filters, sort and limit
/// - `GET /groupings` - Aggregate breeds per group
/// - `GET /filters` - Distinct values for each filter
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/dogs", get(dogs_handler))
        .route("/groupings", get(groupings_handler))
        .route("/filters", get(filters_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
