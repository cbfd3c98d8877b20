//! API Handlers
//!
//! HTTP request handlers for each query endpoint.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::db::{Database, FilterOptions};
use crate::error::{DogError, Result};
use crate::models::{BarChart, DogsQuery, DogsResponse, GroupingsQuery, GroupingsResponse, HealthResponse};

/// Application state shared across all handlers.
///
/// Holds only the database handle; every query opens its own connection.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Database::new(config.database_path.clone()))
    }
}

/// Runs blocking SQLite work off the async runtime.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| DogError::Internal(format!("query task failed: {}", e)))?
}

/// Handler for GET /dogs
///
/// Lists breeds with optional country/size/group/bark filters.
pub async fn dogs_handler(
    State(state): State<AppState>,
    Query(query): Query<DogsQuery>,
) -> Result<Json<DogsResponse>> {
    let filter = query.to_filter()?;
    let sort = filter.sort;

    let db = state.db.clone();
    let rows = run_blocking(move || db.list_dogs(&filter)).await?;

    let chart = query.wants_plot().then(|| BarChart::for_dogs(&rows, sort));
    Ok(Json(DogsResponse::new(rows, chart)))
}

/// Handler for GET /groupings
///
/// Aggregates breeds by group, origin, size or bark level.
pub async fn groupings_handler(
    State(state): State<AppState>,
    Query(query): Query<GroupingsQuery>,
) -> Result<Json<GroupingsResponse>> {
    let grouping = query.to_grouping()?;

    let db = state.db.clone();
    let rows = run_blocking(move || db.group_dogs(&grouping)).await?;

    let chart = query
        .wants_plot()
        .then(|| BarChart::for_groups(&rows, grouping.sort));
    Ok(Json(GroupingsResponse::new(grouping.group_by, rows, chart)))
}

/// Handler for GET /filters
///
/// Returns the distinct values each listing filter accepts.
pub async fn filters_handler(State(state): State<AppState>) -> Result<Json<FilterOptions>> {
    let db = state.db.clone();
    let options = run_blocking(move || db.filter_options()).await?;
    Ok(Json(options))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
