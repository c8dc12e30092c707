//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Directory lookups
        .route("/api/universities", get(handlers::search_universities))
        .route("/api/countries", get(handlers::list_countries))
        .with_state(state)
}
