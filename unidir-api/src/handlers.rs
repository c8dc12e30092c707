//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use unidir_core::types::UniversityRecord;

use crate::dto::{ApiResponse, HealthResponse, UniversitiesQuery};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api/universities
pub async fn search_universities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UniversitiesQuery>,
) -> Result<Json<ApiResponse<Vec<UniversityRecord>>>> {
    let request_id = Uuid::new_v4().to_string();

    let country = query.country.as_deref().ok_or_else(|| {
        ApiError::bad_request("Country parameter is required").with_request_id(&request_id)
    })?;

    let lookup = state
        .directory
        .search_universities(country, query.name.as_deref())
        .await
        .map_err(|e| ApiError::from(e).with_request_id(&request_id))?;

    debug!(
        request_id = %request_id,
        country,
        count = lookup.data.len(),
        from_cache = lookup.from_cache,
        "served university search"
    );

    Ok(Json(ApiResponse::success(
        lookup.data,
        lookup.from_cache,
        request_id,
    )))
}

/// GET /api/countries
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let request_id = Uuid::new_v4().to_string();

    let lookup = state
        .directory
        .list_countries()
        .await
        .map_err(|e| ApiError::from(e).with_request_id(&request_id))?;

    debug!(
        request_id = %request_id,
        count = lookup.data.len(),
        from_cache = lookup.from_cache,
        "served country list"
    );

    Ok(Json(ApiResponse::success(
        lookup.data,
        lookup.from_cache,
        request_id,
    )))
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "success",
        message: "Server is running",
        timestamp: Utc::now().to_rfc3339(),
        request_id: Uuid::new_v4().to_string(),
    })
}
