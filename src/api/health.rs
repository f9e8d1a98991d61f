//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::AppError, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint (checks database connectivity)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    state
        .services
        .repository()
        .ping()
        .await
        .map_err(|e| AppError::Unavailable(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
