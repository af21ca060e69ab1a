//! Health API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::shipments::StoreStats;
use crate::utils::AppResult;

/// Health response with store statistics
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub store: StoreStats,
}

/// Liveness + store statistics
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let stats = state
        .manager
        .store()
        .get_stats()
        .map_err(crate::shipments::ShipmentError::Storage)?;
    Ok(Json(HealthResponse {
        status: "ok",
        environment: state.config.environment.clone(),
        store: stats,
    }))
}
