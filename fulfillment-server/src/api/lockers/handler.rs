//! Locker API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::Locker;

use crate::core::ServerState;
use crate::utils::AppResult;

/// Query params for locker search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text filter over name, address and city
    #[serde(default)]
    pub q: String,
}

/// Search the locker directory
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Locker>>> {
    Ok(Json(state.lockers.search(&query.q)))
}
