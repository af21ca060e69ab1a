//! Locker API Module
//!
//! Read-only locker directory lookup used by the checkout flow.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Locker router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/lockers", get(handler::search))
}
