//! HTTP API
//!
//! One module per resource, each exposing a `router()`. All mutations go
//! through the shipment manager; handlers only translate between HTTP and
//! the domain types.

pub mod health;
pub mod lockers;
pub mod orders;

use axum::Router;

use crate::core::ServerState;

/// Combined API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(orders::router())
        .merge(lockers::router())
        .merge(health::router())
}
