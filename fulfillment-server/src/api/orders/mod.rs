//! Order API Module
//!
//! Checkout creates orders; the remaining routes drive one order through
//! its lifecycle or read it back.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Checkout → new order (POST), buyer/seller order lists (GET)
        .route("/", post(handler::checkout).get(handler::list))
        // Order detail with full tracking history
        .route("/{id}", get(handler::get_by_id))
        // Seller: register parcel with the carrier
        .route("/{id}/register", post(handler::register_shipment))
        // Seller: confirm drop-off
        .route("/{id}/ship", post(handler::mark_shipped))
        // Admin: carrier arrival signal
        .route("/{id}/pickup-ready", post(handler::mark_ready_for_pickup))
        // Buyer/carrier: parcel collected
        .route("/{id}/deliver", post(handler::confirm_delivery))
}
