//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::{Order, ParcelSize};

use crate::core::ServerState;
use crate::shipments::{CheckoutRequest, ViewerRole};
use crate::utils::AppResult;

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Which party's view to produce; defaults to the buyer view
    pub viewer: Option<ViewerRole>,
}

/// List orders for a viewer
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let role = query.viewer.unwrap_or(ViewerRole::Buyer);
    let orders = state.manager.list_for_viewer(role)?;
    Ok(Json(orders))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.manager.get_order(&id)?;
    Ok(Json(order))
}

/// Complete a checkout and create the order
pub async fn checkout(
    State(state): State<ServerState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    let order = state.bridge.complete_checkout(request).await?;
    Ok(Json(order))
}

/// Register shipment request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub parcel_size: ParcelSize,
}

/// Register the parcel with the carrier (seller action)
pub async fn register_shipment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<Order>> {
    let order = state
        .manager
        .register_shipment(&id, request.parcel_size)
        .await?;
    Ok(Json(order))
}

/// Seller confirmed the parcel is in the locker
pub async fn mark_shipped(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.manager.mark_shipped(&id)?;
    Ok(Json(order))
}

/// Carrier arrival signal (manual/admin trigger)
pub async fn mark_ready_for_pickup(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.manager.mark_ready_for_pickup(&id)?;
    Ok(Json(order))
}

/// Parcel collected by the buyer
pub async fn confirm_delivery(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.manager.confirm_delivery(&id)?;
    Ok(Json(order))
}
