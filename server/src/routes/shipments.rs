//! Shipment resource routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use shiptrack_engine::Shipment;

use crate::error::{MessageBody, Result};
use crate::handlers::{
    create_shipment, delete_shipment, get_shipment, list_shipments, update_shipment,
};
use crate::AppState;

/// Create shipment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shipments", get(list_handler).post(create_handler))
        .route(
            "/shipments/{tracking_number}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

/// GET /api/shipments - List all shipments, newest first.
async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Shipment>>> {
    let shipments = list_shipments(state.store.as_ref()).await?;
    Ok(Json(shipments))
}

/// POST /api/shipments - Create a shipment.
async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Shipment>)> {
    let Json(body) = body?;
    let shipment = create_shipment(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

/// GET /api/shipments/{tracking_number} - Fetch one shipment.
async fn get_handler(
    State(state): State<AppState>,
    tracking_number: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Shipment>> {
    let Path(tracking_number) = tracking_number?;
    let shipment = get_shipment(state.store.as_ref(), &tracking_number).await?;
    Ok(Json(shipment))
}

/// PUT /api/shipments/{tracking_number} - Update fields of a shipment.
async fn update_handler(
    State(state): State<AppState>,
    tracking_number: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Shipment>> {
    let Path(tracking_number) = tracking_number?;
    let Json(body) = body?;
    let shipment = update_shipment(state.store.as_ref(), &tracking_number, &body).await?;
    Ok(Json(shipment))
}

/// DELETE /api/shipments/{tracking_number} - Remove a shipment.
async fn delete_handler(
    State(state): State<AppState>,
    tracking_number: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<MessageBody>> {
    let Path(tracking_number) = tracking_number?;
    delete_shipment(state.store.as_ref(), &tracking_number).await?;
    Ok(Json(MessageBody::new("Shipment deleted successfully")))
}
