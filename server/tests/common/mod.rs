//! Shared helpers for server integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use shiptrack_server::config::Config;
use shiptrack_server::store::MemoryShipmentStore;
use shiptrack_server::{app, AppState};

/// Configuration for an in-memory server.
pub fn memory_config() -> Config {
    Config::from_vars(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "SERVER_NAME" => Some("Test Server".to_string()),
        _ => None,
    })
    .expect("memory config is valid")
}

/// Router over a fresh in-memory store.
pub fn memory_app() -> axum::Router {
    app(AppState::new(MemoryShipmentStore::new_shared(), memory_config()))
}

/// Create body for a shipment.
pub fn shipment_body(tracking_number: &str) -> Value {
    json!({
        "trackingNumber": tracking_number,
        "destination": "Paris",
        "status": "Pending",
        "estimatedDelivery": "2024-01-01",
    })
}
