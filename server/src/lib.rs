//! Shiptrack Server - REST API for shipment tracking records.
//!
//! Exposes create, read, update and delete operations on shipment records
//! under `/api/shipments`, plus health endpoints. Storage is pluggable
//! through [`store::ShipmentStore`]; the binary picks PostgreSQL or an
//! in-memory backend from configuration.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;

use crate::config::Config;
use crate::store::ShipmentStore;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShipmentStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn ShipmentStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Build the application router with middleware attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
