//! HTTP route definitions.

mod health;
mod shipments;

use crate::error::AppError;
use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Routes under `/api`. Unmatched paths get a JSON 404.
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(shipments::routes())
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound("API endpoint not found".to_string())
}
