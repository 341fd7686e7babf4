//! Health check endpoints.

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub server: String,
    pub version: String,
    pub timestamp: String,
}

/// Diagnostic response.
#[derive(Serialize)]
pub struct DiagnosticResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/test", get(diagnostic))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        server: state.config.server_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: iso_timestamp(Utc::now()),
    })
}

/// Diagnostic handler.
async fn diagnostic(State(state): State<AppState>) -> Json<DiagnosticResponse> {
    Json(DiagnosticResponse {
        message: format!("{} API is working!", state.config.server_name),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: iso_timestamp(Utc::now()),
    })
}

fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(iso_timestamp(now), "2024-01-01T12:30:00.000Z");
    }
}
