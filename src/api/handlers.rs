//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::downstream::ServiceBClient;
use crate::error::ServiceError;
use crate::metrics;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the downstream service-b endpoint.
    pub service_b: Arc<ServiceBClient>,
}

impl AppState {
    /// Create new app state around a downstream client.
    pub fn new(service_b: Arc<ServiceBClient>) -> Self {
        Self { service_b }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Passthrough handler - relays service-b's hello body verbatim.
///
/// Reads nothing from the inbound request; the outbound call is always the
/// same fixed GET. On success the downstream body becomes the response body
/// as plain text. Any downstream fault maps to 502 via [`ServiceError`].
pub async fn call_service_b(State(state): State<AppState>) -> Result<String, ServiceError> {
    metrics::increment_passthrough_requests();

    let body = state.service_b.hello().await?;
    Ok(body)
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus metrics exposition handler.
pub async fn prometheus_metrics() -> String {
    metrics::render_metrics()
}
