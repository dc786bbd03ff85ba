use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Liveness handler; returns `{"ok": true}` whenever the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Creates a router with the `/healthz` endpoint.
///
/// `create_router` mounts it outside the `/api` prefix.
pub fn health_router() -> Router {
    Router::new().route("/healthz", get(health_handler))
}
