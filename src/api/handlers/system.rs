//! System endpoints: health check.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app_state::AppState;

/// `GET /health` — Process liveness probe.
///
/// Always answers, independent of store health: orchestration uses
/// this to tell "process up" apart from "store up". Never touches the
/// store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns a fixed acknowledgment while the process is alive, regardless of store availability.",
    responses(
        (status = 200, description = "Process is alive", body = String),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
