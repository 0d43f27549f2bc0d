//! REST API layer: route handlers and router composition.
//!
//! All endpoints are mounted at the root: `/notes`, `/health`.

pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering the full HTTP surface.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::notes::list_notes,
        handlers::notes::create_note,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Notes", description = "Submit and list text notes"),
        (name = "System", description = "Process liveness"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
