//! note-service server entry point.
//!
//! Blocks on store availability, ensures the schema, then starts the
//! Axum HTTP server. Startup store failures are fatal: the process
//! exits non-zero without binding a listening socket.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use note_service::api;
use note_service::app_state::AppState;
use note_service::config::ServiceConfig;
use note_service::store::NoteRepository;
use note_service::store::connector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting note-service");

    // Block until the store answers, then ensure the schema. Both are
    // fatal on failure: better no service than one without its table.
    if let Err(e) = connector::wait_for_store(&config).await {
        tracing::error!(error = %e, "store never became available, aborting");
        return Err(e.into());
    }
    let pool = connector::build_pool(&config).await?;
    connector::init_schema(&pool).await?;

    // Build application state
    let repository = NoteRepository::new(pool);
    let app_state = AppState {
        store: Arc::new(repository),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
