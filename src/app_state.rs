//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::store::NoteStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The store is created once by the process root and passed down;
/// handlers never reach into global state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Note data access, pool-backed in production.
    pub store: Arc<dyn NoteStore>,
}
