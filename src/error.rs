//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type. Client-visible bodies
//! are short fixed text strings; store-level detail stays in the
//! variant for logging and never reaches the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Note body was missing, non-string, or empty after trimming.
    #[error("note required")]
    EmptyNote,

    /// Store-level failure (query error, lost connection).
    #[error("store error: {0}")]
    Store(String),

    /// Store never answered the startup liveness probe.
    #[error("store unreachable after {attempts} attempts")]
    Unavailable {
        /// Number of probe attempts made before giving up.
        attempts: u32,
    },
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyNote => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Unavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the fixed text body sent to the client for this variant.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::EmptyNote => "note required",
            Self::Store(_) | Self::Unavailable { .. } => "DB error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let Self::Store(detail) = &self {
            tracing::error!(error = %detail, "store failure");
        }
        (self.status_code(), self.client_message()).into_response()
    }
}
