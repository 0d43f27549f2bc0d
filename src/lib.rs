//! # note-service
//!
//! Minimal note-taking HTTP service backed by PostgreSQL.
//!
//! Clients submit short text notes and retrieve the full note history
//! newest-first as a plain-text document. The service owns nothing
//! beyond accepting a note, persisting it, and rendering what is
//! stored — no auth, no editing, no pagination.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── NoteStore trait (store/repository.rs)
//!     │       └── NoteRepository over sqlx::PgPool
//!     │
//!     └── Store Connector (store/connector.rs)
//!             startup-only: retry probe, pool setup, schema
//! ```
//!
//! At startup the store connector blocks until PostgreSQL answers a
//! liveness probe (bounded fixed-delay retries), ensures the `notes`
//! table exists, and hands a connection pool to the repository. Only
//! then does the HTTP listener bind.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod store;
