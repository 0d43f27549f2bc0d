//! Store layer: PostgreSQL connectivity and note data access.
//!
//! `connector` handles the startup-only concerns (liveness probing
//! with bounded retries, pool construction, schema creation); the
//! repository behind the [`NoteStore`](repository::NoteStore) trait
//! handles everything after.

pub mod connector;
pub mod models;
pub mod repository;

pub use repository::{NoteRepository, NoteStore};
