//! Note data access behind the [`NoteStore`] trait.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::Note;
use crate::error::ServiceError;

/// Data access seam for notes.
///
/// The HTTP layer only sees this trait; the process root passes in the
/// pool-backed [`NoteRepository`], tests substitute an in-memory
/// implementation.
#[async_trait]
pub trait NoteStore: Send + Sync + fmt::Debug {
    /// Inserts a new note. `text` is pre-trimmed and non-empty; the
    /// store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] on database failure.
    async fn create_note(&self, text: &str) -> Result<(), ServiceError>;

    /// Returns all notes, newest first (strictly descending `id`).
    /// Re-executed fully on each call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] on database failure.
    async fn list_notes(&self) -> Result<Vec<Note>, ServiceError>;
}

/// PostgreSQL-backed note repository using `sqlx::PgPool`.
///
/// Connections are checked out per statement and returned to the pool;
/// none is held across requests. Store failures are collapsed into a
/// single generic variant — retries only happen at startup, never here.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Creates a new repository over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn create_note(&self, text: &str) -> Result<(), ServiceError> {
        sqlx::query("INSERT INTO notes (text) VALUES ($1)")
            .bind(text)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
        let rows = sqlx::query_as::<_, (i64, String, DateTime<Utc>)>(
            "SELECT id, text, created_at FROM notes ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, text, created_at)| Note {
                id,
                text,
                created_at,
            })
            .collect())
    }
}
