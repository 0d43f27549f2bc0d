//! Database models for stored notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note row from the `notes` table.
///
/// Rows are immutable once written: no operation in this service
/// updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Auto-increment row ID, assigned by the store.
    pub id: i64,
    /// Note body, stored verbatim after trimming.
    pub text: String,
    /// Server-side insertion timestamp.
    pub created_at: DateTime<Utc>,
}
