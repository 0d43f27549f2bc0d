//! Note handlers: list history, create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::app_state::AppState;
use crate::error::ServiceError;
use crate::store::models::Note;

/// `GET /notes` — Full note history, newest first, as plain text.
///
/// # Errors
///
/// Returns [`ServiceError::Store`] on database failure, surfaced as a
/// 500 with a fixed body.
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    summary = "List all notes",
    description = "Returns every stored note, newest first, one `[timestamp] text` paragraph per note, separated by blank lines.",
    responses(
        (status = 200, description = "Combined note history", body = String),
        (status = 500, description = "Store failure", body = String),
    )
)]
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let notes = state.store.list_notes().await?;
    Ok((StatusCode::OK, render_notes(&notes)))
}

/// `POST /notes` — Store a new note.
///
/// Reads the `note` field from the JSON body and trims it. A missing
/// field, a non-string value, and an empty-after-trim string are all
/// rejected the same way, without touching the store.
///
/// # Errors
///
/// Returns [`ServiceError::EmptyNote`] on rejected input and
/// [`ServiceError::Store`] on database failure.
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    summary = "Create a note",
    description = "Stores the trimmed `note` field of the JSON body. Empty or missing notes are rejected.",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Note stored", body = String),
        (status = 400, description = "Empty note", body = String),
        (status = 500, description = "Store failure", body = String),
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ServiceError> {
    let note = body
        .get("note")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim();
    if note.is_empty() {
        return Err(ServiceError::EmptyNote);
    }

    state.store.create_note(note).await?;
    Ok((StatusCode::CREATED, "ok"))
}

/// Renders notes as one `[timestamp] text` paragraph each, separated
/// by blank lines. An empty slice renders as an empty body.
fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| format!("[{}] {}", n.created_at.format("%Y-%m-%d %H:%M:%S"), n.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Note routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/notes", get(list_notes).post(create_note))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use chrono::{TimeZone, Utc};
    use tower::ServiceExt;

    use super::*;
    use crate::api;
    use crate::store::NoteStore;

    /// In-memory store mirroring the repository's contract: ids
    /// ascend with insertion, listing returns newest first.
    #[derive(Debug, Default)]
    struct MemoryStore {
        notes: Mutex<Vec<Note>>,
    }

    #[async_trait]
    impl NoteStore for MemoryStore {
        async fn create_note(&self, text: &str) -> Result<(), ServiceError> {
            let mut notes = self.notes.lock().unwrap();
            let id = notes.len() as i64 + 1;
            notes.push(Note {
                id,
                text: text.to_string(),
                created_at: Utc::now(),
            });
            Ok(())
        }

        async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
            let notes = self.notes.lock().unwrap();
            Ok(notes.iter().rev().cloned().collect())
        }
    }

    /// Store that fails every operation, simulating a store outage.
    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl NoteStore for FailingStore {
        async fn create_note(&self, _text: &str) -> Result<(), ServiceError> {
            Err(ServiceError::Store("connection refused".to_string()))
        }

        async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
            Err(ServiceError::Store("connection refused".to_string()))
        }
    }

    fn app(store: Arc<dyn NoteStore>) -> Router {
        api::build_router().with_state(AppState { store })
    }

    fn post_note(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/notes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    fn get_notes() -> Request<Body> {
        Request::builder().uri("/notes").body(Body::empty()).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn created_note_acknowledged_and_listed_first() {
        let store = Arc::new(MemoryStore::default());
        let app = app(Arc::clone(&store) as Arc<dyn NoteStore>);

        let response = app
            .clone()
            .oneshot(post_note(r#"{"note":"first"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_text(response).await, "ok");

        let response = app
            .clone()
            .oneshot(post_note(r#"{"note":"second"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get_notes()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("second"));
        assert!(body.find("second").unwrap() < body.find("first").unwrap());
    }

    #[tokio::test]
    async fn listing_is_strictly_newest_first() {
        let store = Arc::new(MemoryStore::default());
        let app = app(Arc::clone(&store) as Arc<dyn NoteStore>);

        for text in ["alpha", "bravo", "charlie"] {
            let body = format!(r#"{{"note":"{text}"}}"#);
            let response = app.clone().oneshot(post_note(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_notes()).await.unwrap();
        let body = body_text(response).await;
        let charlie = body.find("charlie").unwrap();
        let bravo = body.find("bravo").unwrap();
        let alpha = body.find("alpha").unwrap();
        assert!(charlie < bravo);
        assert!(bravo < alpha);
    }

    #[tokio::test]
    async fn note_is_trimmed_before_storage() {
        let store = Arc::new(MemoryStore::default());
        let app = app(Arc::clone(&store) as Arc<dyn NoteStore>);

        let response = app
            .oneshot(post_note(r#"{"note":"  padded  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let notes = store.notes.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.first().unwrap().text, "padded");
    }

    #[tokio::test]
    async fn whitespace_only_note_rejected_without_touching_store() {
        let store = Arc::new(MemoryStore::default());
        let app = app(Arc::clone(&store) as Arc<dyn NoteStore>);

        let response = app.oneshot(post_note(r#"{"note":"   "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "note required");
        assert_eq!(store.notes.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_note_field_rejected() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store as Arc<dyn NoteStore>);

        let response = app.oneshot(post_note("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "note required");
    }

    #[tokio::test]
    async fn non_string_note_field_rejected() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store as Arc<dyn NoteStore>);

        let response = app.oneshot(post_note(r#"{"note":42}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_history_renders_empty_body() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store as Arc<dyn NoteStore>);

        let response = app.oneshot(get_notes()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn store_failure_maps_to_fixed_db_error() {
        let app = app(Arc::new(FailingStore) as Arc<dyn NoteStore>);

        let response = app.clone().oneshot(get_notes()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "DB error");

        let response = app.oneshot(post_note(r#"{"note":"hi"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "DB error");
    }

    #[test]
    fn render_formats_bracketed_timestamp_paragraphs() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let notes = vec![
            Note {
                id: 2,
                text: "newer".to_string(),
                created_at: ts,
            },
            Note {
                id: 1,
                text: "older".to_string(),
                created_at: ts,
            },
        ];

        assert_eq!(
            render_notes(&notes),
            "[2024-05-01 12:30:00] newer\n\n[2024-05-01 12:30:00] older"
        );
        assert_eq!(render_notes(&[]), "");
    }
}
