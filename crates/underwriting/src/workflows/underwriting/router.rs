use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{RepositoryError, SessionRepository};
use super::service::{SessionServiceError, UnderwritingService};
use super::session::SessionId;

/// Body of a slot submission. `value` may be omitted when extraction found nothing.
#[derive(Debug, Deserialize)]
pub struct SlotSubmission {
    pub field: String,
    #[serde(default)]
    pub value: Option<SlotInput>,
}

/// Raw slot value as sent by a client: free text or a bare JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SlotInput {
    Text(String),
    Number(f64),
}

impl SlotInput {
    /// Text handed to the field validators.
    pub fn into_raw(self) -> String {
        match self {
            SlotInput::Text(text) => text,
            SlotInput::Number(number) => number.to_string(),
        }
    }
}

/// Router builder exposing session, slot, summary, and reset endpoints.
pub fn underwriting_router<R>(service: Arc<UnderwritingService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/underwriting/sessions", post(open_handler::<R>))
        .route(
            "/api/v1/underwriting/sessions/:session_id",
            get(session_handler::<R>),
        )
        .route(
            "/api/v1/underwriting/sessions/:session_id/slots",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/underwriting/sessions/:session_id/summary",
            get(summary_handler::<R>),
        )
        .route(
            "/api/v1/underwriting/sessions/:session_id/reset",
            post(reset_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn open_handler<R>(State(service): State<Arc<UnderwritingService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.open() {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.session(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(submission): axum::Json<SlotSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let raw = submission.value.map(SlotInput::into_raw);
    match service.submit(&id, &submission.field, raw.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.summary(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<UnderwritingService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(restarted) => (StatusCode::OK, axum::Json(restarted)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionServiceError) -> Response {
    let status = match &error {
        SessionServiceError::UnknownField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
