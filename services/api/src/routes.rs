use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use underwriting::error::AppError;
use underwriting::workflows::underwriting::{
    parse_transcript, replay, underwriting_router, SessionId, SessionRepository, SummaryView,
    UnderwritingConfig, UnderwritingService, UnderwritingSession,
};

#[derive(Debug, Deserialize)]
pub(crate) struct ReplayRequest {
    /// `field,value` CSV body; `summary` and `reset` rows are allowed.
    pub(crate) transcript: String,
    #[serde(default)]
    pub(crate) bank_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplayResponse {
    pub(crate) session_id: SessionId,
    pub(crate) turns: usize,
    pub(crate) messages: Vec<String>,
    pub(crate) summary: SummaryView,
}

pub(crate) fn with_underwriting_routes<R>(service: Arc<UnderwritingService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    underwriting_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/underwriting/replay",
            axum::routing::post(replay_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Replays a scripted dialogue against a throwaway session. The request's `bank_rate`
/// overrides the one the service was started with.
pub(crate) async fn replay_endpoint(
    Extension(defaults): Extension<UnderwritingConfig>,
    Json(payload): Json<ReplayRequest>,
) -> Result<Json<ReplayResponse>, AppError> {
    let ReplayRequest {
        transcript,
        bank_rate,
    } = payload;

    let config = match bank_rate {
        Some(bank_rate) => UnderwritingConfig { bank_rate },
        None => defaults,
    };

    let steps = parse_transcript(Cursor::new(transcript.into_bytes()))?;
    let mut session = UnderwritingSession::open(config);
    let messages = replay(&mut session, &steps);

    Ok(Json(ReplayResponse {
        session_id: session.id().clone(),
        turns: steps.len(),
        messages,
        summary: session.summary().view(),
    }))
}
