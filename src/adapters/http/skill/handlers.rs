//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::SkillDispatcher;
use crate::domain::skill::SkillRequest;

use super::dto::{ErrorResponse, HealthResponse, RequestEnvelope, ResponseEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    dispatcher: Arc<SkillDispatcher>,
}

impl SkillAppState {
    pub fn new(dispatcher: Arc<SkillDispatcher>) -> Self {
        Self { dispatcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /alexa - Handle one skill request envelope
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Response {
    let envelope = match payload {
        Ok(Json(envelope)) => envelope,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected skill envelope");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let request = match SkillRequest::try_from(envelope) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected skill envelope");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response();
        }
    };

    let outcome = state.dispatcher.dispatch(request).await;
    (StatusCode::OK, Json(ResponseEnvelope::from(outcome))).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
