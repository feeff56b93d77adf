//! HTTP routes for the skill endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Creates the skill router with all endpoints.
pub fn skill_routes() -> Router<SkillAppState> {
    Router::new()
        .route("/alexa", post(handle_skill_request))
        .route("/health", get(health))
}
