//! HTTP adapters - REST API implementations.

pub mod skill;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::SkillDispatcher;

pub use skill::{skill_routes, SkillAppState};

/// Builds the service router with request tracing and a per-request timeout.
pub fn skill_router(dispatcher: Arc<SkillDispatcher>, request_timeout: Duration) -> Router {
    skill_routes()
        .with_state(SkillAppState::new(dispatcher))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
