//! HTTP adapter for the skill endpoint.
//!
//! Exposes the dispatcher to the voice platform:
//! - `POST /alexa` - Handle one request envelope
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::SkillAppState;
pub use routes::skill_routes;
