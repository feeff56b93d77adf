//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the skill to external systems:
//! - `catalog` - Music catalog clients (HTTP, mock)
//! - `http` - The voice platform endpoint (axum)

pub mod catalog;
pub mod http;

pub use catalog::{HttpMusicCatalog, MockMusicCatalog};
pub use http::skill_router;
