//! Skill-specific error types.

use thiserror::Error;

/// Failures raised while handling a request.
///
/// None of these reach the user verbatim; the error handler turns every one
/// into the generic apology.
#[derive(Debug, Error)]
pub enum SkillError {
    /// No registered handler accepts the request.
    #[error("No handler for {request_type} (intent: {intent})")]
    NoHandler { request_type: String, intent: String },

    /// Session attributes could not be decoded or encoded.
    #[error("Invalid session attribute '{key}': {source}")]
    InvalidSessionState {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SkillError {
    pub fn no_handler(request_type: impl Into<String>, intent: Option<&str>) -> Self {
        SkillError::NoHandler {
            request_type: request_type.into(),
            intent: intent.unwrap_or("-").to_string(),
        }
    }

    pub fn invalid_session_state(key: impl Into<String>, source: serde_json::Error) -> Self {
        SkillError::InvalidSessionState {
            key: key.into(),
            source,
        }
    }

    /// Whether the request was simply not routable, as opposed to a handler failure.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, SkillError::NoHandler { .. })
    }
}
