//! SessionEndedHandler - Records the closing request and answers with nothing.

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::domain::skill::{RequestKind, ResponseBuilder, SkillError, SkillResponse};

/// Handler for `SessionEndedRequest`. The platform ignores any speech here.
pub struct SessionEndedHandler;

#[async_trait]
impl IntentHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "SessionEndedHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::SessionEnded]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let request = input.request();
        let session_id = request.session_id.as_deref().unwrap_or("-");

        match &request.kind {
            RequestKind::SessionEnded {
                reason,
                error: Some(error),
            } => tracing::warn!(
                session_id,
                reason = reason.as_deref().unwrap_or("-"),
                error_type = %error.error_type,
                error_message = %error.message,
                "Session ended with error"
            ),
            RequestKind::SessionEnded { reason, error: None } => tracing::info!(
                session_id,
                reason = reason.as_deref().unwrap_or("-"),
                "Session ended"
            ),
            _ => {}
        }

        match serde_json::to_string(request) {
            Ok(envelope) => tracing::debug!(session_id, envelope = %envelope, "Session ended request"),
            Err(e) => tracing::debug!(session_id, error = %e, "Session ended request"),
        }

        Ok(ResponseBuilder::new().build())
    }
}
