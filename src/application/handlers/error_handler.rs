//! ErrorHandler - Catch-all answer when no handler matched or one failed.

use crate::domain::skill::{Message, ResponseBuilder, SkillError, SkillRequest, SkillResponse};

/// Converts any dispatch failure into the localized apology.
///
/// The turn stays open (reprompt set) and no error detail reaches the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub const NAME: &'static str = "ErrorHandler";

    pub fn handle(&self, request: &SkillRequest, error: &SkillError) -> SkillResponse {
        if error.is_unmatched() {
            tracing::warn!(error = %error, "Request not handled");
        } else {
            tracing::error!(error = %error, "Handler failed");
        }

        ResponseBuilder::new()
            .ask(Message::GenericError.render(request.language()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrupt_index() -> SkillError {
        let source = serde_json::from_str::<usize>("\"first\"").unwrap_err();
        SkillError::invalid_session_state("currentIndex", source)
    }

    #[test]
    fn apology_keeps_turn_open() {
        let request = SkillRequest::intent("Unknown", "en-US");
        let response = ErrorHandler.handle(&request, &corrupt_index());

        assert_eq!(
            response.speech.as_deref(),
            Some("Sorry, I had trouble doing what you asked. Please try again.")
        );
        assert_eq!(response.reprompt, response.speech);
        assert!(response.directive.is_none());
    }

    #[test]
    fn apology_is_localized() {
        let request = SkillRequest::launch("es-US");
        let response =
            ErrorHandler.handle(&request, &SkillError::no_handler("LaunchRequest", None));

        assert_eq!(
            response.speech.as_deref(),
            Some("Lo siento, hubo un problema. Por favor intenta de nuevo.")
        );
    }

    #[test]
    fn error_detail_is_not_spoken() {
        let request = SkillRequest::launch("en-US");
        let response = ErrorHandler.handle(&request, &corrupt_index());
        assert!(!response.speech.unwrap().contains("currentIndex"));
    }
}
