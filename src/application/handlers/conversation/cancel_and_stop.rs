//! CancelAndStopHandler - Says goodbye and stops playback.

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents;
use crate::domain::skill::{Message, ResponseBuilder, SkillError, SkillResponse};

/// Handler for `AMAZON.CancelIntent` and `AMAZON.StopIntent`.
pub struct CancelAndStopHandler;

#[async_trait]
impl IntentHandler for CancelAndStopHandler {
    fn name(&self) -> &'static str {
        "CancelAndStopHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::CANCEL), Route::Intent(intents::STOP)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(ResponseBuilder::new()
            .speak(Message::Goodbye.render(input.language()))
            .stop()
            .build())
    }
}
