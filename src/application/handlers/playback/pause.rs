//! PauseHandler - Stops playback silently.

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents;
use crate::domain::skill::{ResponseBuilder, SkillError, SkillResponse};

/// Handler for `AMAZON.PauseIntent`.
pub struct PauseHandler;

#[async_trait]
impl IntentHandler for PauseHandler {
    fn name(&self) -> &'static str {
        "PauseHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::PAUSE)]
    }

    async fn handle(&self, _input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(ResponseBuilder::new().stop().build())
    }
}
