//! ResumeHandler - Issues a play directive with no stream.
//!
//! The directive carries an empty URL and token at offset 0. Nothing about
//! the interrupted track is stored, so there is nothing to resume from; a
//! real resume needs the last token and offset persisted first.

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents;
use crate::domain::skill::{AudioDirective, ResponseBuilder, SkillError, SkillResponse};

/// Handler for `AMAZON.ResumeIntent`.
pub struct ResumeHandler;

#[async_trait]
impl IntentHandler for ResumeHandler {
    fn name(&self) -> &'static str {
        "ResumeHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::RESUME)]
    }

    async fn handle(&self, _input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(ResponseBuilder::new()
            .play(AudioDirective::play_from_start("", ""))
            .build())
    }
}
