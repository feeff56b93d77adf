//! Launch, help and fallback: fixed prompts that keep the turn open.

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents;
use crate::domain::skill::{Message, ResponseBuilder, SkillError, SkillResponse};

fn prompt(input: &HandlerInput, message: Message<'_>) -> SkillResponse {
    ResponseBuilder::new()
        .ask(message.render(input.language()))
        .build()
}

/// Handler for `LaunchRequest`.
pub struct LaunchHandler;

#[async_trait]
impl IntentHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "LaunchHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Launch]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(prompt(input, Message::Welcome))
    }
}

/// Handler for `AMAZON.HelpIntent`.
pub struct HelpHandler;

#[async_trait]
impl IntentHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "HelpHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::HELP)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(prompt(input, Message::Help))
    }
}

/// Handler for `AMAZON.FallbackIntent`.
pub struct FallbackHandler;

#[async_trait]
impl IntentHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "FallbackHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::FALLBACK)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(prompt(input, Message::Fallback))
    }
}
