//! PlayMusicHandler - Plays the top search result for a free-text query.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents::{self, slots};
use crate::domain::skill::{Message, ResponseBuilder, SkillError, SkillResponse};
use crate::ports::MusicCatalog;

use super::play_top_result;

/// Handler for `PlayMusicIntent`.
pub struct PlayMusicHandler {
    catalog: Arc<dyn MusicCatalog>,
}

impl PlayMusicHandler {
    pub fn new(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl IntentHandler for PlayMusicHandler {
    fn name(&self) -> &'static str {
        "PlayMusicHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::PLAY_MUSIC)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let language = input.language();

        let Some(query) = input.slot(slots::QUERY) else {
            return Ok(ResponseBuilder::new()
                .ask(Message::AskForMusic.render(language))
                .build());
        };

        let results = self.catalog.search(query).await;

        Ok(play_top_result(
            results,
            language,
            Message::NoMusicFound { query },
        ))
    }
}
