//! SearchMusicHandler - Plays the top result for an artist and/or song name.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents::{self, slots};
use crate::domain::skill::{Message, SkillError, SkillResponse};
use crate::ports::MusicCatalog;

use super::play_top_result;

/// Handler for `SearchMusicIntent`.
pub struct SearchMusicHandler {
    catalog: Arc<dyn MusicCatalog>,
}

impl SearchMusicHandler {
    pub fn new(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self { catalog }
    }

    /// Joins the filled slots with a space. Both empty gives an empty query,
    /// which is sent to the catalog as-is.
    fn build_query(artist: Option<&str>, song: Option<&str>) -> String {
        [artist, song]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

#[async_trait]
impl IntentHandler for SearchMusicHandler {
    fn name(&self) -> &'static str {
        "SearchMusicHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::SEARCH_MUSIC)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let query = Self::build_query(input.slot(slots::ARTIST), input.slot(slots::SONG));

        let results = self.catalog.search(&query).await;

        Ok(play_top_result(
            results,
            input.language(),
            Message::NoSearchResults,
        ))
    }
}
