//! PlayPlaylistHandler - Finds a library playlist by name and plays its first song.
//!
//! Two sequential catalog calls: the playlist library, then the songs of the
//! first playlist whose title contains the spoken name (case-insensitive).
//! The full song list is stored in the session at index 0.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::dispatcher::{HandlerInput, IntentHandler, Route};
use crate::application::handlers::intents::{self, slots};
use crate::domain::skill::{
    AudioDirective, Message, ResponseBuilder, SessionState, SkillError, SkillResponse,
    PLAYLIST_SUGGESTION_LIMIT,
};
use crate::ports::MusicCatalog;

/// Handler for `PlayPlaylistIntent`.
pub struct PlayPlaylistHandler {
    catalog: Arc<dyn MusicCatalog>,
}

impl PlayPlaylistHandler {
    pub fn new(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl IntentHandler for PlayPlaylistHandler {
    fn name(&self) -> &'static str {
        "PlayPlaylistHandler"
    }

    fn routes(&self) -> &'static [Route] {
        &[Route::Intent(intents::PLAY_PLAYLIST)]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let language = input.language();

        let Some(name) = input.slot(slots::PLAYLIST_NAME).map(str::to_string) else {
            return Ok(ResponseBuilder::new()
                .ask(Message::AskForPlaylist.render(language))
                .build());
        };

        // 1. Load the library
        let playlists = self.catalog.list_playlists().await.unwrap_or_default();
        if playlists.is_empty() {
            return Ok(ResponseBuilder::new()
                .speak(Message::NoPlaylists.render(language))
                .build());
        }

        // 2. First title containing the name
        let Some(playlist) = playlists.iter().find(|p| p.title_contains(&name)) else {
            let suggestions: Vec<String> = playlists
                .iter()
                .take(PLAYLIST_SUGGESTION_LIMIT)
                .map(|p| p.title.clone())
                .collect();
            let speech = Message::PlaylistNotFound {
                name: &name,
                suggestions: &suggestions,
            }
            .render(language);
            return Ok(ResponseBuilder::new().speak(speech).build());
        };

        // 3. Load its songs
        let songs = self
            .catalog
            .get_playlist(&playlist.playlist_id)
            .await
            .map(|detail| detail.songs)
            .unwrap_or_default();

        let Some(first) = songs.first().cloned() else {
            return Ok(ResponseBuilder::new()
                .speak(Message::PlaylistEmpty { title: &playlist.title }.render(language))
                .build());
        };

        tracing::debug!(
            playlist_id = %playlist.playlist_id,
            songs = songs.len(),
            "Starting playlist"
        );

        // 4. Remember the playlist for later turns, then play the first song
        input.save_session_state(&SessionState::starting(songs))?;

        let speech = Message::NowPlayingPlaylist {
            playlist: &playlist.title,
            title: &first.title,
            artist: &first.artist,
        }
        .render(language);

        Ok(ResponseBuilder::new()
            .speak(speech)
            .play(AudioDirective::play_from_start(first.stream_url, first.video_id))
            .build())
    }
}
