//! Typed view over the session attributes the skill writes.
//!
//! Play-Playlist stores the playlist it started so a later turn could move
//! through it. No handler reads this back yet: next/previous navigation is
//! not implemented.

use serde::{Deserialize, Serialize};

use super::errors::SkillError;
use super::request::SessionAttributes;
use crate::domain::catalog::SongRecord;

const CURRENT_PLAYLIST_KEY: &str = "currentPlaylist";
const CURRENT_INDEX_KEY: &str = "currentIndex";

/// Playlist position stashed in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_playlist: Vec<SongRecord>,
    pub current_index: usize,
}

impl SessionState {
    /// State for a freshly started playlist, positioned at its first song.
    pub fn starting(playlist: Vec<SongRecord>) -> Self {
        Self {
            current_playlist: playlist,
            current_index: 0,
        }
    }

    /// Reads the state from session attributes. Missing keys fall back to defaults.
    pub fn from_attributes(attributes: &SessionAttributes) -> Result<Self, SkillError> {
        let current_playlist = match attributes.get(CURRENT_PLAYLIST_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| SkillError::invalid_session_state(CURRENT_PLAYLIST_KEY, e))?,
            None => Vec::new(),
        };
        let current_index = match attributes.get(CURRENT_INDEX_KEY) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| SkillError::invalid_session_state(CURRENT_INDEX_KEY, e))?,
            None => 0,
        };

        Ok(Self {
            current_playlist,
            current_index,
        })
    }

    /// Writes the state into `attributes`, leaving unrelated keys alone.
    pub fn write_to(&self, attributes: &mut SessionAttributes) -> Result<(), SkillError> {
        let playlist = serde_json::to_value(&self.current_playlist)
            .map_err(|e| SkillError::invalid_session_state(CURRENT_PLAYLIST_KEY, e))?;
        attributes.insert(CURRENT_PLAYLIST_KEY.to_string(), playlist);
        attributes.insert(
            CURRENT_INDEX_KEY.to_string(),
            serde_json::Value::from(self.current_index),
        );
        Ok(())
    }
}
