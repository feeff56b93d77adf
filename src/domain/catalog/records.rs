//! Records returned by the music catalog.

use serde::{Deserialize, Deserializer, Serialize};

/// A playable song as the catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    /// URL handed to the device in the play directive.
    pub stream_url: String,
    /// Catalog identifier, used as the directive's track token.
    pub video_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl SongRecord {
    /// Creates a record with the four fields the skill relies on.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        stream_url: impl Into<String>,
        video_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            stream_url: stream_url.into(),
            video_id: video_id.into(),
            duration: None,
            thumbnail: None,
        }
    }
}

/// Entry in the user's playlist library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub playlist_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Track count. Library listings send it as text (`"25"`), so anything
    /// that is not a whole number decodes as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<u32>,
}

impl PlaylistSummary {
    pub fn new(playlist_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            title: title.into(),
            description: None,
            count: None,
        }
    }

    /// Case-insensitive substring match against the title.
    pub fn title_contains(&self, name: &str) -> bool {
        self.title.to_lowercase().contains(&name.to_lowercase())
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(serde_json::Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}

/// A playlist with its ordered songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    pub playlist_id: String,
    pub title: String,
    pub songs: Vec<SongRecord>,
}
