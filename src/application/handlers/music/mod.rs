//! Handlers that look music up in the catalog and start playback.

mod play_music;
mod play_playlist;
mod search_music;

pub use play_music::PlayMusicHandler;
pub use play_playlist::PlayPlaylistHandler;
pub use search_music::SearchMusicHandler;

use crate::domain::catalog::SongRecord;
use crate::domain::skill::{AudioDirective, Language, Message, ResponseBuilder, SkillResponse};

/// Plays the catalog's top result, or speaks `nothing_found` when there is none.
///
/// `None` and an empty list are treated the same.
fn play_top_result(
    results: Option<Vec<SongRecord>>,
    language: Language,
    nothing_found: Message<'_>,
) -> SkillResponse {
    let Some(song) = results.as_deref().and_then(<[SongRecord]>::first) else {
        return ResponseBuilder::new()
            .speak(nothing_found.render(language))
            .build();
    };

    let speech = Message::NowPlaying {
        title: &song.title,
        artist: &song.artist,
    }
    .render(language);

    ResponseBuilder::new()
        .speak(speech)
        .play(AudioDirective::play_from_start(&song.stream_url, &song.video_id))
        .build()
}
