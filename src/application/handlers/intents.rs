//! Intent and slot names declared in the skill's interaction model.

pub const PLAY_MUSIC: &str = "PlayMusicIntent";
pub const SEARCH_MUSIC: &str = "SearchMusicIntent";
pub const PLAY_PLAYLIST: &str = "PlayPlaylistIntent";
pub const PAUSE: &str = "AMAZON.PauseIntent";
pub const RESUME: &str = "AMAZON.ResumeIntent";
pub const HELP: &str = "AMAZON.HelpIntent";
pub const CANCEL: &str = "AMAZON.CancelIntent";
pub const STOP: &str = "AMAZON.StopIntent";
pub const FALLBACK: &str = "AMAZON.FallbackIntent";

pub mod slots {
    pub const QUERY: &str = "query";
    pub const ARTIST: &str = "artist";
    pub const SONG: &str = "song";
    pub const PLAYLIST_NAME: &str = "playlistName";
}
