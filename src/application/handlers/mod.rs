//! Application handlers.
//!
//! One handler per supported request shape, registered in priority order
//! with the [`SkillDispatcher`].

mod conversation;
mod dispatcher;
mod error_handler;
pub mod intents;
mod music;
mod playback;

pub use conversation::{
    CancelAndStopHandler, FallbackHandler, HelpHandler, LaunchHandler, SessionEndedHandler,
};
pub use dispatcher::{DispatchOutcome, HandlerInput, IntentHandler, Route, SkillDispatcher};
pub use error_handler::ErrorHandler;
pub use music::{PlayMusicHandler, PlayPlaylistHandler, SearchMusicHandler};
pub use playback::{PauseHandler, ResumeHandler};
