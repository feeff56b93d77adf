//! Playback control handlers.
//!
//! Neither handler reads the session: resume does not know what was playing.

mod pause;
mod resume;

pub use pause::PauseHandler;
pub use resume::ResumeHandler;
