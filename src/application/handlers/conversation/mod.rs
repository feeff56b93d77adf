//! Handlers that answer from fixed text, without the catalog.

mod cancel_and_stop;
mod prompts;
mod session_ended;

pub use cancel_and_stop::CancelAndStopHandler;
pub use prompts::{FallbackHandler, HelpHandler, LaunchHandler};
pub use session_ended::SessionEndedHandler;
