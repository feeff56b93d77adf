//! Skill domain module.
//!
//! Request and response envelopes for one conversational turn, the typed
//! session state the skill stores between turns, and the localized message
//! catalog.

mod errors;
mod messages;
mod request;
mod response;
mod session_state;

pub use errors::SkillError;
pub use messages::{Language, Message, PLAYLIST_SUGGESTION_LIMIT};
pub use request::{
    IntentRequest, RequestKind, SessionAttributes, SessionEndedError, SkillRequest, DEFAULT_LOCALE,
};
pub use response::{AudioDirective, PlayBehavior, ResponseBuilder, SkillResponse};
pub use session_state::SessionState;
