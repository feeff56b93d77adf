//! Application layer - Request dispatch and intent handlers.
//!
//! This layer routes each skill request to one handler and coordinates the
//! catalog lookups that handler needs.

pub mod handlers;

pub use handlers::{DispatchOutcome, HandlerInput, IntentHandler, Route, SkillDispatcher};
