//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `catalog` - Song and playlist records from the music catalog
//! - `skill` - Skill requests, responses, session state and localized messages

pub mod catalog;
pub mod skill;
