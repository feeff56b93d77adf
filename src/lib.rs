//! YouTube Music Skill - Voice assistant backend for music playback
//!
//! This crate answers voice platform requests (launch, intents, session end)
//! by searching a YouTube Music catalog service and replying with speech and
//! audio player directives.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
