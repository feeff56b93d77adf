//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MusicCatalog` - Song search and playlist lookups

mod music_catalog;

pub use music_catalog::MusicCatalog;
