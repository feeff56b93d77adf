//! Music Catalog Port - Interface for the remote music catalog service.
//!
//! This port abstracts the three catalog lookups the skill performs, so
//! intent handlers can be exercised without a running catalog service.
//!
//! # Error policy
//!
//! Implementations absorb every transport, status and decoding failure and
//! return `None`. Callers treat `None` and an empty result the same way:
//! there is nothing to play.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedCatalog;
//!
//! #[async_trait]
//! impl MusicCatalog for FixedCatalog {
//!     async fn search(&self, _query: &str) -> Option<Vec<SongRecord>> {
//!         Some(vec![SongRecord::new("Wonderwall", "Oasis", "u1", "v1")])
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;

use crate::domain::catalog::{PlaylistDetail, PlaylistSummary, SongRecord};

/// Port for music catalog lookups.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Search songs matching free text, in the catalog's own ranking order.
    async fn search(&self, query: &str) -> Option<Vec<SongRecord>>;

    /// List the playlists in the user's library.
    async fn list_playlists(&self) -> Option<Vec<PlaylistSummary>>;

    /// Fetch a playlist with its songs.
    async fn get_playlist(&self, playlist_id: &str) -> Option<PlaylistDetail>;
}
