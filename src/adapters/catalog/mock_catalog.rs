//! Mock Music Catalog for testing.
//!
//! A scripted, in-memory implementation of the MusicCatalog port. Each
//! lookup returns what was configured (or `None`, as if the service were
//! down) and every call is recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let catalog = MockMusicCatalog::new()
//!     .with_search_results(vec![SongRecord::new("Wonderwall", "Oasis", "u1", "v1")]);
//!
//! let songs = catalog.search("wonderwall").await;
//! assert_eq!(catalog.calls(), vec![CatalogCall::Search("wonderwall".into())]);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::catalog::{PlaylistDetail, PlaylistSummary, SongRecord};
use crate::ports::MusicCatalog;

/// A lookup made against the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    Search(String),
    ListPlaylists,
    GetPlaylist(String),
}

/// Mock catalog for testing.
#[derive(Debug, Clone, Default)]
pub struct MockMusicCatalog {
    search_results: Option<Vec<SongRecord>>,
    playlists: Option<Vec<PlaylistSummary>>,
    playlist_details: HashMap<String, PlaylistDetail>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CatalogCall>>>,
}

impl MockMusicCatalog {
    /// Creates a mock that answers `None` to everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the songs returned for any search.
    pub fn with_search_results(mut self, results: Vec<SongRecord>) -> Self {
        self.search_results = Some(results);
        self
    }

    /// Sets the playlist library.
    pub fn with_playlists(mut self, playlists: Vec<PlaylistSummary>) -> Self {
        self.playlists = Some(playlists);
        self
    }

    /// Registers the detail returned for `detail.playlist_id`.
    pub fn with_playlist(mut self, detail: PlaylistDetail) -> Self {
        self.playlist_details
            .insert(detail.playlist_id.clone(), detail);
        self
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the number of calls made to this catalog.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: CatalogCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MusicCatalog for MockMusicCatalog {
    async fn search(&self, query: &str) -> Option<Vec<SongRecord>> {
        self.record(CatalogCall::Search(query.to_string()));
        self.search_results.clone()
    }

    async fn list_playlists(&self) -> Option<Vec<PlaylistSummary>> {
        self.record(CatalogCall::ListPlaylists);
        self.playlists.clone()
    }

    async fn get_playlist(&self, playlist_id: &str) -> Option<PlaylistDetail> {
        self.record(CatalogCall::GetPlaylist(playlist_id.to_string()));
        self.playlist_details.get(playlist_id).cloned()
    }
}
