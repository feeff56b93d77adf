//! HTTP Music Catalog - Implementation of MusicCatalog over the catalog service's JSON API.
//!
//! Every lookup is a `POST` against the configured base URL:
//!
//! - `/search` with body `{"query": ...}` -> `{"results": [...]}`
//! - `/playlists` -> `{"playlists": [...]}`
//! - `/playlist/{id}` -> `{"songs": [...], "title": ...}`
//!
//! # Configuration
//!
//! ```ignore
//! let config = CatalogConfig {
//!     base_url: "http://localhost:8080".to_string(),
//!     ..Default::default()
//! };
//! let catalog = HttpMusicCatalog::new(&config)?;
//! ```
//!
//! Failures never leave this adapter: they are logged and surfaced as `None`.
//! No retries are attempted.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::CatalogConfig;
use crate::domain::catalog::{PlaylistDetail, PlaylistSummary, SongRecord};
use crate::ports::MusicCatalog;

/// Errors raised while talking to the catalog service.
///
/// Only observable in logs and from [`HttpMusicCatalog::new`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Catalog returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse catalog response: {0}")]
    Parse(String),
}

/// Catalog client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpMusicCatalog {
    base_url: Url,
    timeout: Duration,
    client: Client,
}

impl HttpMusicCatalog {
    /// Creates a client for the configured catalog service.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            base_url,
            timeout: config.timeout(),
            client,
        })
    }

    /// Builds an endpoint URL below the base path.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always editable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a POST and decodes the JSON body.
    async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<T, CatalogError> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "Calling catalog service");

        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else if e.is_connect() {
                CatalogError::Network(format!("Connection failed: {}", e))
            } else {
                CatalogError::Network(e.to_string())
            }
        })?;

        let response = Self::handle_response_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Turns any non-2xx status into an error carrying the body.
    async fn handle_response_status(response: Response) -> Result<Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Logs a failed lookup and converts the result into the port's `Option`.
fn absorb<T>(operation: &str, result: Result<T, CatalogError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(operation, error = %err, "Catalog call failed");
            None
        }
    }
}

#[async_trait]
impl MusicCatalog for HttpMusicCatalog {
    async fn search(&self, query: &str) -> Option<Vec<SongRecord>> {
        let body = serde_json::json!({ "query": query });
        let result = self
            .post::<SearchResponse>(&["search"], Some(body))
            .await
            .map(|response| response.results);
        absorb("search", result)
    }

    async fn list_playlists(&self) -> Option<Vec<PlaylistSummary>> {
        let result = self
            .post::<PlaylistsResponse>(&["playlists"], None)
            .await
            .map(|response| response.playlists);
        absorb("list_playlists", result)
    }

    async fn get_playlist(&self, playlist_id: &str) -> Option<PlaylistDetail> {
        let result = self
            .post::<PlaylistSongsResponse>(&["playlist", playlist_id], None)
            .await
            .map(|response| PlaylistDetail {
                playlist_id: response
                    .playlist_id
                    .unwrap_or_else(|| playlist_id.to_string()),
                title: response.title.unwrap_or_default(),
                songs: response.songs,
            });
        absorb("get_playlist", result)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SongRecord>,
}

#[derive(Debug, Deserialize)]
struct PlaylistsResponse {
    #[serde(default)]
    playlists: Vec<PlaylistSummary>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSongsResponse {
    #[serde(default)]
    playlist_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    songs: Vec<SongRecord>,
}
