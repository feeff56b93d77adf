//! Music Catalog Adapters.
//!
//! Implementations of the MusicCatalog port.
//!
//! ## Available Adapters
//!
//! - `HttpMusicCatalog` - JSON-over-HTTP client for the catalog service
//! - `MockMusicCatalog` - Scripted in-memory catalog for testing

mod http_catalog;
mod mock_catalog;

pub use http_catalog::{CatalogError, HttpMusicCatalog};
pub use mock_catalog::{CatalogCall, MockMusicCatalog};
