//! Catalog domain module.
//!
//! Song and playlist records exchanged with the music catalog service.

mod records;

pub use records::{PlaylistDetail, PlaylistSummary, SongRecord};
