//! The query interface the repository consumes.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Album, Artist, Track};

/// Raw outcome of one query that completed at the transport level.
///
/// `success` mirrors the HTTP status; `items` is the list field of the body,
/// `None` when the server sent `null` or omitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub items: Option<Vec<T>>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `items`.
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            success: true,
            items: Some(items),
        }
    }

    /// A successful response whose list field was null.
    pub fn empty() -> Self {
        Self {
            success: true,
            items: None,
        }
    }

    /// A response the server flagged as unsuccessful.
    pub fn unsuccessful() -> Self {
        Self {
            success: false,
            items: None,
        }
    }
}

/// Remote music-metadata queries.
///
/// An `Err` means the request never produced a usable response (network,
/// timeout, decode).
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Search artists by name (`search.php?s=`).
    async fn search_artist(&self, name: &str) -> Result<ApiResponse<Artist>>;

    /// Search albums by artist name (`searchalbum.php?s=`).
    async fn search_albums(&self, artist_name: &str) -> Result<ApiResponse<Album>>;

    /// List the tracks of one album (`track.php?m=`).
    async fn get_album_tracks(&self, album_id: &str) -> Result<ApiResponse<Track>>;
}
