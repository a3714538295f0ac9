//! Metadata repository.
//!
//! Folds raw [`ApiClient`] outcomes into [`FetchResult`]s. Nothing raised by
//! the client escapes this boundary: transport errors become a fixed message,
//! unsuccessful responses become a resource-specific one.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{ApiClient, ApiResponse};
use crate::error::Result;
use crate::models::{Album, Artist, Track};

/// Message for any transport failure. The cause is logged, not surfaced.
pub const NO_CONNECTION: &str = "no internet connection";
/// Message when an artist search succeeded but matched nobody.
pub const ARTIST_NOT_FOUND: &str = "artist not found";
/// Message when the artist search was unsuccessful or returned no list.
pub const ARTIST_LOAD_FAILED: &str = "failed to load artist data";
/// Message when the album search was unsuccessful or returned no list.
pub const ALBUMS_LOAD_FAILED: &str = "failed to load albums";
/// Message when the track listing was unsuccessful or returned no list.
pub const TRACKS_LOAD_FAILED: &str = "failed to load tracks";

/// Outcome of one repository operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Success(T),
    /// Human-readable message for the view layer.
    Failure(String),
}

impl<T> FetchResult<T> {
    /// Build a failure from any message.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        FetchResult::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    /// The payload, discarding any failure message.
    pub fn ok(self) -> Option<T> {
        match self {
            FetchResult::Success(data) => Some(data),
            FetchResult::Failure(_) => None,
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchResult::Success(_) => None,
            FetchResult::Failure(message) => Some(message),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchResult<U> {
        match self {
            FetchResult::Success(data) => FetchResult::Success(f(data)),
            FetchResult::Failure(message) => FetchResult::Failure(message),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> FetchResult<U>>(self, f: F) -> FetchResult<U> {
        match self {
            FetchResult::Success(data) => f(data),
            FetchResult::Failure(message) => FetchResult::Failure(message),
        }
    }
}

/// Repository over a shared [`ApiClient`].
///
/// Every call makes exactly one request; there is no retry and no caching.
#[derive(Clone)]
pub struct MetadataRepository {
    api: Arc<dyn ApiClient>,
}

impl MetadataRepository {
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self { api }
    }

    /// Look up an artist by name.
    ///
    /// Only the first match is used. A successful search with no matches is
    /// reported as [`ARTIST_NOT_FOUND`].
    pub async fn fetch_artist(&self, name: &str) -> FetchResult<Artist> {
        let outcome = self.api.search_artist(name).await;
        normalize("artist", name, outcome, ARTIST_LOAD_FAILED).and_then(|artists| {
            match artists.into_iter().next() {
                Some(artist) => FetchResult::Success(artist),
                None => FetchResult::failure(ARTIST_NOT_FOUND),
            }
        })
    }

    /// List albums by artist name. An empty list is a valid result.
    pub async fn fetch_albums(&self, artist_name: &str) -> FetchResult<Vec<Album>> {
        let outcome = self.api.search_albums(artist_name).await;
        normalize("albums", artist_name, outcome, ALBUMS_LOAD_FAILED)
    }

    /// List the tracks of an album. An empty list is a valid result.
    pub async fn fetch_album_tracks(&self, album_id: &str) -> FetchResult<Vec<Track>> {
        let outcome = self.api.get_album_tracks(album_id).await;
        normalize("tracks", album_id, outcome, TRACKS_LOAD_FAILED)
    }
}

fn normalize<T>(
    resource: &str,
    query: &str,
    outcome: Result<ApiResponse<T>>,
    failed: &str,
) -> FetchResult<Vec<T>> {
    match outcome {
        Err(e) => {
            warn!("Fetching {} for {:?} failed: {}", resource, query, e);
            FetchResult::failure(NO_CONNECTION)
        }
        Ok(ApiResponse {
            success: true,
            items: Some(items),
        }) => {
            debug!("Fetched {} {} for {:?}", items.len(), resource, query);
            FetchResult::Success(items)
        }
        Ok(response) => {
            warn!(
                "Unusable {} response for {:?} (success: {})",
                resource, query, response.success
            );
            FetchResult::failure(failed)
        }
    }
}
