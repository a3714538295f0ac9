//! In-memory [`ApiClient`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResponse};
use crate::error::{AudioDbError, Result};
use crate::models::{Album, Artist, Track};

/// Scripted reply for one query.
#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Items(Vec<T>),
    /// Successful status with a null list field.
    Null,
    Unsuccessful,
    /// Transport failure.
    Offline,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<ApiResponse<T>> {
        match self {
            Reply::Items(items) => Ok(ApiResponse::ok(items.clone())),
            Reply::Null => Ok(ApiResponse::empty()),
            Reply::Unsuccessful => Ok(ApiResponse::unsuccessful()),
            Reply::Offline => Err(AudioDbError::ParseError(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            )),
        }
    }
}

/// Fake API keyed by query string. Unscripted queries answer with an empty
/// successful list. Every call is recorded as `"<kind>:<query>"`.
#[derive(Default)]
pub(crate) struct FakeApi {
    artists: HashMap<String, Reply<Artist>>,
    albums: HashMap<String, Reply<Album>>,
    tracks: HashMap<String, Reply<Track>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_artists(mut self, name: &str, reply: Reply<Artist>) -> Self {
        self.artists.insert(name.to_string(), reply);
        self
    }

    pub(crate) fn with_albums(mut self, name: &str, reply: Reply<Album>) -> Self {
        self.albums.insert(name.to_string(), reply);
        self
    }

    pub(crate) fn with_tracks(mut self, album_id: &str, reply: Reply<Track>) -> Self {
        self.tracks.insert(album_id.to_string(), reply);
        self
    }

    /// Hold every reply to the call `"<kind>:<query>"` for `delay`.
    pub(crate) fn with_delay(mut self, call: &str, delay: Duration) -> Self {
        self.delays.insert(call.to_string(), delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call.clone());
        if let Some(delay) = self.delays.get(&call) {
            tokio::time::sleep(*delay).await;
        }
    }
}

fn reply_for<T: Clone>(replies: &HashMap<String, Reply<T>>, query: &str) -> Result<ApiResponse<T>> {
    replies
        .get(query)
        .map(Reply::resolve)
        .unwrap_or_else(|| Ok(ApiResponse::ok(Vec::new())))
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn search_artist(&self, name: &str) -> Result<ApiResponse<Artist>> {
        self.record(format!("artist:{}", name)).await;
        reply_for(&self.artists, name)
    }

    async fn search_albums(&self, artist_name: &str) -> Result<ApiResponse<Album>> {
        self.record(format!("albums:{}", artist_name)).await;
        reply_for(&self.albums, artist_name)
    }

    async fn get_album_tracks(&self, album_id: &str) -> Result<ApiResponse<Track>> {
        self.record(format!("tracks:{}", album_id)).await;
        reply_for(&self.tracks, album_id)
    }
}
