//! Album detail controller.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::{Album, Track};
use crate::repository::{FetchResult, MetadataRepository};
use crate::state::{StateStore, StateStream};

/// Everything the album detail screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumViewState {
    pub album: Option<Album>,
    pub tracks: Vec<Track>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AlbumViewState {
    /// Sum of all numeric track durations, in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.iter().filter_map(Track::duration_ms).sum()
    }
}

/// Owns the [`AlbumViewState`] for the album detail screen.
#[derive(Clone)]
pub struct AlbumController {
    repository: MetadataRepository,
    state: StateStore<AlbumViewState>,
}

impl AlbumController {
    pub fn new(repository: MetadataRepository) -> Self {
        Self {
            repository,
            state: StateStore::default(),
        }
    }

    pub fn state(&self) -> Arc<AlbumViewState> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<AlbumViewState> {
        self.state.subscribe()
    }

    /// Show `album` immediately with no tracks, then load its track list.
    ///
    /// Unlike the artist screen, nothing from the previous album survives.
    pub async fn load_album_details(&self, album: Album) {
        info!("Loading tracks for album {} ({:?})", album.id, album.title);
        let album_id = album.id.clone();
        self.state.replace(AlbumViewState {
            album: Some(album),
            tracks: Vec::new(),
            is_loading: true,
            error: None,
        });

        match self.repository.fetch_album_tracks(&album_id).await {
            FetchResult::Success(tracks) => {
                info!("Loaded {} tracks for album {}", tracks.len(), album_id);
                self.state.update(|s| AlbumViewState {
                    tracks,
                    is_loading: false,
                    ..s.clone()
                });
            }
            FetchResult::Failure(message) => {
                warn!("Tracks for album {} failed: {}", album_id, message);
                self.state.update(|s| AlbumViewState {
                    is_loading: false,
                    error: Some(message),
                    ..s.clone()
                });
            }
        }
    }

    /// Run [`load_album_details`](Self::load_album_details) as a detached task.
    pub fn launch_load_album_details(&self, album: Album) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.load_album_details(album).await })
    }
}
