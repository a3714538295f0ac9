//! Artist screen controller.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::{Album, Artist};
use crate::repository::{FetchResult, MetadataRepository};
use crate::state::{StateStore, StateStream};

/// Everything the artist screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistViewState {
    pub artist: Option<Artist>,
    /// Albums in API order.
    pub albums: Vec<Album>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Owns the [`ArtistViewState`] and the artist → albums load sequence.
///
/// Clones share the same state. Overlapping loads are neither queued nor
/// versioned; whichever reduction lands last wins.
#[derive(Clone)]
pub struct ArtistController {
    repository: MetadataRepository,
    state: StateStore<ArtistViewState>,
}

impl ArtistController {
    pub fn new(repository: MetadataRepository) -> Self {
        Self {
            repository,
            state: StateStore::default(),
        }
    }

    /// The latest snapshot.
    pub fn state(&self) -> Arc<ArtistViewState> {
        self.state.snapshot()
    }

    /// Stream of snapshots, starting with the current one.
    pub fn subscribe(&self) -> StateStream<ArtistViewState> {
        self.state.subscribe()
    }

    /// Load an artist, then their albums.
    ///
    /// The albums request is only made once the artist lookup succeeded.
    /// Previous artist and albums stay visible until replaced.
    pub async fn load_artist(&self, name: &str) {
        info!("Loading artist {:?}", name);
        self.state.update(|s| ArtistViewState {
            is_loading: true,
            error: None,
            ..s.clone()
        });

        let artist = match self.repository.fetch_artist(name).await {
            FetchResult::Success(artist) => artist,
            FetchResult::Failure(message) => {
                warn!("Artist {:?} failed: {}", name, message);
                self.fail(message);
                return;
            }
        };
        self.state.update(|s| ArtistViewState {
            artist: Some(artist),
            ..s.clone()
        });

        match self.repository.fetch_albums(name).await {
            FetchResult::Success(albums) => {
                info!("Loaded {} albums for {:?}", albums.len(), name);
                self.state.update(|s| ArtistViewState {
                    albums,
                    is_loading: false,
                    ..s.clone()
                });
            }
            FetchResult::Failure(message) => {
                warn!("Albums for {:?} failed: {}", name, message);
                self.fail(message);
            }
        }
    }

    /// Run [`load_artist`](Self::load_artist) as a detached task.
    pub fn launch_load_artist<S: Into<String>>(&self, name: S) -> JoinHandle<()> {
        let controller = self.clone();
        let name = name.into();
        tokio::spawn(async move { controller.load_artist(&name).await })
    }

    fn fail(&self, message: String) {
        self.state.update(|s| ArtistViewState {
            is_loading: false,
            error: Some(message),
            ..s.clone()
        });
    }
}
