//! # audiodb-view
//!
//! Fetches artist, album and track metadata from TheAudioDB and exposes it
//! through observable view states.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use audiodb_view::{ApiConfig, ArtistController, AudioDbApi, MetadataRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(AudioDbApi::new(ApiConfig::default())?);
//!     let repository = MetadataRepository::new(api);
//!     let artists = ArtistController::new(repository);
//!
//!     let mut states = artists.subscribe();
//!     artists.launch_load_artist("Taylor Swift");
//!     while let Some(state) = states.next().await {
//!         if !state.is_loading && (state.artist.is_some() || state.error.is_some()) {
//!             println!("{:?}", state);
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`ApiClient`] / [`AudioDbApi`] - the three remote queries
//! - [`MetadataRepository`] - folds responses and errors into [`FetchResult`]
//! - [`ArtistController`] / [`AlbumController`] - own the view states

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod repository;
pub mod state;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiResponse, AudioDbApi};
pub use config::ApiConfig;
pub use controller::{AlbumController, AlbumViewState, ArtistController, ArtistViewState};
pub use error::AudioDbError;
pub use models::{Album, Artist, Track};
pub use repository::{FetchResult, MetadataRepository};
pub use state::{StateStore, StateStream};
