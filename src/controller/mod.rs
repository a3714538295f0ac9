//! View-state controllers.
//!
//! Each controller owns one [`StateStore`](crate::state::StateStore) and is
//! its only writer. Renderers read through `state()`/`subscribe()` and drive
//! changes through the `load_*` operations.

pub mod album;
pub mod artist;

pub use album::{AlbumController, AlbumViewState};
pub use artist::{ArtistController, ArtistViewState};
