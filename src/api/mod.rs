//! API clients for TheAudioDB.
//!
//! This module provides:
//! - [`ApiClient`]: the query interface the repository depends on
//! - [`AudioDbApi`]: its HTTP implementation against the public API

pub mod client;
pub mod public;

pub use client::{ApiClient, ApiResponse};
pub use public::AudioDbApi;
