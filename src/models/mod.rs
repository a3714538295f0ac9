//! Data models for TheAudioDB responses.
//!
//! Each record maps TheAudioDB's `idXxx`/`strXxx`/`intXxx` field names onto
//! plain Rust fields. Optional fields stay `Option`; numeric values that the
//! API ships as strings are parsed on demand and never panic.

pub mod album;
pub mod artist;
pub mod common;
pub mod track;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use common::parse_numeric;
pub use track::Track;
