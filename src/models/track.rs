//! Track model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::common::{lenient_string, parse_numeric, required_string};

/// A track record as returned by `track.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// TheAudioDB track ID.
    #[serde(rename = "idTrack", deserialize_with = "required_string")]
    pub id: String,

    /// Track title.
    #[serde(rename = "strTrack", deserialize_with = "required_string")]
    pub title: String,

    /// Duration in milliseconds, string-encoded and not always numeric.
    #[serde(rename = "intDuration", default, deserialize_with = "lenient_string")]
    pub raw_duration: Option<String>,
}

impl Track {
    /// Create a new track with ID and title.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, title: S2) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            raw_duration: None,
        }
    }

    /// Duration in milliseconds, if the raw value is numeric.
    pub fn duration_ms(&self) -> Option<u64> {
        parse_numeric(self.raw_duration.as_deref())
    }

    /// Duration as a [`Duration`], if the raw value is numeric.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms().map(Duration::from_millis)
    }

    /// Get duration formatted as M:SS.
    pub fn duration_formatted(&self) -> Option<String> {
        let total_seconds = self.duration_ms()? / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        Some(format!("{}:{:02}", minutes, seconds))
    }
}
