//! Album model.

use serde::{Deserialize, Serialize};

use super::common::{lenient_string, parse_numeric, required_string};

/// An album record as returned by `searchalbum.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// TheAudioDB album ID.
    #[serde(rename = "idAlbum", deserialize_with = "required_string")]
    pub id: String,

    /// Album title.
    #[serde(rename = "strAlbum", deserialize_with = "required_string")]
    pub title: String,

    /// Name of the credited artist.
    #[serde(rename = "strArtist", default, deserialize_with = "lenient_string")]
    pub artist_name: Option<String>,

    /// Release year, string-encoded on the wire.
    #[serde(
        rename = "intYearReleased",
        default,
        deserialize_with = "lenient_string"
    )]
    pub release_year: Option<String>,

    /// Primary genre.
    #[serde(rename = "strGenre", default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,

    /// Cover thumbnail URL.
    #[serde(rename = "strAlbumThumb", default, deserialize_with = "lenient_string")]
    pub thumbnail_url: Option<String>,

    /// English description.
    #[serde(
        rename = "strDescriptionEN",
        default,
        deserialize_with = "lenient_string"
    )]
    pub description: Option<String>,
}

impl Album {
    /// Create a new album with ID and title.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, title: S2) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Release year as a number, if present and numeric.
    ///
    /// TheAudioDB uses `"0"` for unknown years; that is reported as `None` too.
    pub fn year(&self) -> Option<i32> {
        parse_numeric::<i32>(self.release_year.as_deref()).filter(|y| *y > 0)
    }

    /// One-line "year • genre" caption used in album listings.
    pub fn subtitle(&self) -> String {
        format!(
            "{} • {}",
            self.year().map(|y| y.to_string()).unwrap_or_default(),
            self.genre.as_deref().unwrap_or("")
        )
    }
}
