//! Artist model.

use serde::{Deserialize, Serialize};

use super::common::{lenient_string, required_string};

/// An artist record as returned by `search.php`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// TheAudioDB artist ID.
    #[serde(rename = "idArtist", deserialize_with = "required_string")]
    pub id: String,

    /// Artist name.
    #[serde(rename = "strArtist", deserialize_with = "required_string")]
    pub name: String,

    /// Primary genre.
    #[serde(rename = "strGenre", default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,

    /// English biography.
    #[serde(
        rename = "strBiographyEN",
        default,
        deserialize_with = "lenient_string"
    )]
    pub biography: Option<String>,

    /// Square thumbnail image URL.
    #[serde(
        rename = "strArtistThumb",
        default,
        deserialize_with = "lenient_string"
    )]
    pub thumbnail_url: Option<String>,

    /// Wide banner image URL.
    #[serde(
        rename = "strArtistBanner",
        default,
        deserialize_with = "lenient_string"
    )]
    pub banner_url: Option<String>,
}

impl Artist {
    /// Create a new artist with ID and name.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Best image for a header: the banner, falling back to the thumbnail.
    pub fn header_image(&self) -> Option<&str> {
        self.banner_url
            .as_deref()
            .or(self.thumbnail_url.as_deref())
    }
}
