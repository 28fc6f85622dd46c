use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// The kinds of catalog entity that can be looked up by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Track,
    Artist,
}

impl EntityKind {
    /// Lookup URL for one entity of this kind below the API base URL.
    pub fn url(&self, api_url: &str, id: &str) -> String {
        match self {
            EntityKind::Track => format!("{uri}/tracks/{id}", uri = api_url, id = id),
            EntityKind::Artist => format!("{uri}/artists/{id}", uri = api_url, id = id),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Track => write!(f, "track"),
            EntityKind::Artist => write!(f, "artist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

/// One page of a playlist's track listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub is_local: bool,
}

impl PlaylistPage {
    /// Catalog track identifiers on this page.
    ///
    /// Items without a track, local files and tracks without an identifier
    /// are skipped.
    pub fn track_ids(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .filter(|track| !track.is_local)
            .filter_map(|track| track.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Tabled)]
pub struct FieldTableRow {
    pub field: String,
    pub value: String,
}

/// One row of a track dataset, combining a track with its first artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub track_id: String,
    pub name: String,
    pub artist_id: String,
    pub artist_name: String,
    pub popularity: u64,
    pub duration_ms: u64,
    pub explicit: bool,
    pub release_date: String,
    pub available_markets_count: u64,
    pub artist_genres: Vec<String>,
    pub artist_popularity: u64,
    pub artist_followers: u64,
}
