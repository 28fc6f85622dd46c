//! Pure projections over fetched track and artist records.
//!
//! Records are kept as the raw JSON objects returned by the Web API. Every
//! projection reads from the record only and reports
//! [`CatalogError::MissingField`] when the record does not have the expected
//! shape.

use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{
    error::{CatalogError, Result},
    types::{EntityKind, TrackArtist},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Popularity,
    DurationMs,
    Explicit,
    Name,
    ReleaseDate,
    AvailableMarketsCount,
    Genres,
    FollowersTotal,
    Artists,
}

const TRACK_FIELDS: &[Field] = &[
    Field::Name,
    Field::Artists,
    Field::Popularity,
    Field::DurationMs,
    Field::Explicit,
    Field::ReleaseDate,
    Field::AvailableMarketsCount,
];

const ARTIST_FIELDS: &[Field] = &[
    Field::Name,
    Field::Genres,
    Field::Popularity,
    Field::FollowersTotal,
];

impl Field {
    /// Fields shown for an entity kind when no single field is requested.
    pub fn for_kind(kind: EntityKind) -> &'static [Field] {
        match kind {
            EntityKind::Track => TRACK_FIELDS,
            EntityKind::Artist => ARTIST_FIELDS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Popularity => "popularity",
            Field::DurationMs => "duration_ms",
            Field::Explicit => "explicit",
            Field::Name => "name",
            Field::ReleaseDate => "release_date",
            Field::AvailableMarketsCount => "available_markets_count",
            Field::Genres => "genres",
            Field::FollowersTotal => "followers_total",
            Field::Artists => "artists",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" => Ok(Field::Popularity),
            "duration_ms" | "duration" => Ok(Field::DurationMs),
            "explicit" => Ok(Field::Explicit),
            "name" => Ok(Field::Name),
            "release_date" => Ok(Field::ReleaseDate),
            "available_markets_count" | "markets" => Ok(Field::AvailableMarketsCount),
            "genres" => Ok(Field::Genres),
            "followers_total" | "followers" => Ok(Field::FollowersTotal),
            "artists" => Ok(Field::Artists),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Value of a single projected field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(u64),
    Flag(bool),
    Text(String),
    List(Vec<String>),
    Artists(Vec<TrackArtist>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Artists(artists) => {
                let names: Vec<String> = artists
                    .iter()
                    .map(|a| format!("{} ({})", a.name, a.id))
                    .collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

/// Projects one field out of a fetched record.
pub fn project(record: &Value, field: Field) -> Result<FieldValue> {
    match field {
        Field::Popularity => popularity(record).map(FieldValue::Integer),
        Field::DurationMs => duration_ms(record).map(FieldValue::Integer),
        Field::Explicit => explicit(record).map(FieldValue::Flag),
        Field::Name => name(record).map(FieldValue::Text),
        Field::ReleaseDate => release_date(record).map(FieldValue::Text),
        Field::AvailableMarketsCount => available_markets_count(record).map(FieldValue::Integer),
        Field::Genres => genres(record).map(FieldValue::List),
        Field::FollowersTotal => followers_total(record).map(FieldValue::Integer),
        Field::Artists => artists(record).map(FieldValue::Artists),
    }
}

pub fn popularity(record: &Value) -> Result<u64> {
    record["popularity"].as_u64().ok_or(missing("popularity"))
}

pub fn duration_ms(record: &Value) -> Result<u64> {
    record["duration_ms"].as_u64().ok_or(missing("duration_ms"))
}

pub fn explicit(record: &Value) -> Result<bool> {
    record["explicit"].as_bool().ok_or(missing("explicit"))
}

pub fn name(record: &Value) -> Result<String> {
    record["name"]
        .as_str()
        .map(str::to_string)
        .ok_or(missing("name"))
}

pub fn release_date(record: &Value) -> Result<String> {
    record["album"]["release_date"]
        .as_str()
        .map(str::to_string)
        .ok_or(missing("album.release_date"))
}

pub fn available_markets_count(record: &Value) -> Result<u64> {
    record["available_markets"]
        .as_array()
        .map(|markets| markets.len() as u64)
        .ok_or(missing("available_markets"))
}

pub fn genres(record: &Value) -> Result<Vec<String>> {
    let list = record["genres"].as_array().ok_or(missing("genres"))?;
    list.iter()
        .map(|g| g.as_str().map(str::to_string).ok_or(missing("genres")))
        .collect()
}

pub fn followers_total(record: &Value) -> Result<u64> {
    record["followers"]["total"]
        .as_u64()
        .ok_or(missing("followers.total"))
}

pub fn artists(record: &Value) -> Result<Vec<TrackArtist>> {
    let list = record["artists"].as_array().ok_or(missing("artists"))?;
    list.iter()
        .map(|a| {
            let name = a["name"].as_str().ok_or(missing("artists.name"))?;
            let id = a["id"].as_str().ok_or(missing("artists.id"))?;
            Ok(TrackArtist {
                id: id.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}

fn missing(field: &'static str) -> CatalogError {
    CatalogError::MissingField { field }
}
