#![allow(dead_code)]

use std::{collections::HashMap, path::PathBuf, sync::Mutex};

use serde_json::{Value, json};
use spotcollect::{CatalogError, Result, spotify::CatalogTransport};

pub const API_URL: &str = "https://api.test/v1";

/// In-memory catalog: answers known URLs with canned JSON or a status code
/// and records every request it receives.
pub struct FakeTransport {
    responses: HashMap<String, std::result::Result<Value, u16>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), Ok(body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == url).count()
    }
}

impl CatalogTransport for FakeTransport {
    fn api_url(&self) -> &str {
        API_URL
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(CatalogError::Remote {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(CatalogError::Remote {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

pub fn playlist_url(playlist_id: &str) -> String {
    format!("{}/playlists/{}/tracks?limit=100", API_URL, playlist_id)
}

pub fn track_url(track_id: &str) -> String {
    format!("{}/tracks/{}", API_URL, track_id)
}

pub fn artist_url(artist_id: &str) -> String {
    format!("{}/artists/{}", API_URL, artist_id)
}

pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({ "items": items, "next": next })
}

pub fn track_item(id: &str) -> Value {
    json!({ "track": { "id": id, "is_local": false } })
}

pub fn local_item(id: &str) -> Value {
    json!({ "track": { "id": id, "is_local": true } })
}

pub fn null_item() -> Value {
    json!({ "track": null })
}

pub fn missing_id_item() -> Value {
    json!({ "track": { "id": null, "is_local": false } })
}

/// Single-page playlist holding the given tracks.
pub fn with_playlist(transport: FakeTransport, playlist_id: &str, tracks: &[&str]) -> FakeTransport {
    let items = tracks.iter().map(|id| track_item(id)).collect();
    transport.with_json(&playlist_url(playlist_id), page(items, None))
}

pub fn track_record(name: &str, artist_id: &str, artist_name: &str) -> Value {
    json!({
        "name": name,
        "popularity": 64,
        "duration_ms": 215_000,
        "explicit": false,
        "album": { "release_date": "2019-05-17" },
        "available_markets": ["DE", "SE", "US"],
        "artists": [
            { "name": artist_name, "id": artist_id },
            { "name": "Featured", "id": "featured-id" }
        ]
    })
}

pub fn artist_record(name: &str) -> Value {
    json!({
        "name": name,
        "genres": ["indie pop", "swedish pop"],
        "popularity": 71,
        "followers": { "total": 1_250_000 }
    })
}

pub fn temp_path(file_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("spotcollect-test-{}", rand::random::<u64>()))
        .join(file_name)
}
