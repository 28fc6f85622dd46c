//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the track
//! collector. It obtains an app access token, looks up single tracks and
//! artists, and walks the paginated track listing of playlists.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Entity Lookups (tracks, artists)
//!     └── Playlist Pages (cursor pagination)
//!          ↓
//! CatalogTransport (authenticated GET)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Every read goes through the [`CatalogTransport`] trait. [`HttpTransport`]
//! is the production implementation; it carries the bearer token so the
//! lookup code above it never deals with credentials. Tests substitute an
//! in-memory transport.
//!
//! ## Error Handling
//!
//! A non-success status is turned into [`CatalogError::Remote`] (or
//! [`CatalogError::Auth`] for the token endpoint). Nothing is retried and
//! rate-limit responses are reported like any other failure.
//!
//! ## Token Lifetime
//!
//! Client-credentials tokens are not refreshed. A run that outlives the token
//! fails with the remote error of the first rejected request.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let token = spotify::auth::request_token(&client_id, &client_secret).await?;
//! let transport = HttpTransport::new(token.access_token);
//!
//! let mut fetcher = EntityFetcher::new(&transport);
//! let track = fetcher.fetch(EntityKind::Track, "3bGfuGWywg85koHG8nturm").await?;
//!
//! let ids = spotify::playlist::walk(&transport, "37i9dQZF1DXcBWIGoYBM5M").await?;
//! ```

use std::future::Future;

use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::{CatalogError, Result},
};

pub mod auth;
pub mod entities;
pub mod playlist;

/// Authenticated read access to the catalog.
pub trait CatalogTransport {
    /// Base URL that endpoint paths are appended to.
    fn api_url(&self) -> &str;

    /// Issues one authenticated GET for an absolute URL and returns the JSON
    /// body, or [`CatalogError::Remote`] on a non-success status.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>>;
}

impl<T: CatalogTransport> CatalogTransport for &T {
    fn api_url(&self) -> &str {
        (**self).api_url()
    }

    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>> {
        (**self).get_json(url)
    }
}

/// [`CatalogTransport`] over HTTPS with a bearer token.
pub struct HttpTransport {
    client: Client,
    api_url: String,
    token: String,
}

impl HttpTransport {
    /// Creates a transport against the configured API URL.
    pub fn new(token: String) -> Self {
        Self::with_api_url(config::spotify_apiurl(), token)
    }

    pub fn with_api_url(api_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            token,
        }
    }
}

impl CatalogTransport for HttpTransport {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Remote {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
