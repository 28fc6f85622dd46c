//! Error type shared by token requests, catalog lookups, field projections
//! and identifier file I/O.

use thiserror::Error;

/// Every failure the crate can surface.
///
/// Nothing is retried: an error ends the enclosing operation (a single
/// lookup, a playlist walk or a whole collection run) and is handed to the
/// caller unchanged.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The token endpoint answered with a non-success status.
    #[error("Authentication failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    /// An entity or playlist page lookup answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Remote { status: u16, url: String },

    /// A fetched record does not carry the attribute a projection expects.
    #[error("Record is missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
