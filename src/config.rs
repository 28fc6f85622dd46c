//! Configuration management for the Spotify track collector.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The only required values are the Spotify client
//! credentials; the API endpoints default to the public Spotify URLs and can be
//! overridden for testing against another host.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::{CatalogError, Result};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// Creates the platform-specific local data directory for the application if it
/// doesn't exist and loads `spotcollect/.env` from there, followed by a `.env`
/// file in the current working directory. Variables already present in the
/// environment are never overwritten, and both files are optional.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotcollect/.env`
/// - macOS: `~/Library/Application Support/spotcollect/.env`
/// - Windows: `%LOCALAPPDATA%/spotcollect/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or one of
/// the `.env` files exists but cannot be read or parsed.
///
/// # Example
///
/// ```
/// use spotcollect::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_file(&path)?;
    let cwd_env = env::current_dir()
        .map_err(|e| e.to_string())?
        .join(".env");
    load_env_file(&cwd_env)
}

/// Loads one `.env` file into the environment.
///
/// A missing file is not an error since the variables may come from the
/// environment itself. Unreadable or malformed files are reported with the
/// offending path.
pub fn load_env_file(path: &Path) -> std::result::Result<(), String> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcollect/.env");
    path
}

/// Returns the Spotify client id used for the client-credentials flow.
///
/// Reads `SPOTIFY_CLIENT_ID`.
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify client secret used for the client-credentials flow.
///
/// Reads `SPOTIFY_CLIENT_SECRET`. The secret should be kept out of logs and
/// version control.
pub fn spotify_client_secret() -> Result<String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
///
/// Reads `SPOTIFY_API_URL` and falls back to [`DEFAULT_SPOTIFY_API_URL`].
/// A trailing slash is removed so paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify OAuth token URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL` and falls back to
/// [`DEFAULT_SPOTIFY_API_TOKEN_URL`].
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(CatalogError::Config(format!("{} is empty", name))),
        Err(_) => Err(CatalogError::Config(format!("{} must be set", name))),
    }
}
