//! # CLI Module
//!
//! This module provides the command-line interface layer for spotcollect, a
//! Spotify API client that collects track identifiers from playlists and turns
//! them into track datasets. It implements all user-facing commands and
//! coordinates between the Spotify API layer, the management layer and user
//! interaction.
//!
//! ## Command Categories
//!
//! ### Collection
//!
//! - [`collect`] - Walks playlists and saves their unique track identifiers
//!
//! ### Lookups
//!
//! - [`lookup`] - Prints fields of a single track or artist
//!
//! ### Datasets
//!
//! - [`dataset`] - Builds JSON feature rows from a track identifier file
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Entity Cache, Collection, Dataset)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Every command requests its own app token through [`auth::transport`] and
//! reports progress with the crate's output macros and `indicatif` spinners.
//!
//! ## Error Handling
//!
//! Commands never continue after a failed remote call: the error is printed
//! with `error!` and the process exits with status 1. Output files are only
//! written after the whole run succeeded.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotcollect collect --from-file playlists.txt --target 2000
//! spotcollect dataset --input track_ids.txt --output dataset.json
//! spotcollect artist 4NHQUGzhtTLFvgF5SZesLK
//! ```

mod auth;
mod collect;
mod dataset;
mod lookup;

pub use collect::collect;
pub use dataset::dataset;
pub use lookup::lookup;
