use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    error::Result,
    info,
    spotify::{CatalogTransport, playlist},
    utils,
};

/// Ordered, duplicate-free sequence of track identifiers.
///
/// The order is first-discovery order; the set mirrors the sequence for
/// membership tests.
#[derive(Debug, Default, Clone)]
pub struct TrackIdCollection {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl TrackIdCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it was already collected. Returns whether it was new.
    pub fn insert(&mut self, id: String) -> bool {
        if self.seen.contains(&id) {
            return false;
        }
        self.seen.insert(id.clone());
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn id_set(&self) -> &HashSet<String> {
        &self.seen
    }

    /// `true` when a non-zero target is set and has been reached.
    pub fn reached(&self, target: Option<usize>) -> bool {
        match target {
            Some(target) if target > 0 => self.len() >= target,
            _ => false,
        }
    }
}

/// Where the playlist identifiers of a collection run come from.
#[derive(Debug, Clone)]
pub enum PlaylistSource {
    File(PathBuf),
    Inline(Vec<String>),
}

impl PlaylistSource {
    /// Ordered playlist identifiers; comments and blanks are dropped and a
    /// playlist listed twice is only walked once.
    pub async fn resolve(&self) -> Result<Vec<String>> {
        let mut ids = match self {
            PlaylistSource::File(path) => utils::load_id_file(path).await?,
            PlaylistSource::Inline(ids) => utils::parse_id_list(&ids.join("\n")),
        };
        utils::remove_duplicate_ids(&mut ids);
        Ok(ids)
    }
}

/// Merges the tracks of several playlists into one collection.
///
/// Playlists are walked in the given order. After each playlist the run stops
/// if `target` is set, non-zero and reached; later playlists are never
/// requested. A target of `0` or `None` walks every playlist.
///
/// # Errors
///
/// The first failing playlist aborts the whole run and nothing collected so
/// far is returned.
///
/// # Example
///
/// ```
/// let playlists = vec!["37i9dQZF1DXcBWIGoYBM5M".to_string()];
/// let collection = accumulate(&transport, &playlists, Some(500)).await?;
/// println!("{} unique tracks", collection.len());
/// ```
pub async fn accumulate<T: CatalogTransport>(
    transport: &T,
    playlist_ids: &[String],
    target: Option<usize>,
) -> Result<TrackIdCollection> {
    let mut collection = TrackIdCollection::new();

    for playlist_id in playlist_ids {
        let track_ids = playlist::walk(transport, playlist_id).await?;

        let mut added = 0;
        for id in track_ids {
            if collection.insert(id) {
                added += 1;
            }
        }

        info!(
            "Playlist {}: added {} tracks, {} total",
            playlist_id,
            added,
            collection.len()
        );

        if collection.reached(target) {
            break;
        }
    }

    Ok(collection)
}

/// Runs [`accumulate`] and writes the collected identifiers to `output`.
///
/// The file is only written once every requested playlist was walked
/// successfully, so a failed run leaves `output` untouched.
pub async fn collect_to_file<T: CatalogTransport>(
    transport: &T,
    playlist_ids: &[String],
    target: Option<usize>,
    output: &Path,
) -> Result<TrackIdCollection> {
    let collection = accumulate(transport, playlist_ids, target).await?;
    utils::save_id_file(output, collection.ids()).await?;
    Ok(collection)
}
