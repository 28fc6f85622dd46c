use std::collections::HashSet;

use crate::{error::Result, spotify::CatalogTransport, types::PlaylistPage};

/// Page size requested for the first page of a playlist's track listing.
pub const PLAYLIST_PAGE_LIMIT: u32 = 100;

/// Lazy sequence over the pages of one playlist's track listing.
///
/// The first request carries the page size; every following request uses the
/// `next` URL of the previous page verbatim. The sequence ends after the page
/// whose `next` is `null`. Walking again means creating a new `PlaylistPages`.
pub struct PlaylistPages<'a, T: CatalogTransport> {
    transport: &'a T,
    next_url: Option<String>,
}

impl<'a, T: CatalogTransport> PlaylistPages<'a, T> {
    pub fn new(transport: &'a T, playlist_id: &str) -> Self {
        let first_url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}",
            uri = transport.api_url(),
            id = playlist_id,
            limit = PLAYLIST_PAGE_LIMIT
        );

        Self {
            transport,
            next_url: Some(first_url),
        }
    }

    /// Fetches the next page, or `None` once the terminal page was returned.
    pub async fn next_page(&mut self) -> Result<Option<PlaylistPage>> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        let json = self.transport.get_json(&url).await?;
        let page: PlaylistPage = serde_json::from_value(json)?;
        self.next_url = page.next.clone();

        Ok(Some(page))
    }
}

/// Collects the distinct catalog track identifiers of a playlist.
///
/// Walks every page of the playlist's track listing. Items without a track,
/// local files and tracks without an identifier are skipped.
///
/// # Arguments
///
/// * `transport` - Authenticated transport used for every page request
/// * `playlist_id` - Spotify ID of the playlist to walk
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(HashSet<String>)` - Distinct track identifiers, in no particular order
/// - `Err(CatalogError)` - The first failing page request; identifiers from
///   earlier pages are discarded
///
/// # Example
///
/// ```
/// let ids = walk(&transport, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("Playlist holds {} tracks", ids.len());
/// ```
pub async fn walk<T: CatalogTransport>(transport: &T, playlist_id: &str) -> Result<HashSet<String>> {
    let mut pages = PlaylistPages::new(transport, playlist_id);
    let mut track_ids = HashSet::new();

    while let Some(page) = pages.next_page().await? {
        track_ids.extend(page.track_ids().map(str::to_string));
    }

    Ok(track_ids)
}
