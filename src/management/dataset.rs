use std::path::Path;

use crate::{
    error::{CatalogError, Result},
    fields,
    spotify::{CatalogTransport, entities::EntityFetcher},
    types::DatasetRow,
};

/// Builds dataset rows for tracks, sharing one entity cache across them.
///
/// Tracks by the same artist only cost one artist lookup, and a track listed
/// twice is only fetched once.
pub struct DatasetBuilder<T: CatalogTransport> {
    fetcher: EntityFetcher<T>,
    rows: Vec<DatasetRow>,
}

impl<T: CatalogTransport> DatasetBuilder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            fetcher: EntityFetcher::new(transport),
            rows: Vec::new(),
        }
    }

    /// Fetches a track and its first artist and appends their row.
    pub async fn add_track(&mut self, track_id: &str) -> Result<&DatasetRow> {
        let track = self.fetcher.track(track_id).await?;
        let artist = fields::artists(track)?
            .into_iter()
            .next()
            .ok_or(CatalogError::MissingField { field: "artists" })?;

        let name = fields::name(track)?;
        let popularity = fields::popularity(track)?;
        let duration_ms = fields::duration_ms(track)?;
        let explicit = fields::explicit(track)?;
        let release_date = fields::release_date(track)?;
        let available_markets_count = fields::available_markets_count(track)?;

        let artist_record = self.fetcher.artist(&artist.id).await?;
        let row = DatasetRow {
            track_id: track_id.to_string(),
            name,
            artist_id: artist.id,
            artist_name: artist.name,
            popularity,
            duration_ms,
            explicit,
            release_date,
            available_markets_count,
            artist_genres: fields::genres(artist_record)?,
            artist_popularity: fields::popularity(artist_record)?,
            artist_followers: fields::followers_total(artist_record)?,
        };

        self.rows.push(row);
        Ok(&self.rows[self.rows.len() - 1])
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn fetcher(&self) -> &EntityFetcher<T> {
        &self.fetcher
    }

    /// Writes all rows as a pretty-printed JSON array.
    pub async fn persist(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&self.rows)?;
        async_fs::write(path, json).await?;
        Ok(())
    }
}
