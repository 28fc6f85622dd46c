use std::collections::hash_map::Entry;

use serde_json::Value;

use crate::{error::Result, management::EntityCache, spotify::CatalogTransport, types::EntityKind};

/// Looks up single tracks and artists, memoizing every record it fetches.
///
/// The fetcher owns its [`EntityCache`], so a fresh fetcher starts with an
/// empty cache and every lookup made through the same fetcher shares it.
pub struct EntityFetcher<T: CatalogTransport> {
    transport: T,
    cache: EntityCache,
}

impl<T: CatalogTransport> EntityFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_cache(transport, EntityCache::new())
    }

    pub fn with_cache(transport: T, cache: EntityCache) -> Self {
        Self { transport, cache }
    }

    /// Returns the record for `id`, fetching it only on a cache miss.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::CatalogError::Remote`] when the lookup answers with
    /// a non-success status. Nothing is cached in that case.
    pub async fn fetch(&mut self, kind: EntityKind, id: &str) -> Result<&Value> {
        let Self { transport, cache } = self;
        match cache.entry(kind, id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let url = kind.url(transport.api_url(), id);
                let record = transport.get_json(&url).await?;
                Ok(entry.insert(record))
            }
        }
    }

    pub async fn track(&mut self, id: &str) -> Result<&Value> {
        self.fetch(EntityKind::Track, id).await
    }

    pub async fn artist(&mut self, id: &str) -> Result<&Value> {
        self.fetch(EntityKind::Artist, id).await
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }
}
