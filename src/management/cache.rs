use std::collections::{HashMap, hash_map::Entry};

use serde_json::Value;

use crate::types::EntityKind;

/// Run-lifetime memo of fetched entity records.
///
/// One map per [`EntityKind`], keyed by identifier. Records are never
/// evicted or refreshed; a remote record is assumed not to change during a
/// run.
#[derive(Debug, Default)]
pub struct EntityCache {
    tracks: HashMap<String, Value>,
    artists: HashMap<String, Value>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.records(kind).contains_key(id)
    }

    pub fn entry(&mut self, kind: EntityKind, id: &str) -> Entry<'_, String, Value> {
        self.records_mut(kind).entry(id.to_string())
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.records(kind).len()
    }

    fn records(&self, kind: EntityKind) -> &HashMap<String, Value> {
        match kind {
            EntityKind::Track => &self.tracks,
            EntityKind::Artist => &self.artists,
        }
    }

    fn records_mut(&mut self, kind: EntityKind) -> &mut HashMap<String, Value> {
        match kind {
            EntityKind::Track => &mut self.tracks,
            EntityKind::Artist => &mut self.artists,
        }
    }
}
