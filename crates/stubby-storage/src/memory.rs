use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use stubby_core::{ShortCode, StorageError, UrlEntry, UrlStore};
use tracing::trace;

/// In-memory implementation of the [`UrlStore`] trait using DashMap.
///
/// DashMap shards its locks, so operations on different codes rarely contend,
/// while every operation on a single code runs under that code's shard lock.
/// Click increments mutate the entry through the write guard and are never
/// lost under concurrent redirects.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    entries: DashMap<ShortCode, UrlEntry>,
}

impl InMemoryUrlStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl UrlStore for InMemoryUrlStore {
    fn add(&self, code: &ShortCode, original_url: &str) {
        trace!(code = %code, "adding entry");
        self.entries
            .insert(code.clone(), UrlEntry::new(code.clone(), original_url));
    }

    fn try_add(&self, code: &ShortCode, original_url: &str) -> Result<UrlEntry, StorageError> {
        // The entry guard holds the shard lock across the check and the insert.
        match self.entries.entry(code.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(vacant) => {
                let entry = UrlEntry::new(code.clone(), original_url);
                vacant.insert(entry.clone());
                trace!(code = %code, "inserted entry");
                Ok(entry)
            }
        }
    }

    fn lookup(&self, code: &ShortCode) -> Option<UrlEntry> {
        self.entries.get(code).map(|entry| entry.value().clone())
    }

    fn increment_clicks(&self, code: &ShortCode) -> bool {
        let Some(mut entry) = self.entries.get_mut(code) else {
            return false;
        };

        entry.clicks += 1;
        true
    }

    fn is_code_taken(&self, code: &ShortCode) -> bool {
        self.entries.contains_key(code)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
