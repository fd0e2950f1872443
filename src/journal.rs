use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::constants::{MAX_ENTRIES, STORAGE_KEY};
use crate::error::{JournalError, StorageError};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    /// Unix milliseconds.
    pub ts: i64,
    #[serde(default)]
    pub url: String,
    pub clip: String,
    #[serde(default)]
    pub prompt: String,
}

/// Clipped snippets, most recent first, capped at [`MAX_ENTRIES`].
pub struct Journal {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<Entry>,
}

impl Journal {
    /// Loads the journal. A missing, unreadable or malformed collection
    /// yields an empty journal.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read journal: {}", e);
                Vec::new()
            }
        };
        Self { store, entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends a clip and saves the whole collection. The entry is kept in
    /// memory even when saving fails; the error is returned for display.
    pub fn add(&mut self, url: &str, clip: &str, prompt: &str) -> Result<&Entry, JournalError> {
        let clip = clip.trim();
        if clip.is_empty() {
            return Err(JournalError::EmptyClip);
        }

        self.entries.insert(
            0,
            Entry {
                id: Uuid::new_v4(),
                ts: Utc::now().timestamp_millis(),
                url: url.trim().to_string(),
                clip: clip.to_string(),
                prompt: prompt.to_string(),
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        self.save()?;
        Ok(&self.entries[0])
    }

    fn save(&self) -> Result<(), StorageError> {
        save_entries(self.store.as_ref(), &self.entries)
    }
}

/// Keeps every well-formed entry; a bad element only costs itself.
fn parse_entries(raw: &str) -> Vec<Entry> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value::<Entry>(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping malformed journal entry {}: {}", i, e);
                    None
                }
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(e) => {
            warn!("Discarding unreadable journal: {}", e);
            Vec::new()
        }
    }
}

/// Writes at most the first [`MAX_ENTRIES`] entries as one JSON array.
pub fn save_entries(store: &dyn KeyValueStore, entries: &[Entry]) -> Result<(), StorageError> {
    let kept = &entries[..entries.len().min(MAX_ENTRIES)];
    store.set(STORAGE_KEY, &serde_json::to_string(kept)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn entry(n: i64) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            ts: 1_700_000_000_000 + n,
            url: if n % 2 == 0 { format!("https://example.com/{n}") } else { String::new() },
            clip: format!("clip {n}"),
            prompt: format!("prompt {n}"),
        }
    }

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let saved: Vec<Entry> = (0..5).map(entry).collect();
        save_entries(store.as_ref(), &saved).unwrap();

        let journal = Journal::load(Arc::clone(&store));
        assert_eq!(journal.entries(), saved.as_slice());
    }

    #[test]
    fn round_trip_truncates_to_most_recent() {
        let dir = TempDir::new().unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()).unwrap());
        let saved: Vec<Entry> = (0..75).map(entry).collect();
        save_entries(store.as_ref(), &saved).unwrap();

        let journal = Journal::load(store);
        assert_eq!(journal.len(), MAX_ENTRIES);
        assert_eq!(journal.entries(), &saved[..MAX_ENTRIES]);
    }

    #[test]
    fn add_prepends_and_persists() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut journal = Journal::load(Arc::clone(&store));
        journal.add("", "first", "p1").unwrap();
        journal.add("  https://example.com  ", "  second  ", "p2").unwrap();

        assert_eq!(journal.entries()[0].clip, "second");
        assert_eq!(journal.entries()[0].url, "https://example.com");
        assert_eq!(journal.entries()[1].clip, "first");

        let reloaded = Journal::load(store);
        assert_eq!(reloaded.entries(), journal.entries());
    }

    #[test]
    fn add_caps_collection() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut journal = Journal::load(store);
        for n in 0..(MAX_ENTRIES + 3) {
            journal.add("", &format!("clip {n}"), "").unwrap();
        }
        assert_eq!(journal.len(), MAX_ENTRIES);
        assert_eq!(journal.entries()[0].clip, format!("clip {}", MAX_ENTRIES + 2));
    }

    #[test]
    fn empty_clip_is_refused() {
        let mut journal = Journal::load(Arc::new(MemoryStore::new()));
        assert!(matches!(journal.add("https://x", "   ", ""), Err(JournalError::EmptyClip)));
        assert!(journal.is_empty());
    }

    #[test]
    fn malformed_storage_loads_empty() {
        for raw in ["not json", "{\"a\":1}", "[{\"nope\":true}]", "null"] {
            let store = MemoryStore::new();
            store.set(STORAGE_KEY, raw).unwrap();
            assert!(Journal::load(Arc::new(store)).is_empty(), "raw {raw:?}");
        }
    }

    #[test]
    fn bad_element_does_not_drop_its_neighbours() {
        let good = entry(4);
        let raw = serde_json::json!([
            &good,
            { "id": Uuid::new_v4(), "ts": 1, "url": null, "clip": "broken", "prompt": "" },
            "not an entry",
        ])
        .to_string();
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(STORAGE_KEY, &raw).unwrap();

        let mut journal = Journal::load(Arc::clone(&store));
        assert_eq!(journal.entries(), &[good.clone()]);

        journal.add("", "new clip", "p").unwrap();
        let reloaded = Journal::load(store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[0].clip, "new clip");
        assert_eq!(reloaded.entries()[1], good);
    }

    #[test]
    fn serializes_stable_field_names() {
        let json = serde_json::to_value(entry(2)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["id", "ts", "url", "clip", "prompt"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
