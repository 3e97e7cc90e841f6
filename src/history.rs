//! In-memory optimization history — bounded, most-recent-first.
//!
//! One entry per successful optimize call. Entries are immutable once
//! recorded and live only for the session; the only eviction is the size
//! bound. Single logical writer (the submit path) and reader (the UI),
//! so no locking.

use crate::llm::OptimizedSegment;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How many past optimizations are kept by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// One past optimization: the verbatim input and its full result.
///
/// `id` is the RFC 3339 creation timestamp — identity and recency key
/// in one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub original_prompt: String,
    pub optimized_prompt: Vec<OptimizedSegment>,
}

impl HistoryEntry {
    pub fn new(original_prompt: String, optimized_prompt: Vec<OptimizedSegment>) -> Self {
        Self {
            id: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            original_prompt,
            optimized_prompt,
        }
    }
}

/// Bounded most-recent-first list of past optimizations.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl HistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Prepend `entry` and drop anything beyond the bound. Always succeeds.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        if self.entries.len() > self.limit {
            self.entries.truncate(self.limit);
            log::debug!("[HISTORY] Evicted oldest entries beyond limit {}", self.limit);
        }
    }

    /// Most-recent-first snapshot.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up an entry by its id.
    pub fn select(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::OptimizedSegment;

    fn entry(id: &str, prompt: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            original_prompt: prompt.to_string(),
            optimized_prompt: vec![OptimizedSegment {
                segment: format!("{} (optimized)", prompt),
                is_changed: true,
                reason: "Rewritten for clarity".to_string(),
            }],
        }
    }

    #[test]
    fn record_prepends_most_recent_first() {
        let mut store = HistoryStore::new(10);
        store.record(entry("t1", "first"));
        store.record(entry("t2", "second"));

        let listed = store.list();
        assert_eq!(listed[0].original_prompt, "second");
        assert_eq!(listed[1].original_prompt, "first");
    }

    #[test]
    fn bound_evicts_the_oldest() {
        let mut store = HistoryStore::new(50);
        for i in 0..51 {
            store.record(entry(&format!("t{:03}", i), &format!("prompt {}", i)));
        }

        assert_eq!(store.len(), 50);
        // Most recently recorded first...
        assert_eq!(store.list()[0].id, "t050");
        // ...and the very first record is gone.
        assert!(store.select("t000").is_none());
        assert!(store.select("t001").is_some());
    }

    #[test]
    fn select_finds_by_id() {
        let mut store = HistoryStore::new(10);
        store.record(entry("t1", "alpha"));
        store.record(entry("t2", "beta"));

        let found = store.select("t1").unwrap();
        assert_eq!(found.original_prompt, "alpha");
        assert!(store.select("missing").is_none());
    }

    #[test]
    fn entry_ids_are_display_sortable_timestamps() {
        let a = HistoryEntry::new("one".to_string(), vec![]);
        let b = HistoryEntry::new("two".to_string(), vec![]);
        // RFC 3339 UTC timestamps sort lexicographically by creation time.
        assert!(a.id <= b.id);
        assert!(chrono::DateTime::parse_from_rfc3339(&a.id).is_ok());
    }
}
