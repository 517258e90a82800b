//! # Record Store
//!
//! Ordered collection of viewing records plus the id counter. Records
//! stay in insertion order; the ranked view is computed at render time
//! by [`crate::core::report`]. Ids are never reused — the counter only
//! restarts on [`Store::clear`].

use std::fmt;

use log::debug;

use crate::core::record::{Record, RecordDraft};

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Add was attempted with an empty (or whitespace-only) name.
    EmptyName,
    /// The given id is not in the store.
    NotFound(u32),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyName => write!(f, "apartment name must not be empty"),
            StoreError::NotFound(id) => write!(f, "no apartment with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub struct Store {
    records: Vec<Record>,
    next_id: u32,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate the draft, assign the next id, compute the score, stamp
    /// the creation time, and append. On error nothing is mutated.
    pub fn add(&mut self, draft: RecordDraft) -> Result<&Record, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let record = draft.into_record(self.next_id);
        debug!(
            "Adding record #{}: {} (score {:.1})",
            record.id, record.name, record.score
        );
        self.next_id += 1;
        let idx = self.records.len();
        self.records.push(record);
        Ok(&self.records[idx])
    }

    /// Remove and return the record with the given id. On error nothing
    /// is mutated; the id is not released for reuse either way.
    pub fn remove(&mut self, id: u32) -> Result<Record, StoreError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(idx))
    }

    /// Drop every record and restart the id counter at 1.
    pub fn clear(&mut self) {
        debug!("Clearing {} records", self.records.len());
        self.records.clear();
        self.next_id = 1;
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_draft;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = Store::new();
        let a = store.add(test_draft("A")).map(|r| r.id);
        assert_eq!(a, Ok(1));
        let b = store.add(test_draft("B")).map(|r| r.id);
        assert_eq!(b, Ok(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_computes_score_at_creation() {
        let mut store = Store::new();
        let draft = RecordDraft {
            sunlight: 8,
            noise: 2,
            floor: 2,
            ..test_draft("A")
        };
        let record = store.add(draft).expect("valid draft");
        assert_eq!(record.score, 6.0);
    }

    #[test]
    fn test_add_empty_name_rejected_without_mutation() {
        let mut store = Store::new();
        assert_eq!(store.add(test_draft("")), Err(StoreError::EmptyName));
        assert_eq!(store.add(test_draft("   ")), Err(StoreError::EmptyName));
        assert!(store.is_empty());

        // The failed adds must not have burned ids.
        let id = store.add(test_draft("A")).map(|r| r.id);
        assert_eq!(id, Ok(1));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = Store::new();
        store.add(test_draft("A")).expect("valid draft");
        store.add(test_draft("B")).expect("valid draft");

        let removed = store.remove(2).expect("id 2 exists");
        assert_eq!(removed.name, "B");

        let id = store.add(test_draft("C")).map(|r| r.id);
        assert_eq!(id, Ok(3));
    }

    #[test]
    fn test_remove_missing_id_leaves_store_unchanged() {
        let mut store = Store::new();
        store.add(test_draft("A")).expect("valid draft");
        assert_eq!(store.remove(99), Err(StoreError::NotFound(99)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_resets_id_counter() {
        let mut store = Store::new();
        store.add(test_draft("A")).expect("valid draft");
        store.add(test_draft("B")).expect("valid draft");
        store.clear();
        assert!(store.is_empty());

        let id = store.add(test_draft("C")).map(|r| r.id);
        assert_eq!(id, Ok(1));
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut store = Store::new();
        for name in ["C", "A", "B"] {
            store.add(test_draft(name)).expect("valid draft");
        }
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
