//! Ordered record collection
//!
//! Index order always equals id order. The collection is built once and
//! shared read-only between requests.

use crate::error::{Error, Result};
use crate::types::{Project, RecordId};
use std::collections::HashMap;
use std::ops::Range;

/// Ordered, immutable sequence of projects
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Project>,
    index: HashMap<RecordId, usize>,
}

impl Collection {
    /// Build a collection, checking that ids are strictly increasing
    pub fn new(records: Vec<Project>) -> Result<Self> {
        for pair in records.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(Error::config(format!(
                    "Record ids must be strictly increasing: {} follows {}",
                    pair[1].id, pair[0].id
                )));
            }
        }
        Ok(Self::from_ordered(records))
    }

    /// Build from records already known to be in id order
    fn from_ordered(records: Vec<Project>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id, i))
            .collect();
        Self { records, index }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the index of a record by id
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Slice by index range, clamped to the collection bounds
    ///
    /// An inverted range yields an empty slice.
    pub fn slice(&self, range: Range<usize>) -> &[Project] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// All records in order
    pub fn records(&self) -> &[Project] {
        &self.records
    }

    /// Records belonging to one conversation relay, order preserved
    pub fn scoped(&self, relay_id: &str) -> Self {
        let records = self
            .records
            .iter()
            .filter(|p| p.conversation_relay_id.as_deref() == Some(relay_id))
            .cloned()
            .collect();
        Self::from_ordered(records)
    }
}
