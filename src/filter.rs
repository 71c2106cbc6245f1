//! Filter Engine - decides which records a name query hides.
//!
//! Filtering is presentation only. It reads a snapshot of the accumulated
//! records, keeps nothing between calls and never touches the store.

use std::collections::HashSet;

use crate::record::{Record, RecordId};

/// Hide/show decision for the whole accumulated collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    /// Ids of records whose name does not contain the query.
    pub hidden: HashSet<RecordId>,
    /// Every record is hidden: nothing matched, show a "no results" indicator.
    pub all_hidden: bool,
    /// Paging is only offered while no query is active.
    pub paging_enabled: bool,
}

impl Visibility {
    pub fn is_visible(&self, id: &RecordId) -> bool {
        !self.hidden.contains(id)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

/// Compute the hidden set for `query` over `records`.
///
/// Matching is a case-insensitive substring test on the record name. An empty
/// query hides nothing. `all_hidden` is derived from the hidden count equalling
/// the record count, so an empty collection reports it as well.
pub fn compute_hidden(records: &[Record], query: &str) -> Visibility {
    let query = query.to_lowercase();

    let hidden: HashSet<RecordId> = records
        .iter()
        .filter(|record| !record.matches(&query))
        .map(|record| record.id.clone())
        .collect();

    Visibility {
        all_hidden: hidden.len() == records.len(),
        paging_enabled: query.is_empty(),
        hidden,
    }
}
