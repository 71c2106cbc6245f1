use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::fetcher::{PageFetcher, PageRequest};
use crate::record::{Record, RecordId};

/// Accumulated catalog state: every record fetched so far plus the next page cursor.
///
/// Records are append-only. Once committed a record is never removed, reordered
/// or mutated; filtering happens on top of this collection, not inside it.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    accumulated: Vec<Record>,
    ids: HashSet<RecordId>,
    cursor: u32,
    page_size: u32,
}

impl CatalogStore {
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be positive".into(),
            ));
        }
        Ok(Self {
            accumulated: Vec::new(),
            ids: HashSet::new(),
            cursor: 1,
            page_size,
        })
    }

    /// Next page index to request.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    /// Every record in arrival order.
    pub fn all_records(&self) -> &[Record] {
        &self.accumulated
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn next_request(&self) -> PageRequest {
        PageRequest::new(self.cursor, self.page_size)
    }

    /// Commit a fetched page and advance the cursor by one.
    ///
    /// Returns exactly the records this page added. An empty page still
    /// advances the cursor. Records whose id is already present (or repeats
    /// within the page) are skipped and reported; the rest of the page is
    /// committed so a misbehaving upstream cannot stall paging. A page that
    /// was not requested at the current cursor is rejected and leaves the
    /// store untouched.
    pub fn append_page(
        &mut self,
        request: PageRequest,
        records: Vec<Record>,
    ) -> Result<AppendedPage<'_>> {
        if request.page != self.cursor {
            return Err(CatalogError::OutOfOrder {
                expected: self.cursor,
                received: request.page,
            });
        }
        let next = self
            .cursor
            .checked_add(1)
            .ok_or(CatalogError::CursorOverflow { cursor: self.cursor })?;

        let start = self.accumulated.len();
        let mut skipped = Vec::new();
        for record in records {
            if self.ids.insert(record.id.clone()) {
                self.accumulated.push(record);
            } else {
                skipped.push(record.id);
            }
        }
        self.cursor = next;

        Ok(AppendedPage {
            records: &self.accumulated[start..],
            skipped,
        })
    }

    /// Fetch the page at the cursor and commit it.
    ///
    /// On fetch failure nothing changes, so the same page can be requested again.
    pub async fn request_next_page<F>(&mut self, fetcher: &F) -> Result<AppendedPage<'_>>
    where
        F: PageFetcher + ?Sized,
    {
        let request = self.next_request();
        let records = fetcher.fetch_page(request).await?;
        self.append_page(request, records)
    }
}

/// Result of committing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedPage<'a> {
    /// Records this page added, in arrival order.
    pub records: &'a [Record],
    /// Ids dropped because they were already accumulated.
    pub skipped: Vec<RecordId>,
}
