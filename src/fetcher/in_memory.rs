//! InMemoryPageFetcher - serves pages out of memory for testing and offline use.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{PageFetcher, PageRequest};
use crate::error::FetchError;
use crate::record::Record;

enum Source {
    /// One flat list, sliced by the requested page size.
    Records(Vec<Record>),
    /// Explicit pages; page N is `pages[N - 1]`, the request's page size is ignored.
    Pages(Vec<Vec<Record>>),
}

/// In-memory page fetcher.
///
/// Pages past the end come back empty. Failures queued with
/// [`fail_next`](Self::fail_next) are returned before any page is served.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryPageFetcher {
    source: Arc<Source>,
    failures: Arc<Mutex<VecDeque<FetchError>>>,
    requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl InMemoryPageFetcher {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::with_source(Source::Records(records))
    }

    pub fn from_pages(pages: Vec<Vec<Record>>) -> Self {
        Self::with_source(Source::Pages(pages))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source: Arc::new(source),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the next fetch fail with `error`. Calls stack in FIFO order.
    pub fn fail_next(&self, error: FetchError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push_back(error);
        }
    }

    /// Every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn page(&self, request: PageRequest) -> Vec<Record> {
        let index = request.page.saturating_sub(1) as usize;
        match self.source.as_ref() {
            Source::Pages(pages) => pages.get(index).cloned().unwrap_or_default(),
            Source::Records(records) => {
                let size = request.page_size as usize;
                let start = index.saturating_mul(size).min(records.len());
                let end = start.saturating_add(size).min(records.len());
                records[start..end].to_vec()
            }
        }
    }
}

#[async_trait]
impl PageFetcher for InMemoryPageFetcher {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Record>, FetchError> {
        self.requests
            .lock()
            .map_err(|_| FetchError::Unavailable("request log poisoned".into()))?
            .push(request);

        let failure = self
            .failures
            .lock()
            .map_err(|_| FetchError::Unavailable("failure queue poisoned".into()))?
            .pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        if request.page == 0 {
            return Err(FetchError::Unavailable("pages are 1-based".into()));
        }

        Ok(self.page(request))
    }
}
