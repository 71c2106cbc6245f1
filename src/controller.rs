//! Catalog Controller - wires triggers, the store, the fetcher and the sink together.
//!
//! ## Flow
//!
//! - `PageRequested`: `Idle -> Fetching`, fetch the page at the cursor, commit it,
//!   hand only the new records to the sink, back to `Idle`.
//! - `QueryChanged(q)`: recompute the hidden set over everything accumulated and
//!   hand it to the sink.
//!
//! The fetch can also be driven by the caller's own event loop through
//! [`begin_page_request`](CatalogController::begin_page_request) and
//! [`complete_page_request`](CatalogController::complete_page_request).
//!
//! ## Example
//!
//! ```ignore
//! use card_catalog::{CatalogController, InMemoryPageFetcher, LogSink, Trigger};
//!
//! let mut catalog = CatalogController::new(fetcher, LogSink::new(), 4)?;
//! catalog.start().await?;
//! catalog.handle(Trigger::PageRequested).await?;
//! catalog.handle(Trigger::QueryChanged("char".into())).await?;
//! ```

use crate::error::{CatalogError, FetchError, Result};
use crate::fetcher::{PageFetcher, PageRequest};
use crate::filter::{compute_hidden, Visibility};
use crate::record::{Record, RecordId};
use crate::sequencer::{FetchState, Sequencer};
use crate::sink::RenderSink;
use crate::store::CatalogStore;

/// External events that drive the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    PageRequested,
    QueryChanged(String),
}

/// What a page request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was committed; `count` records were appended (possibly zero).
    /// `skipped` holds ids dropped because they were already accumulated.
    Appended {
        page: u32,
        count: usize,
        skipped: Vec<RecordId>,
    },
    /// A request was already in flight, so this one was dropped.
    Ignored,
}

/// What handling a [`Trigger`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Page(PageOutcome),
    Filtered(Visibility),
}

pub struct CatalogController<F, S> {
    store: CatalogStore,
    fetcher: F,
    sink: S,
    sequencer: Sequencer,
    exhausted: bool,
}

impl<F, S> CatalogController<F, S>
where
    F: PageFetcher,
    S: RenderSink,
{
    pub fn new(fetcher: F, sink: S, page_size: u32) -> Result<Self> {
        Ok(Self {
            store: CatalogStore::new(page_size)?,
            fetcher,
            sink,
            sequencer: Sequencer::new(),
            exhausted: false,
        })
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn state(&self) -> FetchState {
        self.sequencer.state()
    }

    pub fn is_busy(&self) -> bool {
        self.sequencer.is_busy()
    }

    /// The last committed page came back empty. Advisory only: further requests still go out.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Initial automatic load of the first page.
    pub async fn start(&mut self) -> Result<PageOutcome> {
        self.page_requested().await
    }

    pub async fn handle(&mut self, trigger: Trigger) -> Result<TriggerOutcome> {
        match trigger {
            Trigger::PageRequested => Ok(TriggerOutcome::Page(self.page_requested().await?)),
            Trigger::QueryChanged(query) => Ok(TriggerOutcome::Filtered(self.query_changed(&query))),
        }
    }

    /// Fetch and commit the page at the cursor.
    pub async fn page_requested(&mut self) -> Result<PageOutcome> {
        let Some(request) = self.begin_page_request() else {
            return Ok(PageOutcome::Ignored);
        };
        let result = self.fetcher.fetch_page(request).await;
        self.complete_page_request(request, result)
    }

    /// `Idle -> Fetching`. Returns the request to fetch, or `None` if one is already pending.
    pub fn begin_page_request(&mut self) -> Option<PageRequest> {
        if !self.sequencer.try_begin() {
            tracing::warn!(cursor = self.store.cursor(), "page request ignored, fetch in flight");
            return None;
        }
        self.sink.on_busy_changed(true);

        let request = self.store.next_request();
        tracing::debug!(page = request.page, page_size = request.page_size, "page requested");
        Some(request)
    }

    /// `Fetching -> Idle`, committing `result` if it is a page.
    ///
    /// Always returns to `Idle` so a failed page can be requested again.
    /// A completion with no request in flight is rejected and changes nothing.
    pub fn complete_page_request(
        &mut self,
        request: PageRequest,
        result: std::result::Result<Vec<Record>, FetchError>,
    ) -> Result<PageOutcome> {
        if !self.sequencer.is_busy() {
            tracing::warn!(page = request.page, "page completed without a pending request");
            return Err(CatalogError::NoPendingRequest { page: request.page });
        }
        self.sequencer.finish();
        self.sink.on_busy_changed(false);

        let records = result.inspect_err(|err| {
            tracing::warn!(page = request.page, error = %err, "page fetch failed");
        })?;

        let added = self.store.append_page(request, records).inspect_err(|err| {
            tracing::warn!(page = request.page, error = %err, "page rejected");
        })?;

        let count = added.records.len();
        self.sink.on_page_appended(added.records);
        let skipped = added.skipped;
        self.exhausted = count == 0 && skipped.is_empty();
        if !skipped.is_empty() {
            tracing::warn!(
                page = request.page,
                skipped = ?skipped,
                "duplicate record ids skipped"
            );
        }

        tracing::info!(
            page = request.page,
            count,
            total = self.store.len(),
            "page appended"
        );
        Ok(PageOutcome::Appended {
            page: request.page,
            count,
            skipped,
        })
    }

    /// Recompute visibility for `query` over everything accumulated so far.
    pub fn query_changed(&mut self, query: &str) -> Visibility {
        let visibility = compute_hidden(self.store.all_records(), query);
        tracing::debug!(
            query,
            hidden = visibility.hidden_count(),
            all_hidden = visibility.all_hidden,
            "filter applied"
        );
        self.sink.on_visibility_update(&visibility);
        visibility
    }
}
