//! Page Fetcher - the boundary that turns a page index into records.
//!
//! The catalog never talks to the network itself. It hands a [`PageRequest`]
//! to a [`PageFetcher`] and commits whatever comes back. Fetchers carry no
//! cache and no retry policy.
//!
//! ## Example
//!
//! ```ignore
//! use card_catalog::{CatalogConfig, HttpPageFetcher, PageFetcher, PageRequest};
//!
//! let fetcher = HttpPageFetcher::new(&CatalogConfig::default());
//! let cards = fetcher.fetch_page(PageRequest::new(1, 4)).await?;
//! ```

#[cfg(feature = "http")]
mod http;
mod in_memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::record::Record;

/// Which page to fetch and how many records a page holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

/// Produces the records of one page. An empty vector is a valid page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Record>, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<T> {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Record>, FetchError> {
        (**self).fetch_page(request).await
    }
}

#[cfg(feature = "http")]
pub use http::HttpPageFetcher;
pub use in_memory::InMemoryPageFetcher;
