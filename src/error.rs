use thiserror::Error;

/// Result alias used across the catalog.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failure reported by a [`PageFetcher`](crate::PageFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
    /// The upstream answered with a non-success status code.
    #[error("upstream returned status {0}")]
    Status(u16),
    /// The response body could not be decoded into records.
    #[error("malformed page payload: {0}")]
    Decode(String),
    /// The fetcher is not able to serve the page at all.
    #[error("page unavailable: {0}")]
    Unavailable(String),
}

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The page could not be fetched; store state is untouched.
    #[error("page fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// A page was committed for a cursor other than the current one.
    #[error("page {received} committed out of order (expected page {expected})")]
    OutOfOrder { expected: u32, received: u32 },
    /// A page was completed without a matching page request in flight.
    #[error("no page request in flight for page {page}")]
    NoPendingRequest { page: u32 },
    /// The page cursor cannot advance any further.
    #[error("page cursor exhausted at {cursor}")]
    CursorOverflow { cursor: u32 },
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// Whether this error came from the fetch boundary rather than from the store.
    pub fn is_fetch(&self) -> bool {
        matches!(self, CatalogError::Fetch(_))
    }
}
