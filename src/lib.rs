mod config;
mod controller;
mod error;
mod fetcher;
mod filter;
mod record;
mod sequencer;
mod sink;
mod store;

pub use config::{
    CatalogConfig, DEFAULT_API_BASE, DEFAULT_API_VERSION, DEFAULT_PAGE_SIZE, DEFAULT_RESOURCE,
};
pub use controller::{CatalogController, PageOutcome, Trigger, TriggerOutcome};
pub use error::{CatalogError, FetchError, Result};
#[cfg(feature = "http")]
pub use fetcher::HttpPageFetcher;
pub use fetcher::{InMemoryPageFetcher, PageFetcher, PageRequest};
pub use filter::{compute_hidden, Visibility};
pub use record::{Record, RecordAttributes, RecordId};
pub use sequencer::{FetchState, Sequencer};
pub use sink::{card_line, LogSink, RecordingSink, RenderSink, SinkEvent};
pub use store::{AppendedPage, CatalogStore};

// Re-export so implementors of `PageFetcher` don't need their own dependency.
pub use async_trait::async_trait;
