//! HTTP page fetcher for the card API.
//!
//! Requires the `http` feature. Issues `GET {endpoint}?page=N&pageSize=M` and
//! reads the `cards` array out of the JSON body.

use async_trait::async_trait;
use serde::Deserialize;

use super::{PageFetcher, PageRequest};
use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::record::Record;

/// Response envelope of the card API.
#[derive(Deserialize)]
struct CardsPage {
    #[serde(default)]
    cards: Vec<Record>,
}

#[derive(Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPageFetcher {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing client (connection pool, proxy settings, timeouts).
    pub fn with_client(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Record>, FetchError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            page = request.page,
            page_size = request.page_size,
            "fetching page"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", request.page), ("pageSize", request.page_size)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: CardsPage = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(body.cards)
    }
}
