use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.pokemontcg.io";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_RESOURCE: &str = "cards";
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Where the catalog pulls pages from and how large they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base: String,
    pub api_version: String,
    pub resource: String,
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Defaults overlaid with `CATALOG_API_BASE`, `CATALOG_API_VERSION`,
    /// `CATALOG_RESOURCE` and `CATALOG_PAGE_SIZE`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(base) = env::var("CATALOG_API_BASE") {
            config.api_base = base;
        }
        if let Ok(version) = env::var("CATALOG_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(resource) = env::var("CATALOG_RESOURCE") {
            config.resource = resource;
        }
        if let Ok(size) = env::var("CATALOG_PAGE_SIZE") {
            config.page_size = size.trim().parse().map_err(|_| {
                CatalogError::InvalidConfig(format!("CATALOG_PAGE_SIZE is not a number: {size}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be positive".into(),
            ));
        }
        if self.api_base.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("api_base is empty".into()));
        }
        Ok(())
    }

    /// `{api_base}/{api_version}/{resource}`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.api_version,
            self.resource
        )
    }
}
