use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog record. The only key used for identity and visibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

/// Descriptive card fields. Opaque to the catalog beyond present/absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttributes {
    #[serde(default)]
    pub supertype: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// One catalog item as delivered by the upstream card API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: RecordAttributes,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            name: name.into(),
            attributes: RecordAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: RecordAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Case-insensitive substring match against the display name.
    /// `normalized_query` must already be lower-cased.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.name.to_lowercase().contains(normalized_query)
    }
}
