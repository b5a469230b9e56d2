//! Feed sources: where the raw snapshot comes from.
//!
//! The network transport is owned by the embedding application; it plugs in
//! by implementing [`FeedSource`]. Two sources ship here: a JSON file on disk
//! and an in-memory record list.

use crate::error::FeedError;
use serde_json::Value;
use std::path::PathBuf;

/// Trait implemented by each raw feed source.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the whole snapshot as an array of raw records.
    async fn fetch(&self) -> Result<Vec<Value>, FeedError>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

/// Decode a snapshot payload. The top level must be a JSON array.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Value>, FeedError> {
    match serde_json::from_slice(bytes)? {
        Value::Array(records) => Ok(records),
        _ => Err(FeedError::NotAnArray),
    }
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Reads the snapshot from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait::async_trait]
impl FeedSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<Value>, FeedError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| FeedError::Io {
            path: self.name.clone(),
            source,
        })?;
        parse_records(&bytes)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// Serves a fixed record list. Used by tests and by embedders that already
/// hold the decoded payload.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Value>,
}

impl StaticSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    pub fn from_json(text: &str) -> Result<Self, FeedError> {
        parse_records(text.as_bytes()).map(Self::new)
    }
}

#[async_trait::async_trait]
impl FeedSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Value>, FeedError> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
