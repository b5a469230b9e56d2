use geofeed_core::NormalizeError;
use thiserror::Error;

/// Failure to retrieve or decode the raw snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("reading feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed payload is not a JSON array")]
    NotAnArray,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// A record failed normalisation under [`IngestPolicy::Abort`](crate::IngestPolicy::Abort).
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: NormalizeError,
    },
}
