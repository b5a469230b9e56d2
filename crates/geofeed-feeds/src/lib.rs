//! geofeed-feeds: feed source adapters and one-shot ingestion for geofeed.
//!
//! A [`FeedSource`] delivers the raw snapshot as loosely-typed JSON records.
//! [`ingest`] normalises them into a [`Catalog`](geofeed_core::Catalog) under
//! an explicit [`IngestPolicy`], and [`IngestGate`] makes sure that happens at
//! most once per session.

pub mod error;
pub mod gate;
pub mod ingest;
pub mod source;

pub use error::{FeedError, IngestError};
pub use gate::IngestGate;
pub use ingest::{ingest, IngestPolicy, IngestReport};
pub use source::{FeedSource, JsonFileSource, StaticSource};
