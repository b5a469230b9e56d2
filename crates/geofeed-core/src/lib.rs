//! geofeed-core: normalisation, filtering and highlight state for geofeed.
//!
//! This crate holds the pipeline layers plus the shared types used across the
//! workspace.
//!
//! # Architecture
//!
//! ```text
//! raw records ──► Normalizer (+ Jitter) ──► Catalog ──► filter ──► list view
//!                                              │
//!                                              └──► HighlightController ──► map view
//! ```
//!
//! Everything here is synchronous and single-writer; ingestion and session
//! ownership live in `geofeed-feeds` and `geofeed-view`.

pub mod config;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod jitter;
pub mod normalizer;
pub mod palette;
pub mod types;

pub use error::NormalizeError;
pub use filter::filter;
pub use highlight::HighlightController;
pub use jitter::JitterAssigner;
pub use normalizer::Normalizer;
pub use types::{Bounds, Catalog, FeedItem, FilterCriteria, LatLng, DEFAULT_TIME_RANGE_HOURS};
