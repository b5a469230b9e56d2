//! geofeed: geotagged event feed for map/list views.
//!
//! Re-exports the workspace layers so integration tests, benches and the
//! headless binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! FeedSource ──► IngestGate ──► Catalog ──► filter ──► ListProps
//!  (feeds)        (feeds)        (core)      (core)      (view)
//!                                   │
//!                                   └──► HighlightController ──► MapProps
//! ```
//!
//! Everything downstream of the one asynchronous fetch runs synchronously on
//! the caller's task, owned by a single [`Session`].

pub use geofeed_core::{
    config, filter, highlight, jitter, normalizer, palette, Bounds, Catalog, FeedItem,
    FilterCriteria, HighlightController, JitterAssigner, LatLng, NormalizeError, Normalizer,
    DEFAULT_TIME_RANGE_HOURS,
};
pub use geofeed_feeds::{
    ingest, FeedError, FeedSource, IngestError, IngestGate, IngestPolicy, IngestReport,
    JsonFileSource, StaticSource,
};
pub use geofeed_view::{geojson, ListProps, MapProps, Session, ViewEvent};
