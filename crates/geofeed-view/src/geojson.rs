//! GeoJSON export: the point-feature shape the map widget renders.
//!
//! Coordinates are `[lng, lat]` per RFC 7946; the whole item is attached as
//! `properties`.

use geofeed_core::FeedItem;
use serde_json::{json, Value};

pub fn feature(item: &FeedItem) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [item.location.lng, item.location.lat],
        },
        "properties": item,
    })
}

pub fn feature_collection<'a>(items: impl IntoIterator<Item = &'a FeedItem>) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": items.into_iter().map(feature).collect::<Vec<_>>(),
    })
}
