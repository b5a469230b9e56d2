//! Test builders: ergonomic constructors for raw records and `FeedItem`s.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use geofeed::{Catalog, FeedItem, JitterAssigner, LatLng, Normalizer};
use serde_json::{json, Map, Value};

use super::fixtures::NOW;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for raw feed records as the transport delivers them.
///
/// # Example
///
/// ```rust
/// let raw = RawRecordBuilder::new("https://x/abc")
///     .time("2024-01-05T09:15:30Z")
///     .flat(34.0, 113.0)
///     .category("求救_被困")
///     .post("二楼被困")
///     .build();
/// ```
pub struct RawRecordBuilder {
    fields: Map<String, Value>,
}

impl RawRecordBuilder {
    pub fn new(link: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("link".into(), json!(link));
        fields.insert("time".into(), json!("2024-01-05T09:15:30Z"));
        fields.insert("lat".into(), json!(34.0));
        fields.insert("lng".into(), json!(113.0));
        Self { fields }
    }

    /// Set the lowercase `time` field.
    pub fn time(mut self, time: &str) -> Self {
        self.fields.insert("time".into(), json!(time));
        self
    }

    /// Use the legacy capitalised `Time` field instead of `time`.
    pub fn legacy_time(mut self, time: &str) -> Self {
        self.fields.remove("time");
        self.fields.insert("Time".into(), json!(time));
        self
    }

    pub fn flat(mut self, lat: f64, lng: f64) -> Self {
        self.fields.insert("lat".into(), json!(lat));
        self.fields.insert("lng".into(), json!(lng));
        self
    }

    /// Use nested `location` coordinates instead of flat ones.
    pub fn nested(mut self, lat: f64, lng: f64) -> Self {
        self.fields.remove("lat");
        self.fields.remove("lng");
        self.fields.insert("location".into(), json!({"lat": lat, "lng": lng}));
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.fields.insert("category".into(), json!(category));
        self
    }

    pub fn post(mut self, post: &str) -> Self {
        self.fields.insert("post".into(), json!(post));
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// FeedItemBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for already-normalised [`FeedItem`]s, for filter and
/// highlight tests that do not care about parsing.
pub struct FeedItemBuilder {
    item: FeedItem,
}

impl FeedItemBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            item: FeedItem {
                id: id.to_string(),
                link: format!("https://x/{id}"),
                location: LatLng::new(34.0, 113.0),
                time: String::new(),
                timestamp: NOW - MS_PER_HOUR,
                formatted_time: String::new(),
                category: "未分类".to_string(),
                types: Vec::new(),
                color: None,
                is_origin_post: false,
                icon: "loc_red".to_string(),
                post_text: String::new(),
            },
        }
    }

    pub fn hours_ago(mut self, hours: i64) -> Self {
        self.item.timestamp = NOW - hours * MS_PER_HOUR;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.item.category = category.to_string();
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.item.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn post(mut self, post: &str) -> Self {
        self.item.post_text = post.to_string();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.item.icon = icon.to_string();
        self
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.item.location = LatLng::new(lat, lng);
        self
    }

    pub fn build(self) -> FeedItem {
        self.item
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A normalizer with jitter disabled.
pub fn exact_normalizer() -> Normalizer {
    Normalizer::default().with_jitter(JitterAssigner::disabled())
}

/// Build a catalog of `n` items, one per hour going back from [`NOW`].
pub fn hourly_catalog(n: usize) -> Catalog {
    Catalog::from_items((0..n).map(|i| {
        FeedItemBuilder::new(&format!("item-{i}"))
            .hours_ago(i as i64)
            .build()
    }))
}
