//! Core types for geofeed-core.
//!
//! This module defines the data structures shared across all layers: the
//! normalised [`FeedItem`], its [`LatLng`] position, map [`Bounds`], the
//! session's canonical item set ([`Catalog`]) and the [`FilterCriteria`]
//! passed in by the list UI.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Time range (hours) the list UI starts with. Also the fast-path threshold
/// of the filter engine.
pub const DEFAULT_TIME_RANGE_HOURS: u32 = 12;

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangular viewport reported by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Inclusive containment test. Viewports crossing the antimeridian are not
    /// supported.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// A normalised feed record.
///
/// Built once by the [`Normalizer`](crate::normalizer::Normalizer) and never
/// mutated afterwards; the map widget's per-item display overrides live in the
/// [`HighlightController`](crate::highlight::HighlightController) instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Last path segment of `link`.
    pub id: String,
    /// Source link as received. Session-native posts carry a placeholder
    /// instead of a URL.
    pub link: String,
    /// Jittered marker position.
    pub location: LatLng,
    /// Raw time string as resolved from the record.
    pub time: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
    /// Display form, e.g. `1月5日 09:15:30`.
    pub formatted_time: String,
    pub category: String,
    /// Sub-tokens of the raw category after the first one, in order.
    pub types: Vec<String>,
    /// Palette colour for `category`; `None` when the category is unknown.
    pub color: Option<&'static str>,
    pub is_origin_post: bool,
    /// Default marker icon.
    pub icon: String,
    pub post_text: String,
}

/// Multi-facet filter applied to the canonical item set.
///
/// Owned by the presentation layer and passed by reference into
/// [`filter`](crate::filter::filter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub time_range_hours: u32,
    /// Substring of the post body. Empty matches everything.
    pub keyword: String,
    /// Substring of the item category. Empty matches everything.
    pub category: String,
    /// Accepted types; an item passes when it has at least one of them. Empty
    /// accepts every item.
    pub types: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            time_range_hours: DEFAULT_TIME_RANGE_HOURS,
            keyword: String::new(),
            category: String::new(),
            types: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    /// True when every facet is at its default value.
    pub fn is_default(&self) -> bool {
        self.time_range_hours == DEFAULT_TIME_RANGE_HOURS
            && self.keyword.is_empty()
            && self.category.is_empty()
            && self.types.is_empty()
    }
}

/// The canonical item set of a session.
///
/// Items keep their feed order. Ids are unique: [`Catalog::from_items`] keeps
/// the first item for any id and drops the rest.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FeedItem>,
    by_id: HashMap<String, usize>,
    duplicates: usize,
}

impl Catalog {
    pub fn from_items(items: impl IntoIterator<Item = FeedItem>) -> Self {
        let mut catalog = Catalog::default();
        for item in items {
            if catalog.by_id.contains_key(&item.id) {
                tracing::warn!(id = %item.id, "duplicate feed item id, keeping first");
                catalog.duplicates += 1;
                continue;
            }
            catalog.by_id.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&FeedItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records dropped because their id was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
