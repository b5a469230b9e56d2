//! Session: the single owner of all presentation state.
//!
//! One `Session` exists per page view. It is the only writer of the canonical
//! item set (through its [`IngestGate`]), the filter criteria, the map
//! viewport, the list placeholder and the highlight map. Collaborators read it
//! through [`MapProps`] and [`ListProps`] and write to it only by sending
//! [`ViewEvent`]s to [`Session::handle`].
//!
//! # Filter memoisation
//!
//! The visible set is recomputed only when the criteria differ from the last
//! computation or the catalog has been populated since. The wall clock used
//! for the time window is the one passed to the call that recomputed;
//! [`Session::refresh`] forces a recomputation with a fresh clock.

use crate::event::ViewEvent;
use geofeed_core::{
    config::{Config, ViewConfig},
    filter, Bounds, Catalog, FeedItem, FilterCriteria, HighlightController, LatLng, Normalizer,
};
use geofeed_feeds::{FeedSource, IngestError, IngestGate, IngestPolicy};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// What the map widget renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MapProps<'a> {
    /// Every item in the catalog, unfiltered.
    pub items: &'a [FeedItem],
    pub center: LatLng,
    pub overrides: &'a BTreeMap<String, String>,
}

impl MapProps<'_> {
    /// Icon to draw for `item`: its override if any, else its default.
    pub fn icon_for<'i>(&'i self, item: &'i FeedItem) -> &'i str {
        self.overrides
            .get(&item.id)
            .map(String::as_str)
            .unwrap_or(&item.icon)
    }
}

/// What the list UI renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListProps<'a> {
    pub visible_items: Vec<&'a FeedItem>,
    pub bounds: Option<Bounds>,
    /// Shown instead of the list when it has nothing to display.
    pub placeholder_text: &'a str,
}

impl<'a> ListProps<'a> {
    /// Visible items inside the current viewport. Until the map has reported
    /// one, every visible item qualifies.
    pub fn in_bounds(&self) -> Vec<&'a FeedItem> {
        match self.bounds {
            Some(b) => self
                .visible_items
                .iter()
                .copied()
                .filter(|item| b.contains(item.location))
                .collect(),
            None => self.visible_items.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Memo {
    criteria: FilterCriteria,
    computed_at: i64,
    ids: Vec<String>,
}

#[derive(Debug)]
pub struct Session {
    gate: IngestGate,
    normalizer: Normalizer,
    policy: IngestPolicy,
    view: ViewConfig,
    criteria: FilterCriteria,
    bounds: Option<Bounds>,
    placeholder: String,
    center: LatLng,
    highlight: HighlightController,
    memo: Option<Memo>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::defaults())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let criteria = FilterCriteria {
            time_range_hours: config.view.initial_time_range_hours,
            ..FilterCriteria::default()
        };
        Self {
            gate: IngestGate::new(),
            normalizer: Normalizer::from_config(config),
            policy: IngestPolicy::default(),
            view: config.view.clone(),
            criteria,
            bounds: None,
            placeholder: String::new(),
            center: LatLng::new(config.view.center_lat, config.view.center_lng),
            highlight: HighlightController::new(config.icons.highlighted.clone()),
            memo: None,
        }
    }

    pub fn with_policy(mut self, policy: IngestPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    // -- ingestion ----------------------------------------------------------

    /// Fetch and normalise the feed. Only the first successful call does any
    /// work; later calls return the existing item count.
    pub async fn ingest(&mut self, source: &dyn FeedSource) -> Result<usize, IngestError> {
        let was_loaded = self.gate.is_loaded();
        let len = self
            .gate
            .load(source, &self.normalizer, self.policy)
            .await?
            .len();
        if !was_loaded {
            self.memo = None;
        }
        Ok(len)
    }

    /// Install an already-built catalog. Ignored if one is present.
    pub fn populate(&mut self, catalog: Catalog) -> bool {
        let accepted = self.gate.populate(catalog);
        if accepted {
            self.memo = None;
        }
        accepted
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.gate.get()
    }

    fn items(&self) -> &[FeedItem] {
        self.gate.get().map(Catalog::items).unwrap_or_default()
    }

    // -- events -------------------------------------------------------------

    pub fn handle(&mut self, event: ViewEvent) {
        tracing::debug!(event = ?event, "view event");
        match event {
            ViewEvent::MapInitialized => {
                self.placeholder = self.view.placeholder_map_ready.clone();
            }
            ViewEvent::BoundsChanged(bounds) => {
                self.bounds = Some(bounds);
                self.placeholder = self.view.placeholder_no_data.clone();
            }
            ViewEvent::TimeRangeChanged(hours) => {
                self.criteria.time_range_hours = hours;
            }
            ViewEvent::KeywordChanged(keyword) => {
                self.criteria.keyword = keyword;
            }
            ViewEvent::CategoryChanged(category) => {
                self.criteria.category = category;
                self.criteria.types.clear();
            }
            ViewEvent::TypesChanged(types) => {
                self.criteria.types = types;
            }
            ViewEvent::ItemClicked(id) => self.select(&id),
        }
    }

    fn select(&mut self, id: &str) {
        let Some(catalog) = self.gate.get() else {
            tracing::warn!(id, "item clicked before feed was ingested");
            return;
        };
        let Some(item) = catalog.get(id) else {
            tracing::warn!(id, "clicked item is not in the catalog");
            return;
        };
        self.center = self.highlight.select(item, catalog);
    }

    // -- filtering ----------------------------------------------------------

    /// Recompute the visible set if criteria or catalog changed.
    fn ensure_filtered(&mut self, now_ms: i64) {
        let fresh = self
            .memo
            .as_ref()
            .is_some_and(|memo| memo.criteria == self.criteria);
        if fresh {
            return;
        }
        self.recompute(now_ms);
    }

    /// Recompute the visible set unconditionally.
    pub fn refresh(&mut self, now_ms: i64) {
        self.recompute(now_ms);
    }

    fn recompute(&mut self, now_ms: i64) {
        let ids = filter(self.items(), &self.criteria, now_ms)
            .into_iter()
            .map(|item| item.id.clone())
            .collect::<Vec<_>>();
        tracing::debug!(visible = ids.len(), "filter recomputed");
        self.memo = Some(Memo {
            criteria: self.criteria.clone(),
            computed_at: now_ms,
            ids,
        });
    }

    /// Clock value of the last filter recomputation.
    pub fn filtered_at(&self) -> Option<i64> {
        self.memo.as_ref().map(|m| m.computed_at)
    }

    // -- accessors ----------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn highlight(&self) -> &HighlightController {
        &self.highlight
    }

    pub fn map_props(&self) -> MapProps<'_> {
        MapProps {
            items: self.items(),
            center: self.center,
            overrides: self.highlight.overrides(),
        }
    }

    pub fn list_props(&mut self, now_ms: i64) -> ListProps<'_> {
        self.ensure_filtered(now_ms);
        let catalog = self.gate.get();
        let visible_items = match (catalog, &self.memo) {
            (Some(catalog), Some(memo)) => memo.ids.iter().filter_map(|id| catalog.get(id)).collect(),
            _ => Vec::new(),
        };
        ListProps {
            visible_items,
            bounds: self.bounds,
            placeholder_text: &self.placeholder,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
