//! Highlight controller: the id → icon override map shared by the map and
//! list views.
//!
//! # Transition on `select(item)`
//!
//! 1. Every other id in the map is reconciled: if the catalog still knows the
//!    item and its override differs from the item's default icon, the override
//!    is reset to that default. Otherwise (unknown id, or already at default)
//!    the entry is pruned.
//! 2. `item.id` is set to the highlighted icon.
//! 3. The item's location is returned as the new map center.
//!
//! A reset entry lingers for one transition and is pruned on the next.

use crate::types::{Catalog, FeedItem, LatLng};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightController {
    overrides: BTreeMap<String, String>,
    highlighted_icon: String,
}

impl HighlightController {
    pub fn new(highlighted_icon: impl Into<String>) -> Self {
        Self {
            overrides: BTreeMap::new(),
            highlighted_icon: highlighted_icon.into(),
        }
    }

    pub fn highlighted_icon(&self) -> &str {
        &self.highlighted_icon
    }

    /// Current id → icon overrides.
    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Id currently carrying the highlighted icon, if any.
    pub fn highlighted(&self) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(_, icon)| **icon == self.highlighted_icon)
            .map(|(id, _)| id.as_str())
    }

    /// Highlight `item`, reconciling every previous override. Returns the
    /// location the map should recenter on.
    pub fn select(&mut self, item: &FeedItem, catalog: &Catalog) -> LatLng {
        let stale: Vec<String> = self
            .overrides
            .keys()
            .filter(|id| **id != item.id)
            .cloned()
            .collect();

        for id in stale {
            match catalog.get(&id) {
                Some(prev) if self.overrides.get(&id) != Some(&prev.icon) => {
                    tracing::debug!(id = %id, icon = %prev.icon, "highlight: reset to default");
                    self.overrides.insert(id, prev.icon.clone());
                }
                _ => {
                    tracing::debug!(id = %id, "highlight: pruned");
                    self.overrides.remove(&id);
                }
            }
        }

        tracing::debug!(id = %item.id, "highlight: selected");
        self.overrides
            .insert(item.id.clone(), self.highlighted_icon.clone());
        item.location
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
