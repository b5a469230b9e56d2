//! View events: what the map widget and the list UI report back.
//!
//! | Emitter | Event |
//! |---------|-------|
//! | map | `MapInitialized`, `BoundsChanged(bounds)` |
//! | slider | `TimeRangeChanged(hours)` |
//! | search box | `KeywordChanged(text)` |
//! | category picker | `CategoryChanged(category)` (also clears types) |
//! | type picker | `TypesChanged(types)` |
//! | list | `ItemClicked(id)` |

use geofeed_core::Bounds;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    MapInitialized,
    BoundsChanged(Bounds),
    TimeRangeChanged(u32),
    KeywordChanged(String),
    CategoryChanged(String),
    TypesChanged(BTreeSet<String>),
    ItemClicked(String),
}
