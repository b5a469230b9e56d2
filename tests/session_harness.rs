#![allow(unused)]
//! Session integration harness: the whole pipeline as the presentation
//! layer drives it.
//!
//! # What this covers
//!
//! - **Ingest once**: a second ingest call is a no-op; a catalog populated
//!   afterwards is rejected.
//! - **Event wiring**: slider, search box, category and type pickers update
//!   the criteria; a category change clears the type selection.
//! - **Cross-view sync**: clicking a list item highlights it on the map and
//!   recenters the viewport.
//! - **List placeholder**: follows map initialisation and viewport events.
//!
//! # Running
//!
//! ```sh
//! cargo test --test session_harness
//! ```

mod common;
use common::*;
use geofeed::{config::Config, Bounds, IngestPolicy, LatLng, Session, StaticSource, ViewEvent};
use pretty_assertions::assert_eq;

async fn loaded_session() -> Session {
    let mut s = Session::new(&Config::defaults()).with_normalizer(exact_normalizer());
    let n = s.ingest(&StaticSource::new(corpus_with_errors())).await.unwrap();
    assert_eq!(n, 5);
    s
}

fn visible(s: &mut Session) -> Vec<String> {
    ids(s.list_props(NOW).visible_items)
}

#[tokio::test]
async fn second_ingest_is_ignored() {
    let mut s = loaded_session().await;
    let n = s.ingest(&StaticSource::new(Vec::new())).await.unwrap();
    assert_eq!(n, 5);
    assert!(!s.populate(geofeed::Catalog::default()));
}

#[tokio::test]
async fn strict_session_rejects_malformed_feed() {
    let mut s = Session::new(&Config::defaults()).with_policy(IngestPolicy::Abort);
    assert!(s.ingest(&StaticSource::new(corpus_with_errors())).await.is_err());
    assert!(s.catalog().is_none());
    // The gate stays open after a failure.
    assert_eq!(s.ingest(&StaticSource::new(corpus_mixed())).await.unwrap(), 5);
}

#[tokio::test]
async fn filter_events_drive_the_list() {
    let mut s = loaded_session().await;
    assert_eq!(visible(&mut s), vec!["r1", "r2", "no_link_3", "r4"]);

    s.handle(ViewEvent::TimeRangeChanged(2));
    assert_eq!(visible(&mut s), vec!["r1"]);

    s.handle(ViewEvent::TimeRangeChanged(48));
    s.handle(ViewEvent::KeywordChanged("被困".into()));
    assert_eq!(visible(&mut s), vec!["r1", "r5"]);

    s.handle(ViewEvent::TypesChanged(["老人".to_string()].into_iter().collect()));
    assert_eq!(visible(&mut s), vec!["r1"]);

    s.handle(ViewEvent::CategoryChanged("求救".into()));
    assert!(s.criteria().types.is_empty());
    assert_eq!(visible(&mut s), vec!["r1", "r5"]);

    s.handle(ViewEvent::KeywordChanged(String::new()));
    s.handle(ViewEvent::CategoryChanged(String::new()));
    s.handle(ViewEvent::TimeRangeChanged(12));
    assert!(s.criteria().is_default());
    assert_eq!(visible(&mut s), vec!["r1", "r2", "no_link_3", "r4"]);
}

#[tokio::test]
async fn click_syncs_map() {
    let mut s = loaded_session().await;
    s.handle(ViewEvent::ItemClicked("r2".into()));
    s.handle(ViewEvent::ItemClicked("r4".into()));

    assert_eq!(s.center(), LatLng::new(34.80, 113.60));
    let map = s.map_props();
    assert_eq!(map.items.len(), 5);
    assert_eq!(map.overrides.get("r4").map(String::as_str), Some("loc_blue"));
    assert_eq!(map.overrides.get("r2").map(String::as_str), Some("loc_red"));
    assert_single_highlight(s.highlight());
}

#[tokio::test]
async fn placeholder_and_bounds() {
    let mut s = loaded_session().await;
    s.handle(ViewEvent::MapInitialized);
    assert_eq!(s.list_props(NOW).placeholder_text, "移动地图显示列表");

    let viewport = Bounds::new(LatLng::new(34.72, 113.55), LatLng::new(34.85, 113.68));
    s.handle(ViewEvent::BoundsChanged(viewport));
    let list = s.list_props(NOW);
    assert_eq!(list.placeholder_text, "无数据");
    assert_eq!(ids(list.in_bounds()), vec!["r1", "r2", "r4"]);
}

#[tokio::test]
async fn geojson_covers_every_item() {
    let s = loaded_session().await;
    let fc = geofeed::geojson::feature_collection(s.map_props().items);
    let features = fc["features"].as_array().unwrap();
    assert_eq!(features.len(), 5);
    assert_eq!(features[0]["geometry"]["coordinates"][0], 113.60);
    assert_eq!(features[0]["properties"]["category"], "求救");
}
