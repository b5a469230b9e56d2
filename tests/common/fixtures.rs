//! Static raw-record corpora used across harnesses.
//!
//! The corpus mixes every schema generation seen in the feed: nested and flat
//! coordinates, `Time` and `time`, RFC 3339, crawler `created_at` and naive
//! timestamps, missing categories and session-native posts.

use serde_json::{json, Value};

/// Fixed clock for every harness: 2024-01-05T12:00:00Z.
pub const NOW: i64 = 1_704_456_000_000;

/// Well-formed records, oldest last.
pub fn corpus_mixed() -> Vec<Value> {
    vec![
        json!({"link": "https://weibo.com/1/r1", "Time": "2024-01-05T11:30:00Z", "category": "求救_被困_老人", "lat": 34.80, "lng": 113.60, "post": "二楼被困 有老人"}),
        json!({"link": "https://weibo.com/1/r2", "time": "2024-01-05 17:00:00", "category": "物资_饮用水", "location": {"lat": 34.75, "lng": 113.65}, "post": "缺饮用水"}),
        json!({"link": "no_link_3", "time": "2024-01-05T08:00:00Z", "category": "医疗", "lat": 34.70, "lng": 113.70, "post": "需要胰岛素"}),
        json!({"link": "https://weibo.com/1/r4", "time": "2024-01-05T02:00:00Z", "lat": 34.80, "lng": 113.60, "post": "水位上涨"}),
        json!({"link": "https://weibo.com/1/r5", "Time": "Thu Jan 04 14:00:00 +0800 2024", "category": "求救 _ 被困", "location": {"lat": "34.81", "lng": "113.61"}, "post": "地下车库被困"}),
    ]
}

/// Records that must fail normalisation, each for a different reason.
pub fn corpus_malformed() -> Vec<Value> {
    vec![
        json!({"time": "2024-01-05T11:30:00Z", "lat": 34.8, "lng": 113.6}),
        json!({"link": "https://weibo.com/1/m2", "lat": 34.8, "lng": 113.6}),
        json!({"link": "https://weibo.com/1/m3", "time": "今天上午", "lat": 34.8, "lng": 113.6}),
        json!({"link": "https://weibo.com/1/m4", "time": "2024-01-05T11:30:00Z"}),
        json!("just a string"),
    ]
}

/// `corpus_mixed` with the malformed records interleaved.
pub fn corpus_with_errors() -> Vec<Value> {
    let mut out = Vec::new();
    for (good, bad) in corpus_mixed().into_iter().zip(corpus_malformed()) {
        out.push(good);
        out.push(bad);
    }
    out
}
