//! Normalizer: turns one raw feed record into a canonical [`FeedItem`].
//!
//! The feed has gone through several schema revisions, so a concept such as
//! "position" or "time" can live under more than one field name. Each concept
//! is resolved by an ordered rule list ([`COORDINATE_RULES`], [`TIME_FIELDS`]);
//! the first rule that yields a value wins.
//!
//! | Concept | Rules, in priority order |
//! |---------|--------------------------|
//! | position | per axis: `location.lat`, then flat `lat` (same for `lng`) |
//! | time | `Time`, then `time` |
//! | id | last `/` segment of `link` |
//! | category | `category` split on `_`; missing → uncategorized label |
//!
//! Apart from jitter the transform is pure: the same record always yields the
//! same id, category, types and timestamp.

use crate::{
    config::{Config, IconsConfig, NormalizeConfig},
    error::NormalizeError,
    jitter::JitterAssigner,
    palette,
    types::{FeedItem, LatLng},
};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Field resolution rules
// ---------------------------------------------------------------------------

/// Where a record may keep its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRule {
    /// `{"location": {"lat": .., "lng": ..}}`
    Nested,
    /// `{"lat": .., "lng": ..}`
    Flat,
}

pub const COORDINATE_RULES: &[CoordinateRule] = &[CoordinateRule::Nested, CoordinateRule::Flat];

/// Field names that may hold the raw time string.
pub const TIME_FIELDS: &[&str] = &["Time", "time"];

/// Offset-carrying layouts tried after RFC 3339. The first is the crawler's
/// `created_at` form, e.g. `Wed Jul 21 15:30:00 +0800 2021`.
const ZONED_TIME_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %z %Y", "%Y-%m-%d %H:%M:%S %z"];

/// Naive time layouts, read at the configured UTC offset.
const NAIVE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

impl CoordinateRule {
    /// One axis (`"lat"` or `"lng"`) under this rule.
    fn axis(self, record: &Map<String, Value>, key: &str) -> Option<f64> {
        let source = match self {
            CoordinateRule::Nested => record.get("location")?.as_object()?,
            CoordinateRule::Flat => record,
        };
        number(source.get(key)?)
    }
}

/// Each axis is resolved on its own, so a partial `location` object still
/// contributes the axis it has.
fn resolve_axis(record: &Map<String, Value>, key: &str) -> Option<f64> {
    COORDINATE_RULES.iter().find_map(|rule| rule.axis(record, key))
}

/// Accepts JSON numbers and numeric strings.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_str<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Normalizer {
    jitter: JitterAssigner,
    uncategorized_label: String,
    origin_post_prefix: String,
    naive_offset: FixedOffset,
    default_icon: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&Config::defaults())
    }
}

impl Normalizer {
    pub fn new(normalize: &NormalizeConfig, icons: &IconsConfig) -> Self {
        let naive_offset = FixedOffset::east_opt(normalize.naive_utc_offset_mins * 60)
            .unwrap_or_else(|| {
                tracing::warn!(
                    offset_mins = normalize.naive_utc_offset_mins,
                    "naive UTC offset out of range, using UTC"
                );
                Utc.fix()
            });
        Self {
            jitter: JitterAssigner::with_divisor(normalize.jitter_divisor),
            uncategorized_label: normalize.uncategorized_label.clone(),
            origin_post_prefix: normalize.origin_post_prefix.clone(),
            naive_offset,
            default_icon: icons.default.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.normalize, &config.icons)
    }

    /// Replace the jitter assigner, e.g. with [`JitterAssigner::disabled`].
    pub fn with_jitter(mut self, jitter: JitterAssigner) -> Self {
        self.jitter = jitter;
        self
    }

    /// Normalise one raw record, jittering its position.
    pub fn normalize(&self, raw: &Value) -> Result<FeedItem, NormalizeError> {
        let mut item = self.normalize_without_jitter(raw)?;
        item.location = self.jitter.apply(item.location);
        Ok(item)
    }

    /// Normalise one raw record, keeping its position exactly as received.
    pub fn normalize_without_jitter(&self, raw: &Value) -> Result<FeedItem, NormalizeError> {
        let record = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

        let link = non_empty_str(record, "link").ok_or(NormalizeError::MissingField("link"))?;
        let time = TIME_FIELDS
            .iter()
            .find_map(|field| non_empty_str(record, field))
            .ok_or(NormalizeError::MissingField("time"))?;
        let location = match (resolve_axis(record, "lat"), resolve_axis(record, "lng")) {
            (Some(lat), Some(lng)) => LatLng { lat, lng },
            _ => return Err(NormalizeError::MissingCoordinates),
        };

        let parsed = self.parse_time(time)?;
        let (category, types) = split_category(
            non_empty_str(record, "category").unwrap_or(self.uncategorized_label.as_str()),
        );
        let color = palette::color_for(&category);

        Ok(FeedItem {
            id: id_from_link(link).to_string(),
            link: link.to_string(),
            location,
            time: time.to_string(),
            timestamp: parsed.timestamp_millis(),
            formatted_time: format_time(&parsed.with_timezone(&self.naive_offset), time),
            category,
            types,
            color,
            is_origin_post: link.starts_with(&self.origin_post_prefix),
            icon: self.default_icon.clone(),
            post_text: record
                .get("post")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Parse RFC 3339 first, then the zoned layouts, then the naive layouts at
    /// the feed's UTC offset.
    fn parse_time(&self, raw: &str) -> Result<DateTime<FixedOffset>, NormalizeError> {
        let trimmed = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt);
        }
        if let Some(dt) = ZONED_TIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
        {
            return Ok(dt);
        }
        NAIVE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .and_then(|naive| self.naive_offset.from_local_datetime(&naive).single())
            .ok_or_else(|| NormalizeError::InvalidTime {
                value: raw.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Last `/`-delimited segment of a link.
pub fn id_from_link(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}

/// Split `"A_B_C"` into `("A", ["B", "C"])`, trimming each token.
pub fn split_category(raw: &str) -> (String, Vec<String>) {
    let mut tokens = raw.split('_').map(|t| t.trim().to_string());
    let category = tokens.next().unwrap_or_default();
    (category, tokens.collect())
}

/// `"{month}月{day}日 {clock}"`. Month and day come from `local`, the instant
/// seen at the feed's UTC offset; the clock is taken verbatim from the raw
/// string's fixed-width `HH:MM:SS` slot (characters 11..19).
fn format_time(local: &DateTime<FixedOffset>, raw: &str) -> String {
    let clock: String = raw.chars().skip(11).take(8).collect();
    format!("{}月{}日 {}", local.month(), local.day(), clock)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
