//! Configuration types for geofeed.
//!
//! [`Config::load`] reads `~/.config/geofeed/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
jitter_divisor         = 150.0
uncategorized_label    = "未分类"
origin_post_prefix     = "no_link"
naive_utc_offset_mins  = 480

[icons]
default     = "loc_red"
highlighted = "loc_blue"

[view]
initial_time_range_hours = 12
center_lat               = 34.820333
center_lng               = 113.802193
placeholder_map_ready    = "移动地图显示列表"
placeholder_no_data      = "无数据"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/geofeed/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub icons: IconsConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    /// Jitter offsets are drawn from `[0, 1 / jitter_divisor)` degrees.
    #[serde(default = "default_jitter_divisor")]
    pub jitter_divisor: f64,
    /// Category used when a record has none.
    #[serde(default = "default_uncategorized_label")]
    pub uncategorized_label: String,
    /// Links starting with this prefix mark session-native posts.
    #[serde(default = "default_origin_post_prefix")]
    pub origin_post_prefix: String,
    /// UTC offset applied to time strings without an explicit zone.
    #[serde(default = "default_naive_utc_offset_mins")]
    pub naive_utc_offset_mins: i32,
}

fn default_jitter_divisor() -> f64 { 150.0 }
fn default_uncategorized_label() -> String { "未分类".to_string() }
fn default_origin_post_prefix() -> String { "no_link".to_string() }
fn default_naive_utc_offset_mins() -> i32 { 480 }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            jitter_divisor: default_jitter_divisor(),
            uncategorized_label: default_uncategorized_label(),
            origin_post_prefix: default_origin_post_prefix(),
            naive_utc_offset_mins: default_naive_utc_offset_mins(),
        }
    }
}

/// `[icons]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_icon")]
    pub default: String,
    #[serde(default = "default_highlighted_icon")]
    pub highlighted: String,
}

fn default_icon() -> String { "loc_red".to_string() }
fn default_highlighted_icon() -> String { "loc_blue".to_string() }

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            default: default_icon(),
            highlighted: default_highlighted_icon(),
        }
    }
}

/// `[view]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_initial_time_range_hours")]
    pub initial_time_range_hours: u32,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    /// List placeholder once the map widget has initialised.
    #[serde(default = "default_placeholder_map_ready")]
    pub placeholder_map_ready: String,
    /// List placeholder once the map has reported a viewport.
    #[serde(default = "default_placeholder_no_data")]
    pub placeholder_no_data: String,
}

fn default_initial_time_range_hours() -> u32 { crate::types::DEFAULT_TIME_RANGE_HOURS }
fn default_center_lat() -> f64 { 34.820333 }
fn default_center_lng() -> f64 { 113.802193 }
fn default_placeholder_map_ready() -> String { "移动地图显示列表".to_string() }
fn default_placeholder_no_data() -> String { "无数据".to_string() }

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_time_range_hours: default_initial_time_range_hours(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            placeholder_map_ready: default_placeholder_map_ready(),
            placeholder_no_data: default_placeholder_no_data(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/geofeed/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. A missing
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("geofeed")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
