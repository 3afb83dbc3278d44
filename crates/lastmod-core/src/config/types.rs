//! Configuration type definitions

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Lower bound for the append interval, in seconds
pub const MIN_INTERVAL_FLOOR: i64 = 60;

/// Upper bound for the append interval, in seconds
pub const MIN_INTERVAL_CEILING: i64 = 84_600;

/// Default append interval, in seconds
pub const DEFAULT_MIN_INTERVAL: i64 = 60;

/// Clamp an interval into `[MIN_INTERVAL_FLOOR, MIN_INTERVAL_CEILING]`
pub fn clamp_interval(seconds: i64) -> i64 {
    seconds.clamp(MIN_INTERVAL_FLOOR, MIN_INTERVAL_CEILING)
}

/// Stamping policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StampConfig {
    /// Keep at most one entry per calendar day; the interval is ignored
    #[serde(default = "default_collapse_per_day")]
    pub collapse_per_day: bool,

    /// Minimum seconds between appended entries when not collapsing
    #[serde(
        default = "default_min_interval",
        deserialize_with = "deserialize_interval"
    )]
    pub(crate) min_interval_seconds: i64,

    /// Vault-relative folders whose documents are never stamped
    #[serde(default)]
    pub(crate) ignored_folders: Vec<String>,

    /// Keep a legacy single-value `last-modified` as the first log entry
    #[serde(default)]
    pub migrate_legacy_scalar: bool,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            collapse_per_day: default_collapse_per_day(),
            min_interval_seconds: default_min_interval(),
            ignored_folders: Vec::new(),
            migrate_legacy_scalar: false,
        }
    }
}

fn default_collapse_per_day() -> bool {
    true
}

fn default_min_interval() -> i64 {
    DEFAULT_MIN_INTERVAL
}

/// Accept integers, floats and numeric strings; anything else falls back
/// to the default. The result is always clamped.
fn deserialize_interval<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInterval {
        Int(i64),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    let seconds = match RawInterval::deserialize(deserializer)? {
        RawInterval::Int(n) => n,
        RawInterval::Float(f) if f.is_finite() => f as i64,
        RawInterval::Text(s) => s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %s, "non-numeric min-interval-seconds, using default");
            DEFAULT_MIN_INTERVAL
        }),
        RawInterval::Float(_) | RawInterval::Other(_) => {
            tracing::warn!("unusable min-interval-seconds, using default");
            DEFAULT_MIN_INTERVAL
        }
    };

    Ok(clamp_interval(seconds))
}
