//! Timestamp codec for `last-modified` entries
//!
//! Entries are naive local wall-clock values in the exact shape
//! `YYYY-MM-DDTHH:mm:ss`. Parsing is strict: anything that deviates from
//! that shape is rejected instead of being approximated.

use std::sync::OnceLock;

use chrono::{Local, NaiveDateTime, Timelike};
use regex::Regex;

/// chrono pattern for a timestamp entry
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static SHAPE: OnceLock<Regex> = OnceLock::new();

fn shape() -> &'static Regex {
    SHAPE.get_or_init(|| {
        // ASCII classes on purpose: `\d` is Unicode-aware with this regex build
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}$")
            .expect("timestamp shape regex is valid")
    })
}

/// Render an instant as `YYYY-MM-DDTHH:mm:ss`, dropping sub-second precision
pub fn format(instant: &NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an entry, rejecting anything but the exact timestamp shape
///
/// chrono alone accepts unpadded fields and signed years, so the shape is
/// checked first and chrono only validates the calendar values.
pub fn parse_strict(text: &str) -> Option<NaiveDateTime> {
    if !shape().is_match(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

/// Current local wall-clock time, truncated to whole seconds
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
