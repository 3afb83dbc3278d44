//! Value parsers for CLI arguments

use chrono::NaiveDateTime;
use lastmod_core::timestamp;

/// Parse a `YYYY-MM-DDTHH:mm:ss` timestamp strictly
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    timestamp::parse_strict(s).ok_or_else(|| {
        format!(
            "invalid timestamp '{}' (expected YYYY-MM-DDTHH:mm:ss)",
            s
        )
    })
}

/// Parse a boolean setting value
pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("invalid boolean '{}' (expected true or false)", other)),
    }
}
