//! The `last-modified` frontmatter value and its normalization into a log

use serde_yaml::Value;

/// Frontmatter key holding the timestamp log
pub const LAST_MODIFIED_KEY: &str = "last-modified";

/// Ordered timestamp entries, most recent last
pub type TimestampLog = Vec<String>;

/// Shape of the raw `last-modified` value as found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Key missing or null
    Absent,
    /// A single legacy value
    Scalar(String),
    /// A sequence of strings
    Sequence(Vec<String>),
    /// Mappings, tagged values, or sequences holding non-strings
    Unrecognized,
}

impl PropertyValue {
    /// Classify an optional YAML value
    pub fn from_yaml(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => PropertyValue::Absent,
            Some(Value::String(s)) => PropertyValue::Scalar(s.clone()),
            Some(Value::Number(n)) => PropertyValue::Scalar(n.to_string()),
            Some(Value::Bool(b)) => PropertyValue::Scalar(b.to_string()),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map_or(PropertyValue::Unrecognized, PropertyValue::Sequence),
            Some(_) => PropertyValue::Unrecognized,
        }
    }

    /// Entries exactly as stored, with no legacy handling
    pub fn into_stored(self) -> TimestampLog {
        match self {
            PropertyValue::Sequence(entries) => entries,
            PropertyValue::Scalar(s) => vec![s],
            PropertyValue::Absent | PropertyValue::Unrecognized => Vec::new(),
        }
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(entries: Vec<String>) -> Self {
        PropertyValue::Sequence(entries)
    }
}

/// Render a log as the YAML value written back to the document
pub fn to_yaml(log: &[String]) -> Value {
    Value::Sequence(log.iter().cloned().map(Value::String).collect())
}

/// Coerce a raw value into a timestamp log
///
/// Legacy scalars are dropped unless `migrate_legacy_scalar` is set, in
/// which case they become the first entry.
pub fn normalize(value: PropertyValue, migrate_legacy_scalar: bool) -> TimestampLog {
    match value {
        PropertyValue::Sequence(entries) => entries,
        PropertyValue::Scalar(s) if migrate_legacy_scalar => vec![s],
        PropertyValue::Scalar(_) | PropertyValue::Absent | PropertyValue::Unrecognized => {
            Vec::new()
        }
    }
}
