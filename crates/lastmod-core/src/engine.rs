//! Entry point the host calls for every observed document change

use chrono::NaiveDateTime;

use crate::config::StampConfig;
use crate::folders::is_ignored;
use crate::policy::{self, Action, Outcome};
use crate::property::{normalize, PropertyValue};

/// Apply the stamping policy to one document
///
/// Pure: reads nothing and writes nothing. The caller persists
/// `outcome.log` only when `outcome.mutated` is set.
pub fn apply(
    document_path: &str,
    raw_value: PropertyValue,
    now: NaiveDateTime,
    config: &StampConfig,
) -> Outcome {
    if is_ignored(document_path, config.ignored_folders()) {
        tracing::debug!(path = document_path, "document in ignored folder");
        return Outcome::unchanged(raw_value.into_stored(), Action::Ignored);
    }

    let log = normalize(raw_value, config.migrate_legacy_scalar);
    let outcome = policy::decide(log, now, config);

    tracing::debug!(
        path = document_path,
        action = %outcome.action,
        entries = outcome.log.len(),
        "stamp decision"
    );

    outcome
}
