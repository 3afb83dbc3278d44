//! Update policy: decide how a timestamp log reacts to a modification
//!
//! Two modes exist. With collapse-per-day, a log holds at most one entry per
//! calendar day and a same-day modification overwrites the last entry. With
//! interval throttling, a new entry is appended only once more than
//! `min_interval_seconds` have passed since the last one, and nothing is
//! ever overwritten.
//!
//! A last entry that fails strict parsing counts as infinitely old, so a
//! corrupted log always takes the append path and heals itself.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::config::StampConfig;
use crate::property::TimestampLog;
use crate::timestamp;

/// What happened to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// First entry of an empty log
    Created,
    /// Last entry replaced by a same-day timestamp
    Overwritten,
    /// New entry added at the end
    Appended,
    /// Too soon since the last entry; log untouched
    Throttled,
    /// Document lies in an ignored folder; log untouched
    Ignored,
}

impl Action {
    /// Whether this action changes the log
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Action::Created | Action::Overwritten | Action::Appended
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Created => "created",
            Action::Overwritten => "overwritten",
            Action::Appended => "appended",
            Action::Throttled => "throttled",
            Action::Ignored => "ignored",
        };
        f.write_str(s)
    }
}

/// Result of a policy decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The log after the decision
    pub log: TimestampLog,
    /// Whether the host must write `log` back
    pub mutated: bool,
    /// Which branch produced `log`
    pub action: Action,
}

impl Outcome {
    fn new(log: TimestampLog, action: Action) -> Self {
        Self {
            log,
            mutated: action.mutates(),
            action,
        }
    }

    /// Log left as-is
    pub(crate) fn unchanged(log: TimestampLog, action: Action) -> Self {
        debug_assert!(!action.mutates());
        Self::new(log, action)
    }
}

fn same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Decide the new log for a modification at `now`
pub fn decide(mut log: TimestampLog, now: NaiveDateTime, config: &StampConfig) -> Outcome {
    let stamp = timestamp::format(&now);
    let previous = log.last().and_then(|last| timestamp::parse_strict(last));

    if log.is_empty() {
        log.push(stamp);
        return Outcome::new(log, Action::Created);
    }

    if config.collapse_per_day {
        match previous {
            Some(prev) if same_day(&prev, &now) => {
                if let Some(last) = log.last_mut() {
                    *last = stamp;
                }
                Outcome::new(log, Action::Overwritten)
            }
            _ => {
                log.push(stamp);
                Outcome::new(log, Action::Appended)
            }
        }
    } else {
        let elapsed_exceeds = match previous {
            Some(prev) => (now - prev).num_seconds() > config.min_interval_seconds(),
            None => true,
        };

        if elapsed_exceeds {
            log.push(stamp);
            Outcome::new(log, Action::Appended)
        } else {
            Outcome::unchanged(log, Action::Throttled)
        }
    }
}
