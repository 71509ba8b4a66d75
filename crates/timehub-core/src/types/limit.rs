//! Per-card time limit parsing.
//!
//! Limits are entered by hand in the power-up settings dialog as `HH:MM`
//! or `HH:MM:SS`. Anything else — empty, absent, or malformed — means no
//! enforcement for that card, consistent with the duration calculator's
//! fail-safe policy.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A parsed per-card time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLimit {
    /// A fixed budget in seconds.
    Budget(i64),
    /// No limit configured; the sweep skips this card.
    Unlimited,
}

impl TimeLimit {
    /// Parse a human-entered limit string.
    ///
    /// `"HH:MM"` → `H*3600 + M*60`; `"HH:MM:SS"` also adds the seconds.
    /// Hours are not capped at 24 — `"48:00"` is a valid two-day budget.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unlimited;
        };
        let parts: Vec<&str> = raw.trim().split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Self::Unlimited;
        }

        let mut values = Vec::with_capacity(3);
        for part in &parts {
            match part.parse::<i64>() {
                Ok(v) if v >= 0 => values.push(v),
                _ => return Self::Unlimited,
            }
        }

        // Absurdly large fields would overflow the seconds sum; treat
        // them like any other malformed input.
        let seconds = match values.as_slice() {
            [h, m] => hms_seconds(*h, *m, 0),
            [h, m, s] => hms_seconds(*h, *m, *s),
            _ => None,
        };
        match seconds {
            Some(seconds) => Self::Budget(seconds),
            None => Self::Unlimited,
        }
    }

    /// The budget in seconds, or `None` for unlimited.
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Self::Budget(s) => Some(*s),
            Self::Unlimited => None,
        }
    }

    /// Check whether an accumulated total meets or exceeds this budget.
    pub fn is_reached_by(&self, total_seconds: i64) -> bool {
        match self {
            Self::Budget(limit) => total_seconds >= *limit,
            Self::Unlimited => false,
        }
    }
}

fn hms_seconds(hours: i64, minutes: i64, seconds: i64) -> Option<i64> {
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Read a limit string as a wall-clock cutoff time of day.
///
/// Used by the deadline enforcement mode, where `"17:30"` means "all work
/// on this card must stop by 17:30". Strings that are valid budgets but
/// not valid times of day (e.g. `"48:00"`) yield `None`.
pub fn parse_deadline(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
