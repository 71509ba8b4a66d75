//! Active timer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A work session currently in progress.
///
/// At most one active timer exists per member; starting a new timer
/// implicitly stops the previous one. Rows are only ever created and
/// deleted, never updated in place — a terminated session becomes a
/// [`crate::log::TimeLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    /// The card being worked on.
    pub card_id: String,
    /// The member doing the work. Unique across active timers.
    pub member_id: String,
    /// Display name, denormalized at start time.
    pub member_name: String,
    /// Session start instant as an RFC 3339 string. Read through the
    /// lenient duration calculator, so a corrupt value degrades to a
    /// zero-length session instead of an error.
    #[sqlx(rename = "started_at")]
    pub start_time: String,
}

impl ActiveTimer {
    /// Begin a new session at the given instant.
    pub fn begin(
        card_id: impl Into<String>,
        member_id: impl Into<String>,
        member_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            member_id: member_id.into(),
            member_name: member_name.into(),
            start_time: now.to_rfc3339(),
        }
    }

    /// Whole seconds this session has been running, clamped at zero.
    pub fn elapsed_seconds(&self) -> i64 {
        timehub_core::types::elapsed_seconds(&self.start_time)
    }
}
