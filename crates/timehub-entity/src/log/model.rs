//! Time log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::StopAction;
use crate::timer::ActiveTimer;

/// An immutable record of one completed timer session.
///
/// Created exactly once per session termination; afterwards only touched
/// by explicit administrative edit/delete from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    /// Unique log identifier, generated at creation.
    pub id: Uuid,
    /// The card the session was recorded against.
    pub card_id: String,
    /// The member who worked the session.
    pub member_id: String,
    /// Display name, carried over from the active timer.
    pub member_name: String,
    /// Session length in seconds. Never negative.
    pub duration: i64,
    /// When the session ended.
    #[sqlx(rename = "logged_at")]
    #[serde(rename = "date")]
    pub logged_at: DateTime<Utc>,
    /// How the session was terminated.
    pub action: StopAction,
}

impl TimeLog {
    /// Record the termination of an active timer.
    pub fn record(
        timer: &ActiveTimer,
        duration: i64,
        action: StopAction,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id: timer.card_id.clone(),
            member_id: timer.member_id.clone(),
            member_name: timer.member_name.clone(),
            duration: duration.max(0),
            logged_at: now,
            action,
        }
    }
}
