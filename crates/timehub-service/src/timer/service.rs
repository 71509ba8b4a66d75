//! Timer lifecycle engine.
//!
//! Every state transition goes through this service, and the stores are
//! the only state it consults. Transitions that close a session use the
//! store's conditional take operations so that concurrent callers (a
//! second start, a manual stop, the sweep) cannot double-log the same
//! session: whichever caller wins the delete owns the log entry, the
//! losers observe an absent row and back off.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use timehub_core::error::AppError;
use timehub_core::result::AppResult;
use timehub_core::types::duration::elapsed_seconds_at;
use timehub_database::stores::{LogStore, TimerStore};
use timehub_entity::{ActiveTimer, StopAction, TimeLog};

use crate::sink::LogSink;

/// Result of a start transition.
#[derive(Debug, Clone, Copy)]
pub struct StartOutcome {
    /// Whether a previously running timer of the same member was
    /// auto-stopped to make room for the new one.
    pub stopped_previous: bool,
}

/// Drives the per-member timer state machine.
#[derive(Debug, Clone)]
pub struct TimerService {
    timers: Arc<dyn TimerStore>,
    logs: Arc<dyn LogStore>,
    sink: Option<Arc<dyn LogSink>>,
}

impl TimerService {
    /// Create a new timer service. Passing `None` for the sink disables
    /// outbound delivery of completed session records.
    pub fn new(
        timers: Arc<dyn TimerStore>,
        logs: Arc<dyn LogStore>,
        sink: Option<Arc<dyn LogSink>>,
    ) -> Self {
        Self { timers, logs, sink }
    }

    /// Start a timer for a member on a card.
    ///
    /// A member has at most one running timer, so any existing timer of
    /// the member is closed first with an auto-stop record. Restarting
    /// the card the member is already timing also resets the session
    /// clock: the old session is logged and a fresh one begins at now.
    pub async fn start(
        &self,
        card_id: &str,
        member_id: &str,
        member_name: &str,
    ) -> AppResult<StartOutcome> {
        let now = Utc::now();

        let stopped_previous = match self.timers.take_by_member(member_id).await? {
            Some(previous) => {
                self.close(previous, StopAction::AutoStopByNewTimer, now)
                    .await?;
                true
            }
            None => false,
        };

        let timer = ActiveTimer::begin(card_id, member_id, member_name, now);
        self.timers.put(&timer).await?;

        info!(card_id, member_id, stopped_previous, "timer started");
        Ok(StartOutcome { stopped_previous })
    }

    /// Stop the member's timer on a specific card and return the
    /// recorded duration in seconds.
    ///
    /// Fails with a not-found error when the member has no running
    /// timer on that card, including when their timer runs on a
    /// different card.
    pub async fn stop(&self, card_id: &str, member_id: &str) -> AppResult<i64> {
        let now = Utc::now();

        let timer = self
            .timers
            .take_exact(card_id, member_id)
            .await?
            .ok_or_else(|| AppError::not_found("No active timer for this card and member"))?;

        let log = self.close(timer, StopAction::ManualStop, now).await?;
        Ok(log.duration)
    }

    /// Forcibly close a timer observed by the sweep or an inline limit
    /// check.
    ///
    /// The delete is conditional on the exact session (member, card and
    /// start instant) still being present. When another transition got
    /// there first, nothing is logged and `None` is returned.
    pub async fn expire(
        &self,
        timer: &ActiveTimer,
        action: StopAction,
    ) -> AppResult<Option<TimeLog>> {
        let now = Utc::now();

        if !self.timers.take_session(timer).await? {
            return Ok(None);
        }

        let log = self.close(timer.clone(), action, now).await?;
        Ok(Some(log))
    }

    /// Record the closed session and hand it to the sink. The timer row
    /// is already gone by the time this runs.
    async fn close(
        &self,
        timer: ActiveTimer,
        action: StopAction,
        now: DateTime<Utc>,
    ) -> AppResult<TimeLog> {
        let duration = elapsed_seconds_at(&timer.start_time, now);
        let log = TimeLog::record(&timer, duration, action, now);

        self.logs.insert(&log).await?;

        if let Some(sink) = &self.sink {
            sink.deliver(log.clone());
        }

        info!(
            card_id = %log.card_id,
            member_id = %log.member_id,
            duration,
            action = %action,
            "session closed"
        );
        Ok(log)
    }
}
