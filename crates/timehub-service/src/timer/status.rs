//! Bulk status projection.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use timehub_core::result::AppResult;
use timehub_database::stores::{LogStore, TimerStore};
use timehub_entity::ActiveTimer;

use crate::timer::enforcement::{sum_durations, LimitEnforcer};

/// Projection of one card's timer state as seen by one member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStatus {
    /// The requesting member's timer runs on this card.
    pub is_running_here: bool,
    /// The requesting member's timer runs on some other card.
    pub is_other_timer_running: bool,
    /// Whatever timer is running on this card, regardless of member.
    pub active_timer_data: Option<ActiveTimer>,
    /// Sum of logged durations for this card, excluding running timers.
    pub total_past_seconds: i64,
}

/// Builds per-card status maps for board rendering.
#[derive(Debug, Clone)]
pub struct StatusService {
    timers: Arc<dyn TimerStore>,
    logs: Arc<dyn LogStore>,
    enforcer: Arc<LimitEnforcer>,
    inline_enforcement: bool,
    chunk_size: usize,
}

impl StatusService {
    pub fn new(
        timers: Arc<dyn TimerStore>,
        logs: Arc<dyn LogStore>,
        enforcer: Arc<LimitEnforcer>,
        inline_enforcement: bool,
        chunk_size: usize,
    ) -> Self {
        Self {
            timers,
            logs,
            enforcer,
            inline_enforcement,
            chunk_size,
        }
    }

    /// Project the status of every requested card from the requesting
    /// member's point of view.
    ///
    /// When inline enforcement is on, limits are enforced for the
    /// requested cards first, so a just-expired timer never shows up as
    /// still running in the response.
    pub async fn bulk_status(
        &self,
        member_id: &str,
        card_ids: &[String],
    ) -> AppResult<HashMap<String, CardStatus>> {
        if card_ids.is_empty() {
            return Ok(HashMap::new());
        }

        if self.inline_enforcement {
            let expired = self.enforcer.enforce_cards(card_ids).await?;
            if expired > 0 {
                debug!(expired, "inline enforcement expired timers");
            }
        }

        let member_timer = self.timers.find_by_member(member_id).await?;
        let card_timers: HashMap<String, ActiveTimer> = self
            .timers
            .find_by_cards(card_ids)
            .await?
            .into_iter()
            .map(|t| (t.card_id.clone(), t))
            .collect();
        let past = sum_durations(&self.logs, card_ids, self.chunk_size).await?;

        let mut statuses = HashMap::with_capacity(card_ids.len());
        for card_id in card_ids {
            let is_running_here = member_timer
                .as_ref()
                .is_some_and(|t| t.card_id == *card_id);
            let is_other_timer_running = member_timer
                .as_ref()
                .is_some_and(|t| t.card_id != *card_id);

            statuses.insert(
                card_id.clone(),
                CardStatus {
                    is_running_here,
                    is_other_timer_running,
                    active_timer_data: card_timers.get(card_id).cloned(),
                    total_past_seconds: past.get(card_id).copied().unwrap_or(0),
                },
            );
        }
        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn card_status_serializes_camel_case() {
        let timer = ActiveTimer::begin("card-1", "member-1", "Alice", Utc::now());
        let status = CardStatus {
            is_running_here: true,
            is_other_timer_running: false,
            active_timer_data: Some(timer),
            total_past_seconds: 90,
        };

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["isRunningHere"], true);
        assert_eq!(value["isOtherTimerRunning"], false);
        assert_eq!(value["totalPastSeconds"], 90);
        assert_eq!(value["activeTimerData"]["memberName"], "Alice");
    }
}
