//! Limit enforcement engine.
//!
//! One engine serves both the periodic sweep (all running timers) and
//! the inline check performed during status projection (timers on the
//! requested cards only). A timer whose card has no parseable limit is
//! never touched.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use timehub_core::config::sweep::SweepMode;
use timehub_core::result::AppResult;
use timehub_core::types::limit::{parse_deadline, TimeLimit};
use timehub_database::stores::{LogStore, SettingsStore, TimerStore};
use timehub_entity::{ActiveTimer, StopAction};

use crate::timer::service::TimerService;

/// Aggregate logged durations for `card_ids`, issuing store queries in
/// bounded chunks so one oversized request cannot turn into one
/// oversized query.
pub(crate) async fn sum_durations(
    logs: &Arc<dyn LogStore>,
    card_ids: &[String],
    chunk_size: usize,
) -> AppResult<HashMap<String, i64>> {
    let mut totals = HashMap::with_capacity(card_ids.len());
    for chunk in card_ids.chunks(chunk_size.max(1)) {
        totals.extend(logs.sum_by_cards(chunk).await?);
    }
    Ok(totals)
}

/// Evaluates time limits against running timers and expires offenders.
#[derive(Debug, Clone)]
pub struct LimitEnforcer {
    timers: Arc<dyn TimerStore>,
    logs: Arc<dyn LogStore>,
    settings: Arc<dyn SettingsStore>,
    service: Arc<TimerService>,
    mode: SweepMode,
    chunk_size: usize,
}

impl LimitEnforcer {
    pub fn new(
        timers: Arc<dyn TimerStore>,
        logs: Arc<dyn LogStore>,
        settings: Arc<dyn SettingsStore>,
        service: Arc<TimerService>,
        mode: SweepMode,
        chunk_size: usize,
    ) -> Self {
        Self {
            timers,
            logs,
            settings,
            service,
            mode,
            chunk_size,
        }
    }

    /// Run one full enforcement cycle over every running timer.
    /// Returns the number of timers expired.
    pub async fn run_cycle(&self) -> AppResult<u32> {
        let timers = self.timers.find_all().await?;
        self.enforce(timers).await
    }

    /// Enforce limits only for timers running on the given cards.
    pub async fn enforce_cards(&self, card_ids: &[String]) -> AppResult<u32> {
        if card_ids.is_empty() {
            return Ok(0);
        }
        let timers = self.timers.find_by_cards(card_ids).await?;
        self.enforce(timers).await
    }

    async fn enforce(&self, timers: Vec<ActiveTimer>) -> AppResult<u32> {
        if timers.is_empty() {
            return Ok(0);
        }

        let card_ids: Vec<String> = timers
            .iter()
            .map(|t| t.card_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let limits: HashMap<String, String> = self
            .settings
            .find_by_cards(&card_ids)
            .await?
            .into_iter()
            .filter_map(|s| s.time_limit.map(|limit| (s.card_id, limit)))
            .collect();

        match self.mode {
            SweepMode::Budget => self.enforce_budgets(timers, &limits).await,
            SweepMode::Deadline => self.enforce_deadlines(timers, &limits).await,
        }
    }

    /// Budget mode: a card's limit caps the total tracked time on the
    /// card, logged sessions plus the running one.
    async fn enforce_budgets(
        &self,
        timers: Vec<ActiveTimer>,
        limits: &HashMap<String, String>,
    ) -> AppResult<u32> {
        let limited_cards: Vec<String> = timers
            .iter()
            .filter(|t| {
                matches!(
                    TimeLimit::parse(limits.get(&t.card_id).map(String::as_str)),
                    TimeLimit::Budget(_)
                )
            })
            .map(|t| t.card_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if limited_cards.is_empty() {
            return Ok(0);
        }

        let past = sum_durations(&self.logs, &limited_cards, self.chunk_size).await?;

        let mut expired = 0;
        for timer in timers {
            let limit = TimeLimit::parse(limits.get(&timer.card_id).map(String::as_str));
            let TimeLimit::Budget(budget) = limit else {
                continue;
            };

            let total = past.get(&timer.card_id).copied().unwrap_or(0) + timer.elapsed_seconds();
            if !limit.is_reached_by(total) {
                continue;
            }

            match self
                .service
                .expire(&timer, StopAction::AutoStopLimitReached)
                .await
            {
                Ok(Some(log)) => {
                    expired += 1;
                    info!(
                        card_id = %log.card_id,
                        member_id = %log.member_id,
                        total_seconds = total,
                        limit_seconds = budget,
                        "time limit reached, timer auto-stopped"
                    );
                }
                // Lost the race to another transition. Nothing to do.
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        card_id = %timer.card_id,
                        member_id = %timer.member_id,
                        error = %e,
                        "failed to expire timer, will retry next cycle"
                    );
                }
            }
        }
        Ok(expired)
    }

    /// Deadline mode: the limit string is a local wall-clock cutoff and
    /// every running timer on the card stops once it passes.
    async fn enforce_deadlines(
        &self,
        timers: Vec<ActiveTimer>,
        limits: &HashMap<String, String>,
    ) -> AppResult<u32> {
        let now = Local::now().time();

        let mut expired = 0;
        for timer in timers {
            let Some(cutoff) = limits.get(&timer.card_id).and_then(|s| parse_deadline(s)) else {
                continue;
            };
            if now < cutoff {
                continue;
            }

            match self
                .service
                .expire(&timer, StopAction::AutoStopDeadline)
                .await
            {
                Ok(Some(log)) => {
                    expired += 1;
                    info!(
                        card_id = %log.card_id,
                        member_id = %log.member_id,
                        cutoff = %cutoff,
                        "deadline passed, timer auto-stopped"
                    );
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        card_id = %timer.card_id,
                        member_id = %timer.member_id,
                        error = %e,
                        "failed to expire timer, will retry next cycle"
                    );
                }
            }
        }
        Ok(expired)
    }
}
