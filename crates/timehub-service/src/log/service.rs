//! Log history listing and corrections.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use timehub_core::error::AppError;
use timehub_core::result::AppResult;
use timehub_database::stores::{LogStore, SettingsStore};
use timehub_entity::TimeLog;

/// Log history for one card plus the card's configured limit.
#[derive(Debug, Clone)]
pub struct CardLogs {
    pub logs: Vec<TimeLog>,
    /// Raw limit string as stored, empty when no limit is configured.
    pub time_limit: String,
}

/// Read and correct logged sessions.
#[derive(Debug, Clone)]
pub struct LogService {
    logs: Arc<dyn LogStore>,
    settings: Arc<dyn SettingsStore>,
}

impl LogService {
    pub fn new(logs: Arc<dyn LogStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { logs, settings }
    }

    /// List a card's logs oldest first together with its limit setting.
    pub async fn card_logs(&self, card_id: &str) -> AppResult<CardLogs> {
        let logs = self.logs.find_by_card(card_id).await?;
        let time_limit = self
            .settings
            .find(card_id)
            .await?
            .and_then(|s| s.time_limit)
            .unwrap_or_default();
        Ok(CardLogs { logs, time_limit })
    }

    /// Correct the duration of a logged session.
    pub async fn update_duration(&self, id: Uuid, duration: i64) -> AppResult<TimeLog> {
        if duration < 0 {
            return Err(AppError::validation("Duration must not be negative"));
        }

        let log = self
            .logs
            .update_duration(id, duration)
            .await?
            .ok_or_else(|| AppError::not_found("Time log not found"))?;

        info!(log_id = %id, duration, "time log corrected");
        Ok(log)
    }

    /// Delete a logged session.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.logs.delete(id).await? {
            return Err(AppError::not_found("Time log not found"));
        }
        info!(log_id = %id, "time log deleted");
        Ok(())
    }
}
