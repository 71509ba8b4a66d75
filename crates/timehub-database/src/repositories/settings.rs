//! Card settings repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use timehub_core::error::{AppError, ErrorKind};
use timehub_core::result::AppResult;
use timehub_entity::CardSettings;

use crate::stores::SettingsStore;

/// Repository for per-card settings rows.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn upsert(&self, settings: &CardSettings) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO card_settings (card_id, time_limit) VALUES ($1, $2) \
             ON CONFLICT (card_id) DO UPDATE SET time_limit = EXCLUDED.time_limit",
        )
        .bind(&settings.card_id)
        .bind(&settings.time_limit)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save settings", e))?;
        Ok(())
    }

    async fn find(&self, card_id: &str) -> AppResult<Option<CardSettings>> {
        sqlx::query_as::<_, CardSettings>(
            "SELECT card_id, time_limit FROM card_settings WHERE card_id = $1",
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find settings", e))
    }

    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<CardSettings>> {
        sqlx::query_as::<_, CardSettings>(
            "SELECT card_id, time_limit FROM card_settings WHERE card_id = ANY($1)",
        )
        .bind(card_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list settings", e))
    }
}
