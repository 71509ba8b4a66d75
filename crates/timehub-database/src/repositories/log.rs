//! Time log repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use timehub_core::error::{AppError, ErrorKind};
use timehub_core::result::AppResult;
use timehub_entity::TimeLog;

use crate::stores::LogStore;

/// Repository for time log rows.
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    /// Create a new log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for LogRepository {
    async fn insert(&self, log: &TimeLog) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO time_logs (id, card_id, member_id, member_name, duration, logged_at, action) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(log.id)
        .bind(&log.card_id)
        .bind(&log.member_id)
        .bind(&log.member_name)
        .bind(log.duration)
        .bind(log.logged_at)
        .bind(log.action)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert time log", e))?;
        Ok(())
    }

    async fn find_by_card(&self, card_id: &str) -> AppResult<Vec<TimeLog>> {
        sqlx::query_as::<_, TimeLog>(
            "SELECT id, card_id, member_id, member_name, duration, logged_at, action \
             FROM time_logs WHERE card_id = $1 ORDER BY logged_at ASC",
        )
        .bind(card_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list card logs", e))
    }

    async fn sum_by_cards(&self, card_ids: &[String]) -> AppResult<HashMap<String, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT card_id, COALESCE(SUM(duration), 0)::BIGINT \
             FROM time_logs WHERE card_id = ANY($1) GROUP BY card_id",
        )
        .bind(card_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate durations", e)
        })?;

        Ok(rows.into_iter().collect())
    }

    async fn update_duration(&self, id: Uuid, duration: i64) -> AppResult<Option<TimeLog>> {
        sqlx::query_as::<_, TimeLog>(
            "UPDATE time_logs SET duration = $2 WHERE id = $1 \
             RETURNING id, card_id, member_id, member_name, duration, logged_at, action",
        )
        .bind(id)
        .bind(duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update time log", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM time_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete time log", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
