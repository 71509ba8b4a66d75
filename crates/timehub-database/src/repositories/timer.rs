//! Active timer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use timehub_core::error::{AppError, ErrorKind};
use timehub_core::result::AppResult;
use timehub_entity::ActiveTimer;

use crate::stores::TimerStore;

/// Repository for active timer rows.
#[derive(Debug, Clone)]
pub struct TimerRepository {
    pool: PgPool,
}

impl TimerRepository {
    /// Create a new timer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimerStore for TimerRepository {
    async fn find_all(&self) -> AppResult<Vec<ActiveTimer>> {
        sqlx::query_as::<_, ActiveTimer>(
            "SELECT card_id, member_id, member_name, started_at FROM active_timers",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active timers", e))
    }

    async fn find_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>> {
        sqlx::query_as::<_, ActiveTimer>(
            "SELECT card_id, member_id, member_name, started_at FROM active_timers \
             WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member timer", e))
    }

    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<ActiveTimer>> {
        sqlx::query_as::<_, ActiveTimer>(
            "SELECT card_id, member_id, member_name, started_at FROM active_timers \
             WHERE card_id = ANY($1)",
        )
        .bind(card_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find card timers", e))
    }

    async fn put(&self, timer: &ActiveTimer) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO active_timers (member_id, card_id, member_name, started_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (member_id) DO UPDATE SET \
                 card_id = EXCLUDED.card_id, \
                 member_name = EXCLUDED.member_name, \
                 started_at = EXCLUDED.started_at",
        )
        .bind(&timer.member_id)
        .bind(&timer.card_id)
        .bind(&timer.member_name)
        .bind(&timer.start_time)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store timer", e))?;
        Ok(())
    }

    async fn take_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>> {
        sqlx::query_as::<_, ActiveTimer>(
            "DELETE FROM active_timers WHERE member_id = $1 \
             RETURNING card_id, member_id, member_name, started_at",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to take member timer", e))
    }

    async fn take_exact(
        &self,
        card_id: &str,
        member_id: &str,
    ) -> AppResult<Option<ActiveTimer>> {
        sqlx::query_as::<_, ActiveTimer>(
            "DELETE FROM active_timers WHERE card_id = $1 AND member_id = $2 \
             RETURNING card_id, member_id, member_name, started_at",
        )
        .bind(card_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to take timer", e))
    }

    async fn take_session(&self, timer: &ActiveTimer) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM active_timers \
             WHERE card_id = $1 AND member_id = $2 AND started_at = $3",
        )
        .bind(&timer.card_id)
        .bind(&timer.member_id)
        .bind(&timer.start_time)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to take session", e))?;

        Ok(result.rows_affected() > 0)
    }
}
