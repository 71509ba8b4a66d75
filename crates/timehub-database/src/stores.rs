//! Store traits the services are written against.
//!
//! The external record store is the sole owner of all three entity sets;
//! these traits are the contract the lifecycle engine, sweep, and status
//! projector use to reach it. The PostgreSQL implementations live in
//! [`crate::repositories`]; tests substitute in-memory implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use timehub_core::result::AppResult;
use timehub_entity::{ActiveTimer, CardSettings, TimeLog};

/// Operations over the active-timer record set.
///
/// The `take_*` methods are conditional deletes: they remove the row and
/// report whether it was still present, in one store round trip. They are
/// the serialization point that keeps Stop and Sweep-expiry from both
/// logging the same session.
#[async_trait]
pub trait TimerStore: Send + Sync + std::fmt::Debug {
    /// All active timers, for the sweep.
    async fn find_all(&self) -> AppResult<Vec<ActiveTimer>>;

    /// The member's active timer, if any. At most one by invariant.
    async fn find_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>>;

    /// Active timers on any of the given cards.
    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<ActiveTimer>>;

    /// Insert a timer, replacing any existing row for the same member.
    async fn put(&self, timer: &ActiveTimer) -> AppResult<()>;

    /// Delete and return the member's timer, whatever card it targets.
    async fn take_by_member(&self, member_id: &str) -> AppResult<Option<ActiveTimer>>;

    /// Delete and return the timer matching both card and member.
    async fn take_exact(&self, card_id: &str, member_id: &str)
    -> AppResult<Option<ActiveTimer>>;

    /// Delete the exact observed session (card, member, and start
    /// instant). Returns false when the row is gone or has been replaced
    /// by a newer session, in which case the caller must not log.
    async fn take_session(&self, timer: &ActiveTimer) -> AppResult<bool>;
}

/// Operations over the historical log record set.
#[async_trait]
pub trait LogStore: Send + Sync + std::fmt::Debug {
    /// Append a completed session record.
    async fn insert(&self, log: &TimeLog) -> AppResult<()>;

    /// All logs for a card, oldest first.
    async fn find_by_card(&self, card_id: &str) -> AppResult<Vec<TimeLog>>;

    /// Total logged seconds per card, for the given cards. Cards with no
    /// logs are simply absent from the map.
    async fn sum_by_cards(&self, card_ids: &[String]) -> AppResult<HashMap<String, i64>>;

    /// Administrative duration correction. `None` when the id is unknown.
    async fn update_duration(&self, id: Uuid, duration: i64) -> AppResult<Option<TimeLog>>;

    /// Administrative delete. False when the id is unknown.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Operations over the per-card settings record set.
#[async_trait]
pub trait SettingsStore: Send + Sync + std::fmt::Debug {
    /// Insert or overwrite the settings row for a card.
    async fn upsert(&self, settings: &CardSettings) -> AppResult<()>;

    /// Settings for one card.
    async fn find(&self, card_id: &str) -> AppResult<Option<CardSettings>>;

    /// Settings for any of the given cards.
    async fn find_by_cards(&self, card_ids: &[String]) -> AppResult<Vec<CardSettings>>;
}
