//! Per-card settings management.

use std::sync::Arc;

use tracing::info;

use timehub_core::result::AppResult;
use timehub_database::stores::SettingsStore;
use timehub_entity::CardSettings;

/// Saves and reads per-card settings.
#[derive(Debug, Clone)]
pub struct SettingsService {
    settings: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// Save a card's time limit. A blank limit clears the setting; the
    /// stored string is kept raw and only interpreted at enforcement
    /// time, so an unparseable value degrades to no limit rather than
    /// being rejected here.
    pub async fn save(&self, card_id: &str, time_limit: Option<String>) -> AppResult<CardSettings> {
        let time_limit = time_limit.filter(|s| !s.trim().is_empty());
        let settings = CardSettings {
            card_id: card_id.to_string(),
            time_limit,
        };
        self.settings.upsert(&settings).await?;

        info!(card_id, time_limit = ?settings.time_limit, "card settings saved");
        Ok(settings)
    }
}
