//! Per-card settings entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use timehub_core::types::TimeLimit;

/// Per-card configuration. One row per card, upsert semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardSettings {
    /// The card these settings apply to.
    pub card_id: String,
    /// Raw time limit string as entered (`HH:MM` or `HH:MM:SS`), or
    /// `None` for unlimited. Kept verbatim so the dialog can re-display
    /// exactly what was saved.
    pub time_limit: Option<String>,
}

impl CardSettings {
    /// Parse the stored limit string.
    pub fn limit(&self) -> TimeLimit {
        TimeLimit::parse(self.time_limit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_parses_stored_string() {
        let settings = CardSettings {
            card_id: "c".into(),
            time_limit: Some("00:01:00".into()),
        };
        assert_eq!(settings.limit(), TimeLimit::Budget(60));

        let unset = CardSettings {
            card_id: "c".into(),
            time_limit: None,
        };
        assert_eq!(unset.limit(), TimeLimit::Unlimited);
    }
}
