//! Request DTOs.
//!
//! The wire format is camelCase throughout; field names here follow the
//! power-up client payloads.

use serde::Deserialize;

/// Body of `POST /timer/start`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest {
    pub card_id: String,
    pub member_id: String,
    #[serde(default)]
    pub member_name: String,
}

/// Body of `POST /timer/stop`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerRequest {
    pub card_id: String,
    pub member_id: String,
}

/// Query of `GET /timer/status/bulk`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusQuery {
    pub member_id: String,
    /// Comma-separated card ids. Blank entries are ignored.
    #[serde(default)]
    pub card_ids: String,
}

impl BulkStatusQuery {
    /// Split the comma-separated id list, dropping blanks.
    pub fn card_id_list(&self) -> Vec<String> {
        self.card_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body of `PUT /timer/logs/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogRequest {
    /// Corrected duration in seconds.
    pub duration: i64,
}

/// Body of `POST /timer/settings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    pub card_id: String,
    /// Limit string such as "01:30" or "01:30:00". Blank clears it.
    #[serde(default)]
    pub time_limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_query_splits_and_trims_card_ids() {
        let query = BulkStatusQuery {
            member_id: "m1".to_string(),
            card_ids: "a, b,,c ,".to_string(),
        };
        assert_eq!(query.card_id_list(), vec!["a", "b", "c"]);
    }

    #[test]
    fn bulk_query_empty_list_when_blank() {
        let query = BulkStatusQuery {
            member_id: "m1".to_string(),
            card_ids: String::new(),
        };
        assert!(query.card_id_list().is_empty());
    }
}
