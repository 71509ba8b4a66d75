//! Response DTOs.

use serde::{Deserialize, Serialize};

use timehub_entity::TimeLog;

/// Response of `POST /timer/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerResponse {
    pub message: String,
    /// Whether an already-running timer of the member was auto-stopped.
    pub stopped_previous: bool,
}

/// Response of `POST /timer/stop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerResponse {
    pub message: String,
    /// Duration of the stopped session in seconds.
    pub new_total_seconds: i64,
}

/// Response of `GET /timer/logs/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLogsResponse {
    pub logs: Vec<TimeLog>,
    /// Raw configured limit string, empty when none.
    pub time_limit: String,
}

/// Response of `PUT /timer/logs/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogResponse {
    pub message: String,
    /// The corrected log record.
    pub log: TimeLog,
}

/// Response of `POST /timer/settings` and `DELETE /timer/logs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
