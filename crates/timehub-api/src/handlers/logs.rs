//! Log history and correction handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use timehub_core::error::AppError;

use crate::dto::request::UpdateLogRequest;
use crate::dto::response::{CardLogsResponse, MessageResponse, UpdateLogResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /timer/logs/{card_id}
pub async fn card_logs(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> ApiResult<Json<CardLogsResponse>> {
    let card_logs = state.log_service.card_logs(&card_id).await?;
    Ok(Json(CardLogsResponse {
        logs: card_logs.logs,
        time_limit: card_logs.time_limit,
    }))
}

/// PUT /timer/logs/{log_id}
pub async fn update_log(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
    Json(request): Json<UpdateLogRequest>,
) -> ApiResult<Json<UpdateLogResponse>> {
    let id = parse_log_id(&log_id)?;
    let log = state.log_service.update_duration(id, request.duration).await?;
    Ok(Json(UpdateLogResponse {
        message: "Time log updated".to_string(),
        log,
    }))
}

/// DELETE /timer/logs/{log_id}
pub async fn delete_log(
    State(state): State<AppState>,
    Path(log_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_log_id(&log_id)?;
    state.log_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Time log deleted".to_string(),
    }))
}

/// A malformed id can never name an existing log.
fn parse_log_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("Time log not found").into())
}
