//! Timer lifecycle and status handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};

use timehub_core::error::{AppError, ErrorKind};
use timehub_service::timer::CardStatus;

use crate::dto::request::{BulkStatusQuery, StartTimerRequest, StopTimerRequest};
use crate::error::ApiResult;
use crate::dto::response::{StartTimerResponse, StopTimerResponse};
use crate::state::AppState;

/// POST /timer/start
pub async fn start_timer(
    State(state): State<AppState>,
    Json(request): Json<StartTimerRequest>,
) -> ApiResult<Json<StartTimerResponse>> {
    if request.card_id.trim().is_empty() || request.member_id.trim().is_empty() {
        return Err(AppError::validation("cardId and memberId are required").into());
    }

    let outcome = state
        .timer_service
        .start(&request.card_id, &request.member_id, &request.member_name)
        .await?;

    Ok(Json(StartTimerResponse {
        message: "Timer started".to_string(),
        stopped_previous: outcome.stopped_previous,
    }))
}

/// POST /timer/stop
///
/// Stopping a timer that is not running is a client mistake, not a
/// missing resource, so the not-found from the service surfaces as 400.
pub async fn stop_timer(
    State(state): State<AppState>,
    Json(request): Json<StopTimerRequest>,
) -> ApiResult<Json<StopTimerResponse>> {
    if request.card_id.trim().is_empty() || request.member_id.trim().is_empty() {
        return Err(AppError::validation("cardId and memberId are required").into());
    }

    let duration = state
        .timer_service
        .stop(&request.card_id, &request.member_id)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::NotFound => AppError::validation(e.message),
            _ => e,
        })?;

    Ok(Json(StopTimerResponse {
        message: "Timer stopped".to_string(),
        new_total_seconds: duration,
    }))
}

/// GET /timer/status/bulk?memberId=...&cardIds=a,b,c
pub async fn bulk_status(
    State(state): State<AppState>,
    Query(query): Query<BulkStatusQuery>,
) -> ApiResult<Json<HashMap<String, CardStatus>>> {
    let card_ids = query.card_id_list();
    let statuses = state
        .status_service
        .bulk_status(&query.member_id, &card_ids)
        .await?;
    Ok(Json(statuses))
}
