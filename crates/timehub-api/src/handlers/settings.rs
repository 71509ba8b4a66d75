//! Card settings handlers.

use axum::Json;
use axum::extract::State;

use timehub_core::error::AppError;

use crate::dto::request::SaveSettingsRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /timer/settings
pub async fn save_settings(
    State(state): State<AppState>,
    Json(request): Json<SaveSettingsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if request.card_id.trim().is_empty() {
        return Err(AppError::validation("cardId is required").into());
    }

    state
        .settings_service
        .save(&request.card_id, request.time_limit)
        .await?;

    Ok(Json(MessageResponse {
        message: "Settings saved".to_string(),
    }))
}
