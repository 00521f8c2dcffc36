//! Observation HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{CropView, Observation, RecordObservationInput};
use crate::services::MonitoringService;
use crate::AppState;

/// List the observations of a crop in chronological order
pub async fn list_observations(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(crop_id): Path<Uuid>,
) -> AppResult<Json<Vec<Observation>>> {
    let service = MonitoringService::new(state.db, state.weather);
    let observations = service
        .list_observations(current_user.0.user_id, crop_id)
        .await?;
    Ok(Json(observations))
}

/// Record an observation and return the rebuilt crop view
pub async fn record_observation(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(crop_id): Path<Uuid>,
    body: Result<Json<RecordObservationInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CropView>)> {
    let Json(input) = body?;
    let service = MonitoringService::new(state.db, state.weather);
    let view = service
        .record_observation(current_user.0.user_id, crop_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}
