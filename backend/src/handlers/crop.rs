//! Crop management HTTP handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::CityQuery;
use crate::middleware::CurrentUser;
use crate::models::{CreateCropInput, Crop};
use crate::services::monitoring::{CropDetail, CropTrend};
use crate::services::{CropService, MonitoringService};
use crate::AppState;

/// List all crops of the current grower
pub async fn list_crops(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Crop>>> {
    let service = CropService::new(state.db);
    let crops = service.list_crops(current_user.0.user_id).await?;
    Ok(Json(crops))
}

/// Register a new crop
pub async fn create_crop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    body: Result<Json<CreateCropInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Crop>)> {
    let Json(input) = body?;
    let service = CropService::new(state.db);
    let crop = service.create_crop(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(crop)))
}

/// Get a crop with its latest verdict, trend and optional weather
pub async fn get_crop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(crop_id): Path<Uuid>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<CropDetail>> {
    let service = MonitoringService::new(state.db, state.weather);
    let detail = service
        .crop_detail(current_user.0.user_id, crop_id, query.city())
        .await?;
    Ok(Json(detail))
}

/// Get the trend series of a crop
pub async fn get_crop_trend(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(crop_id): Path<Uuid>,
) -> AppResult<Json<CropTrend>> {
    let service = MonitoringService::new(state.db, state.weather);
    let trend = service.crop_trend(current_user.0.user_id, crop_id).await?;
    Ok(Json(trend))
}
