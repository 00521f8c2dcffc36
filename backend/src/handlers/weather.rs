//! HTTP handlers for weather lookups

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::WeatherReport;
use crate::services::monitoring::weather_for;
use crate::AppState;

/// Query parameters naming a location
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

impl CityQuery {
    /// The city, if one was given and is not blank
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Get current weather for a city
pub async fn get_weather(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<WeatherReport>> {
    let city = query.city().ok_or_else(|| AppError::Validation {
        field: "city".to_string(),
        message: "City parameter is required".to_string(),
    })?;

    let report = weather_for(state.weather.as_ref(), city).await?;
    Ok(Json(report))
}
