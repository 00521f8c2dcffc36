//! Dashboard HTTP handler

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::handlers::CityQuery;
use crate::middleware::CurrentUser;
use crate::services::dashboard::Dashboard;
use crate::services::DashboardService;
use crate::AppState;

/// Get the grower's dashboard, with weather for `?city=` when given
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<Dashboard>> {
    let service = DashboardService::new(state.db, state.weather);
    let dashboard = service
        .dashboard(current_user.0.user_id, query.city())
        .await?;
    Ok(Json(dashboard))
}
