//! Route definitions for the Crop Health Monitoring Platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Stateless health analysis (public)
        .route("/analyze-crop-health", post(handlers::analyze_crop_health))
        // Protected routes - grower data
        .merge(protected_routes(state))
}

/// Routes requiring a bearer token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/weather", get(handlers::get_weather))
        .nest("/crops", crop_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Crop and observation routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops).post(handlers::create_crop))
        .route("/:crop_id", get(handlers::get_crop))
        .route("/:crop_id/trend", get(handlers::get_crop_trend))
        .route(
            "/:crop_id/observations",
            get(handlers::list_observations).post(handlers::record_observation),
        )
}
