//! Stateless crop health analysis

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::AppResult;
use crate::models::{evaluate, HealthMetrics, HealthVerdict};

/// Evaluate crop health from a `{temperature, humidity, soilMoisture}` body
pub async fn analyze_crop_health(
    body: Result<Json<HealthMetrics>, JsonRejection>,
) -> AppResult<Json<HealthVerdict>> {
    let Json(metrics) = body?;
    shared::validate_metrics(&metrics)?;

    tracing::debug!(?metrics, "Analyzing crop health");
    let verdict = evaluate(&metrics);
    tracing::debug!(status = %verdict.status, rule = ?verdict.rule, "Analysis result");

    Ok(Json(verdict))
}
