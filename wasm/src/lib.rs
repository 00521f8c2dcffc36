//! WebAssembly module for the Crop Health Monitoring Platform
//!
//! Provides client-side computation for:
//! - Crop health evaluation
//! - Trend series for charts
//! - Crop view assembly from fetched observations

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("crop monitor wasm initialized");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| {
        let message = format!("Invalid {} JSON: {}", what, e);
        log(&message);
        JsValue::from_str(&message)
    })
}

/// Evaluate crop health, returning the verdict as JSON
#[wasm_bindgen]
pub fn evaluate_crop_health(
    temperature: f64,
    humidity: f64,
    soil_moisture: f64,
) -> Result<String, JsValue> {
    let metrics = HealthMetrics::new(temperature, humidity, soil_moisture);
    validate_metrics(&metrics).map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&evaluate(&metrics))
}

/// Health status label ("Good", "Moderate" or "Poor") for readings
#[wasm_bindgen]
pub fn health_status(temperature: f64, humidity: f64, soil_moisture: f64) -> String {
    let metrics = HealthMetrics::new(temperature, humidity, soil_moisture);
    evaluate(&metrics).status.to_string()
}

/// Build a chart series from a JSON array of observations
#[wasm_bindgen]
pub fn aggregate_trend(observations_json: &str) -> Result<String, JsValue> {
    let observations: Vec<Observation> = parse_json(observations_json, "observations")?;
    to_json(&aggregate(&observations))
}

/// Build a crop view from crop and observation JSON
#[wasm_bindgen]
pub fn build_crop_view(crop_json: &str, observations_json: &str) -> Result<String, JsValue> {
    let crop: Crop = parse_json(crop_json, "crop")?;
    let observations: Vec<Observation> = parse_json(observations_json, "observations")?;
    to_json(&build_view(crop, &observations))
}
