//! Validation utilities for the Crop Health Monitoring Platform
//!
//! Input is checked here before it reaches the health evaluator or the
//! observation store. Humidity and soil moisture ranges are deliberately not
//! enforced; only non-numeric readings are rejected.

use rust_decimal::Decimal;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{CreateCropInput, HealthMetrics, RecordObservationInput};

/// A rejected input field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

// ============================================================================
// Reading Validations
// ============================================================================

/// Validate that a reading is a usable number
pub fn validate_reading(value: f64) -> Result<(), &'static str> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("Reading must be a finite number")
    }
}

/// Validate all readings needed for a health evaluation
pub fn validate_metrics(metrics: &HealthMetrics) -> Result<(), FieldError> {
    let readings = [
        ("temperature", metrics.temperature),
        ("humidity", metrics.humidity),
        ("soilMoisture", metrics.soil_moisture),
    ];

    for (field, value) in readings {
        validate_reading(value).map_err(|message| FieldError::new(field, message))?;
    }
    Ok(())
}

// ============================================================================
// Crop Validations
// ============================================================================

/// Validate planted area is positive
pub fn validate_area(area_hectares: Decimal) -> Result<(), &'static str> {
    if area_hectares <= Decimal::ZERO {
        return Err("Area must be greater than zero");
    }
    Ok(())
}

/// Validate a free-text label is not blank
pub fn validate_label(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Value cannot be blank");
    }
    Ok(())
}

/// Validate input for registering a crop
pub fn validate_crop_input(input: &CreateCropInput) -> Result<(), FieldError> {
    input.validate().map_err(first_field_error)?;

    validate_label(&input.name).map_err(|m| FieldError::new("name", m))?;
    validate_label(&input.soil_type).map_err(|m| FieldError::new("soilType", m))?;
    validate_area(input.area_hectares).map_err(|m| FieldError::new("areaHectares", m))?;
    Ok(())
}

/// Validate input for recording an observation
pub fn validate_observation_input(input: &RecordObservationInput) -> Result<(), FieldError> {
    input.validate().map_err(first_field_error)?;

    validate_metrics(&input.metrics())?;
    validate_label(&input.growth_stage).map_err(|m| FieldError::new("growthStage", m))?;
    Ok(())
}

/// Reduce derive-based validation errors to the alphabetically first field
fn first_field_error(errors: ValidationErrors) -> FieldError {
    let mut fields: Vec<&'static str> = errors.field_errors().into_keys().collect();
    fields.sort_unstable();

    let field = fields.first().copied().map(request_field).unwrap_or("input");
    FieldError::new(field, "Length must be between 1 and 100 characters")
}

/// Name of a struct field as it appears in request bodies
fn request_field(field: &'static str) -> &'static str {
    match field {
        "soil_type" => "soilType",
        "growth_stage" => "growthStage",
        other => other,
    }
}
