//! Monitoring observation models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::HealthMetrics;

/// One dated set of environmental readings for a crop.
///
/// Several observations may share a date; they are ordered by insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub observed_on: NaiveDate,
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    /// %
    pub soil_moisture: f64,
    pub growth_stage: String,
    pub created_at: DateTime<Utc>,
}

impl Observation {
    /// Readings relevant to health evaluation
    pub fn metrics(&self) -> HealthMetrics {
        HealthMetrics::new(self.temperature, self.humidity, self.soil_moisture)
    }
}

/// Input for recording an observation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordObservationInput {
    /// Defaults to the current date when omitted
    pub observed_on: Option<NaiveDate>,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    #[validate(length(min = 1, max = 100))]
    pub growth_stage: String,
}

impl RecordObservationInput {
    pub fn metrics(&self) -> HealthMetrics {
        HealthMetrics::new(self.temperature, self.humidity, self.soil_moisture)
    }
}
