//! Crop plot models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A tracked crop plot owned by a grower
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub soil_type: String,
    /// Planted area in hectares, always positive
    pub area_hectares: Decimal,
    pub sowing_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Crop {
    /// Whole days elapsed between sowing and `today`, or `None` before sowing
    pub fn days_since_sowing(&self, today: NaiveDate) -> Option<i64> {
        let days = (today - self.sowing_date).num_days();
        (days >= 0).then_some(days)
    }
}

/// Input for registering a crop
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCropInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub soil_type: String,
    pub area_hectares: Decimal,
    pub sowing_date: NaiveDate,
}
