//! Grower dashboard: crop overview with ambient weather

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::models::{Crop, WeatherReport};
use crate::services::monitoring::{weather_for, UpstreamIssue, UpstreamSource};
use crate::services::CropService;

/// Number of crops listed on the dashboard
pub const RECENT_CROP_LIMIT: i64 = 3;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    crops: CropService,
    weather: Option<WeatherClient>,
}

/// Crop entry on the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSummary {
    pub id: Uuid,
    pub name: String,
    pub soil_type: String,
    pub area_hectares: Decimal,
    pub sowing_date: NaiveDate,
    pub days_since_sowing: Option<i64>,
}

impl CropSummary {
    pub fn from_crop(crop: Crop, today: NaiveDate) -> Self {
        Self {
            days_since_sowing: crop.days_since_sowing(today),
            id: crop.id,
            name: crop.name,
            soil_type: crop.soil_type,
            area_hectares: crop.area_hectares,
            sowing_date: crop.sowing_date,
        }
    }
}

/// Dashboard overview
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub crop_count: i64,
    pub recent_crops: Vec<CropSummary>,
    pub weather: Option<WeatherReport>,
    pub issues: Vec<UpstreamIssue>,
}

impl DashboardService {
    /// Create a new DashboardService
    pub fn new(db: sqlx::PgPool, weather: Option<WeatherClient>) -> Self {
        Self {
            crops: CropService::new(db),
            weather,
        }
    }

    /// Build the dashboard of a grower. Weather failures are reported in
    /// `issues` and never fail the dashboard.
    pub async fn dashboard(&self, owner_id: Uuid, city: Option<&str>) -> AppResult<Dashboard> {
        let crop_count = self.crops.count_crops(owner_id).await?;
        let today = Utc::now().date_naive();
        let recent_crops = self
            .crops
            .recent_crops(owner_id, RECENT_CROP_LIMIT)
            .await?
            .into_iter()
            .map(|crop| CropSummary::from_crop(crop, today))
            .collect();

        let mut issues = Vec::new();
        let weather = match city {
            Some(city) => match weather_for(self.weather.as_ref(), city).await {
                Ok(report) => Some(report),
                Err(e) => {
                    tracing::warn!(city, "Dashboard weather unavailable: {}", e);
                    issues.push(UpstreamIssue::new(UpstreamSource::Weather, e));
                    None
                }
            },
            None => None,
        };

        Ok(Dashboard {
            crop_count,
            recent_crops,
            weather,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_lists_three_recent_crops() {
        assert_eq!(RECENT_CROP_LIMIT, 3);
    }

    #[test]
    fn test_crop_summary_wire_shape() {
        let sowing_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let crop = Crop {
            id: Uuid::nil(),
            owner_id: Uuid::nil(),
            name: "Okra".to_string(),
            soil_type: "Black".to_string(),
            area_hectares: Decimal::new(75, 2),
            sowing_date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = CropSummary::from_crop(crop, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["daysSinceSowing"], 30);
        assert_eq!(json["soilType"], "Black");
        assert_eq!(json["sowingDate"], "2024-01-01");
    }
}
