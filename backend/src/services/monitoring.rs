//! Crop monitoring service
//!
//! Fetches a crop and its complete observation sequence, then rebuilds the
//! crop view from scratch. Derived data is never cached: every read and every
//! appended observation produces a fresh view.

use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::models::{
    build_view, Crop, CropView, Observation, RecordObservationInput, TrendSeries, TrendSummary,
    WeatherReport,
};
use crate::services::{CropService, ObservationService};

/// Monitoring service combining crops, observations and weather
#[derive(Clone)]
pub struct MonitoringService {
    crops: CropService,
    observations: ObservationService,
    weather: Option<WeatherClient>,
}

/// Upstream collaborators whose failure degrades a response
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamSource {
    Observations,
    Weather,
}

/// An upstream failure reported alongside a degraded response
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamIssue {
    pub source: UpstreamSource,
    pub message: String,
}

impl UpstreamIssue {
    pub fn new(source: UpstreamSource, message: impl ToString) -> Self {
        Self {
            source,
            message: message.to_string(),
        }
    }
}

/// Crop detail: the crop view plus optional ambient weather
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDetail {
    #[serde(flatten)]
    pub view: CropView,
    pub weather: Option<WeatherReport>,
    pub issues: Vec<UpstreamIssue>,
}

/// Trend series of a crop with per-metric statistics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropTrend {
    pub crop_id: Uuid,
    pub series: TrendSeries,
    pub summary: TrendSummary,
}

impl MonitoringService {
    /// Create a new MonitoringService
    pub fn new(db: sqlx::PgPool, weather: Option<WeatherClient>) -> Self {
        Self {
            crops: CropService::new(db.clone()),
            observations: ObservationService::new(db),
            weather,
        }
    }

    /// Build the view of a crop. Fails if the observations cannot be fetched.
    pub async fn crop_view(&self, owner_id: Uuid, crop_id: Uuid) -> AppResult<CropView> {
        let crop = self.crops.get_crop(owner_id, crop_id).await?;
        let observations = self.observations.list_observations(crop.id).await?;

        Ok(build_view(crop, &observations))
    }

    /// Build the crop detail shown to the grower.
    ///
    /// The crop itself must exist. If observations or weather are unavailable
    /// the detail degrades to what could be fetched and lists the failures.
    pub async fn crop_detail(
        &self,
        owner_id: Uuid,
        crop_id: Uuid,
        city: Option<&str>,
    ) -> AppResult<CropDetail> {
        let crop = self.crops.get_crop(owner_id, crop_id).await?;
        let observations = self.observations.list_observations(crop.id).await;

        let weather = match city {
            Some(city) => Some(self.weather(city).await),
            None => None,
        };

        Ok(assemble_detail(crop, observations, weather))
    }

    /// Ordered observations of a crop
    pub async fn list_observations(
        &self,
        owner_id: Uuid,
        crop_id: Uuid,
    ) -> AppResult<Vec<Observation>> {
        let crop = self.crops.get_crop(owner_id, crop_id).await?;
        self.observations.list_observations(crop.id).await
    }

    /// Record an observation and return the rebuilt view
    pub async fn record_observation(
        &self,
        owner_id: Uuid,
        crop_id: Uuid,
        input: RecordObservationInput,
    ) -> AppResult<CropView> {
        shared::validate_observation_input(&input)?;

        let crop = self.crops.get_crop(owner_id, crop_id).await?;
        self.observations.append_observation(crop.id, &input).await?;

        let observations = self.observations.list_observations(crop.id).await?;
        Ok(build_view(crop, &observations))
    }

    /// Trend series and statistics of a crop
    pub async fn crop_trend(&self, owner_id: Uuid, crop_id: Uuid) -> AppResult<CropTrend> {
        let view = self.crop_view(owner_id, crop_id).await?;
        let summary = view.trend.summary();

        Ok(CropTrend {
            crop_id: view.crop.id,
            series: view.trend,
            summary,
        })
    }

    /// Current weather for a city
    pub async fn weather(&self, city: &str) -> AppResult<WeatherReport> {
        weather_for(self.weather.as_ref(), city).await
    }
}

/// Combine fetched parts into a crop detail. Failed parts degrade to crop
/// metadata only or no weather, each reported as an issue.
pub fn assemble_detail(
    crop: Crop,
    observations: AppResult<Vec<Observation>>,
    weather: Option<AppResult<WeatherReport>>,
) -> CropDetail {
    let crop_id = crop.id;
    let mut issues = Vec::new();

    let view = match observations {
        Ok(observations) => build_view(crop, &observations),
        Err(e) => {
            tracing::warn!(crop_id = %crop_id, "Showing crop metadata only: {}", e);
            issues.push(UpstreamIssue::new(UpstreamSource::Observations, e));
            CropView::metadata_only(crop)
        }
    };

    let weather = match weather {
        Some(Ok(report)) => Some(report),
        Some(Err(e)) => {
            tracing::warn!(crop_id = %crop_id, "Weather unavailable: {}", e);
            issues.push(UpstreamIssue::new(UpstreamSource::Weather, e));
            None
        }
        None => None,
    };

    CropDetail {
        view,
        weather,
        issues,
    }
}

/// Look up weather through an optional client
pub async fn weather_for(client: Option<&WeatherClient>, city: &str) -> AppResult<WeatherReport> {
    let city = city.trim();
    shared::validate_label(city).map_err(|m| shared::FieldError::new("city", m))?;

    match client {
        Some(client) => client.get_weather(city).await,
        None => Err(crate::error::AppError::Configuration(
            "Weather API key not configured".to_string(),
        )),
    }
}
