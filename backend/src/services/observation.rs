//! Observation store: append-only monitoring readings per crop

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Observation, RecordObservationInput};

/// Observation service backed by the `observations` table
#[derive(Clone)]
pub struct ObservationService {
    db: PgPool,
}

/// Observation row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
struct ObservationRow {
    id: Uuid,
    crop_id: Uuid,
    observed_on: NaiveDate,
    temperature: f64,
    humidity: f64,
    soil_moisture: f64,
    growth_stage: String,
    created_at: DateTime<Utc>,
}

impl From<ObservationRow> for Observation {
    fn from(row: ObservationRow) -> Self {
        Observation {
            id: row.id,
            crop_id: row.crop_id,
            observed_on: row.observed_on,
            temperature: row.temperature,
            humidity: row.humidity,
            soil_moisture: row.soil_moisture,
            growth_stage: row.growth_stage,
            created_at: row.created_at,
        }
    }
}

impl ObservationService {
    /// Create a new ObservationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all observations of a crop ordered by date, then insertion
    pub async fn list_observations(&self, crop_id: Uuid) -> AppResult<Vec<Observation>> {
        let rows = sqlx::query_as::<_, ObservationRow>(
            r#"
            SELECT id, crop_id, observed_on, temperature, humidity, soil_moisture,
                   growth_stage, created_at
            FROM observations
            WHERE crop_id = $1
            ORDER BY observed_on ASC, seq ASC
            "#,
        )
        .bind(crop_id)
        .fetch_all(&self.db)
        .await?;

        tracing::debug!(crop_id = %crop_id, count = rows.len(), "Fetched observations");
        Ok(rows.into_iter().map(Observation::from).collect())
    }

    /// Append an observation. Input must already be validated.
    pub async fn append_observation(
        &self,
        crop_id: Uuid,
        input: &RecordObservationInput,
    ) -> AppResult<Observation> {
        let observed_on = input.observed_on.unwrap_or_else(|| Utc::now().date_naive());

        let row = sqlx::query_as::<_, ObservationRow>(
            r#"
            INSERT INTO observations (id, crop_id, observed_on, temperature, humidity,
                                      soil_moisture, growth_stage)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, crop_id, observed_on, temperature, humidity, soil_moisture,
                      growth_stage, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(crop_id)
        .bind(observed_on)
        .bind(input.temperature)
        .bind(input.humidity)
        .bind(input.soil_moisture)
        .bind(input.growth_stage.trim())
        .fetch_one(&self.db)
        .await?;

        tracing::info!(crop_id = %crop_id, observation_id = %row.id, %observed_on, "Observation recorded");
        Ok(row.into())
    }
}
