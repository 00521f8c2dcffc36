//! Crop management service

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{CreateCropInput, Crop};

/// Crop service for managing a grower's crops
#[derive(Clone)]
pub struct CropService {
    db: PgPool,
}

/// Crop row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
struct CropRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    soil_type: String,
    area_hectares: Decimal,
    sowing_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CropRow> for Crop {
    fn from(row: CropRow) -> Self {
        Crop {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            soil_type: row.soil_type,
            area_hectares: row.area_hectares,
            sowing_date: row.sowing_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all crops of an owner, newest first
    pub async fn list_crops(&self, owner_id: Uuid) -> AppResult<Vec<Crop>> {
        self.recent_crops(owner_id, i64::MAX).await
    }

    /// Get at most `limit` crops of an owner, newest first
    pub async fn recent_crops(&self, owner_id: Uuid, limit: i64) -> AppResult<Vec<Crop>> {
        let rows = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT id, owner_id, name, soil_type, area_hectares, sowing_date,
                   created_at, updated_at
            FROM crops
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Crop::from).collect())
    }

    /// Count crops of an owner
    pub async fn count_crops(&self, owner_id: Uuid) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM crops WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    /// Get a crop by ID
    pub async fn get_crop(&self, owner_id: Uuid, crop_id: Uuid) -> AppResult<Crop> {
        let row = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT id, owner_id, name, soil_type, area_hectares, sowing_date,
                   created_at, updated_at
            FROM crops
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(crop_id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;

        Ok(row.into())
    }

    /// Register a new crop
    pub async fn create_crop(&self, owner_id: Uuid, input: CreateCropInput) -> AppResult<Crop> {
        shared::validate_crop_input(&input)?;

        let row = sqlx::query_as::<_, CropRow>(
            r#"
            INSERT INTO crops (id, owner_id, name, soil_type, area_hectares, sowing_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_id, name, soil_type, area_hectares, sowing_date,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(input.name.trim())
        .bind(input.soil_type.trim())
        .bind(input.area_hectares)
        .bind(input.sowing_date)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(crop_id = %row.id, owner_id = %owner_id, "Crop created");
        Ok(row.into())
    }
}
