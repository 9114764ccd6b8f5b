//! PostgreSQL implementation of the location repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::method::{AsrSchool, CalculationMethod};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

const LOCATION_COLUMNS: &str =
    "id, slug, name, latitude, longitude, utc_offset, method, asr_school, created_at, updated_at";

/// PostgreSQL repository for location presets.
///
/// Uses runtime-checked prepared statements; method and school names are
/// stored as text and parsed on read, with values the current code no
/// longer recognizes degrading to "no override".
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Raw row shape shared by every query in this repository.
#[derive(sqlx::FromRow)]
struct LocationRow {
    id: i64,
    slug: String,
    name: String,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
    method: Option<String>,
    asr_school: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            slug: row.slug,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            utc_offset: row.utc_offset,
            method: row.method.as_deref().and_then(CalculationMethod::parse),
            asr_school: row.asr_school.as_deref().and_then(AsrSchool::parse),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let sql = format!(
            "INSERT INTO locations (slug, name, latitude, longitude, utc_offset, method, asr_school)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {LOCATION_COLUMNS}"
        );
        let row: LocationRow = sqlx::query_as(&sql)
            .bind(&new_location.slug)
            .bind(&new_location.name)
            .bind(new_location.latitude)
            .bind(new_location.longitude)
            .bind(new_location.utc_offset)
            .bind(new_location.method.map(|m| m.name()))
            .bind(new_location.asr_school.map(|s| s.name()))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = $1");
        let row: Option<LocationRow> = sqlx::query_as(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Location>, AppError> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations ORDER BY slug");
        let rows: Vec<LocationRow> = sqlx::query_as(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, slug: &str, patch: LocationPatch) -> Result<Option<Location>, AppError> {
        // COALESCE covers plain optional fields; the boolean flags let
        // `Some(None)` clear an override while `None` leaves it unchanged.
        let sql = format!(
            "UPDATE locations SET
                 name = COALESCE($2, name),
                 latitude = COALESCE($3, latitude),
                 longitude = COALESCE($4, longitude),
                 utc_offset = COALESCE($5, utc_offset),
                 method = CASE WHEN $6 THEN $7 ELSE method END,
                 asr_school = CASE WHEN $8 THEN $9 ELSE asr_school END,
                 updated_at = NOW()
             WHERE slug = $1
             RETURNING {LOCATION_COLUMNS}"
        );
        let row: Option<LocationRow> = sqlx::query_as(&sql)
            .bind(slug)
            .bind(&patch.name)
            .bind(patch.latitude)
            .bind(patch.longitude)
            .bind(patch.utc_offset)
            .bind(patch.method.is_some())
            .bind(patch.method.flatten().map(|m| m.name()))
            .bind(patch.asr_school.is_some())
            .bind(patch.asr_school.flatten().map(|s| s.name()))
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
