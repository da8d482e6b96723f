//! Headcount record service: one record per calendar date

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::HeadcountRecord;
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};
use shared::validation::validate_headcounts;

/// Service for managing daily headcount records
#[derive(Clone)]
pub struct HeadcountService {
    db: PgPool,
}

/// Input for creating a headcount record
#[derive(Debug, Deserialize)]
pub struct CreateHeadcountInput {
    pub date: NaiveDate,
    pub kitchen_male: i32,
    pub kitchen_female: i32,
    pub breakfast_male: i32,
    pub breakfast_female: i32,
    pub medical_male: i32,
    pub medical_female: i32,
}

/// Input for updating a headcount record. The date itself is fixed once
/// recorded; only the counts can change.
#[derive(Debug, Deserialize)]
pub struct UpdateHeadcountInput {
    pub kitchen_male: Option<i32>,
    pub kitchen_female: Option<i32>,
    pub breakfast_male: Option<i32>,
    pub breakfast_female: Option<i32>,
    pub medical_male: Option<i32>,
    pub medical_female: Option<i32>,
}

/// Date filter for listings
#[derive(Debug, Default, Deserialize)]
pub struct HeadcountFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, FromRow)]
struct HeadcountRow {
    id: Uuid,
    record_date: NaiveDate,
    kitchen_male: i32,
    kitchen_female: i32,
    breakfast_male: i32,
    breakfast_female: i32,
    medical_male: i32,
    medical_female: i32,
    created_at: DateTime<Utc>,
}

impl From<HeadcountRow> for HeadcountRecord {
    fn from(row: HeadcountRow) -> Self {
        HeadcountRecord {
            id: row.id,
            date: row.record_date,
            kitchen_male: row.kitchen_male,
            kitchen_female: row.kitchen_female,
            breakfast_male: row.breakfast_male,
            breakfast_female: row.breakfast_female,
            medical_male: row.medical_male,
            medical_female: row.medical_female,
            created_at: row.created_at,
        }
    }
}

const HEADCOUNT_COLUMNS: &str = "id, record_date, kitchen_male, kitchen_female, \
     breakfast_male, breakfast_female, medical_male, medical_female, created_at";

impl HeadcountService {
    /// Create a new HeadcountService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a headcount for a date. At most one record may exist per date.
    pub async fn create(&self, input: CreateHeadcountInput) -> AppResult<HeadcountRecord> {
        validate_headcounts(&[
            input.kitchen_male,
            input.kitchen_female,
            input.breakfast_male,
            input.breakfast_female,
            input.medical_male,
            input.medical_female,
        ])
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM headcount_records WHERE record_date = $1)",
        )
        .bind(input.date)
        .fetch_one(&self.db)
        .await?;

        if exists {
            return Err(AppError::DuplicateEntry("date".to_string()));
        }

        let row = sqlx::query_as::<_, HeadcountRow>(&format!(
            r#"
            INSERT INTO headcount_records (
                record_date, kitchen_male, kitchen_female,
                breakfast_male, breakfast_female, medical_male, medical_female
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {HEADCOUNT_COLUMNS}
            "#,
        ))
        .bind(input.date)
        .bind(input.kitchen_male)
        .bind(input.kitchen_female)
        .bind(input.breakfast_male)
        .bind(input.breakfast_female)
        .bind(input.medical_male)
        .bind(input.medical_female)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List headcount records, newest first, with optional date filters
    pub async fn list(
        &self,
        filter: &HeadcountFilter,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<HeadcountRecord>> {
        let total_items = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM headcount_records
            WHERE ($1::date IS NULL OR record_date >= $1)
              AND ($2::date IS NULL OR record_date <= $2)
            "#,
        )
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_one(&self.db)
        .await?;

        let rows = sqlx::query_as::<_, HeadcountRow>(&format!(
            r#"
            SELECT {HEADCOUNT_COLUMNS}
            FROM headcount_records
            WHERE ($1::date IS NULL OR record_date >= $1)
              AND ($2::date IS NULL OR record_date <= $2)
            ORDER BY record_date DESC
            LIMIT $3 OFFSET $4
            "#,
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(pagination.per_page as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.db)
        .await?;

        Ok(PaginatedResponse {
            data: rows.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta::new(pagination, total_items as u64),
        })
    }

    /// Get a headcount record by id
    pub async fn get(&self, id: Uuid) -> AppResult<HeadcountRecord> {
        let row = sqlx::query_as::<_, HeadcountRow>(&format!(
            "SELECT {HEADCOUNT_COLUMNS} FROM headcount_records WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Headcount record".to_string()))?;

        Ok(row.into())
    }

    /// Update the counts of an existing record
    pub async fn update(&self, id: Uuid, input: UpdateHeadcountInput) -> AppResult<HeadcountRecord> {
        let existing = self.get(id).await?;

        let kitchen_male = input.kitchen_male.unwrap_or(existing.kitchen_male);
        let kitchen_female = input.kitchen_female.unwrap_or(existing.kitchen_female);
        let breakfast_male = input.breakfast_male.unwrap_or(existing.breakfast_male);
        let breakfast_female = input.breakfast_female.unwrap_or(existing.breakfast_female);
        let medical_male = input.medical_male.unwrap_or(existing.medical_male);
        let medical_female = input.medical_female.unwrap_or(existing.medical_female);

        validate_headcounts(&[
            kitchen_male,
            kitchen_female,
            breakfast_male,
            breakfast_female,
            medical_male,
            medical_female,
        ])
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let row = sqlx::query_as::<_, HeadcountRow>(&format!(
            r#"
            UPDATE headcount_records
            SET kitchen_male = $1, kitchen_female = $2,
                breakfast_male = $3, breakfast_female = $4,
                medical_male = $5, medical_female = $6
            WHERE id = $7
            RETURNING {HEADCOUNT_COLUMNS}
            "#,
        ))
        .bind(kitchen_male)
        .bind(kitchen_female)
        .bind(breakfast_male)
        .bind(breakfast_female)
        .bind(medical_male)
        .bind(medical_female)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a headcount record
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM headcount_records WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Headcount record".to_string()));
        }

        Ok(())
    }
}
