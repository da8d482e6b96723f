//! Scale entry service
//!
//! A scale entry gives the per-person consumption rate of one item for each
//! weekday, valid over an inclusive date interval. Validity intervals of
//! distinct entries for the same item must never overlap; that invariant is
//! enforced here so the reconstruction engine can rely on it.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::ScaleEntry;
use shared::validation::{validate_date_range, validate_scale_rates};

/// Service for managing scale entries
#[derive(Clone)]
pub struct ScaleService {
    db: PgPool,
}

/// Input for creating a scale entry
#[derive(Debug, Deserialize)]
pub struct CreateScaleInput {
    pub item_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monday: Decimal,
    pub tuesday: Decimal,
    pub wednesday: Decimal,
    pub thursday: Decimal,
    pub friday: Decimal,
    pub saturday: Decimal,
    pub sunday: Decimal,
}

/// Input for updating a scale entry. The item reference is fixed.
#[derive(Debug, Deserialize)]
pub struct UpdateScaleInput {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monday: Option<Decimal>,
    pub tuesday: Option<Decimal>,
    pub wednesday: Option<Decimal>,
    pub thursday: Option<Decimal>,
    pub friday: Option<Decimal>,
    pub saturday: Option<Decimal>,
    pub sunday: Option<Decimal>,
}

/// Listing filter
#[derive(Debug, Default, Deserialize)]
pub struct ScaleFilter {
    pub item_id: Option<Uuid>,
}

#[derive(Debug, FromRow)]
struct ScaleRow {
    id: Uuid,
    item_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    monday: Decimal,
    tuesday: Decimal,
    wednesday: Decimal,
    thursday: Decimal,
    friday: Decimal,
    saturday: Decimal,
    sunday: Decimal,
    created_at: DateTime<Utc>,
}

impl From<ScaleRow> for ScaleEntry {
    fn from(row: ScaleRow) -> Self {
        ScaleEntry {
            id: row.id,
            item_id: row.item_id,
            start_date: row.start_date,
            end_date: row.end_date,
            monday: row.monday,
            tuesday: row.tuesday,
            wednesday: row.wednesday,
            thursday: row.thursday,
            friday: row.friday,
            saturday: row.saturday,
            sunday: row.sunday,
            created_at: row.created_at,
        }
    }
}

const SCALE_COLUMNS: &str = "id, item_id, start_date, end_date, \
     monday, tuesday, wednesday, thursday, friday, saturday, sunday, created_at";

impl ScaleService {
    /// Create a new ScaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a scale entry, rejecting ranges that overlap an existing entry
    /// for the same item
    pub async fn create(&self, input: CreateScaleInput) -> AppResult<ScaleEntry> {
        self.validate_input(
            input.start_date,
            input.end_date,
            &[
                input.monday,
                input.tuesday,
                input.wednesday,
                input.thursday,
                input.friday,
                input.saturday,
                input.sunday,
            ],
        )?;

        let item_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stock_items WHERE id = $1)")
                .bind(input.item_id)
                .fetch_one(&self.db)
                .await?;

        if !item_exists {
            return Err(AppError::NotFound("Stock item".to_string()));
        }

        self.check_overlap(input.item_id, input.start_date, input.end_date, None)
            .await?;

        let row = sqlx::query_as::<_, ScaleRow>(&format!(
            r#"
            INSERT INTO scale_entries (
                item_id, start_date, end_date,
                monday, tuesday, wednesday, thursday, friday, saturday, sunday
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {SCALE_COLUMNS}
            "#,
        ))
        .bind(input.item_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.monday)
        .bind(input.tuesday)
        .bind(input.wednesday)
        .bind(input.thursday)
        .bind(input.friday)
        .bind(input.saturday)
        .bind(input.sunday)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List scale entries ordered by validity start, optionally for one item
    pub async fn list(&self, filter: &ScaleFilter) -> AppResult<Vec<ScaleEntry>> {
        let rows = sqlx::query_as::<_, ScaleRow>(&format!(
            r#"
            SELECT {SCALE_COLUMNS}
            FROM scale_entries
            WHERE ($1::uuid IS NULL OR item_id = $1)
            ORDER BY start_date
            "#,
        ))
        .bind(filter.item_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a scale entry by id
    pub async fn get(&self, id: Uuid) -> AppResult<ScaleEntry> {
        let row = sqlx::query_as::<_, ScaleRow>(&format!(
            "SELECT {SCALE_COLUMNS} FROM scale_entries WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Scale entry".to_string()))?;

        Ok(row.into())
    }

    /// Update a scale entry, re-checking the overlap invariant against the
    /// other entries for the same item
    pub async fn update(&self, id: Uuid, input: UpdateScaleInput) -> AppResult<ScaleEntry> {
        let existing = self.get(id).await?;

        let start_date = input.start_date.unwrap_or(existing.start_date);
        let end_date = input.end_date.unwrap_or(existing.end_date);
        let rates = [
            input.monday.unwrap_or(existing.monday),
            input.tuesday.unwrap_or(existing.tuesday),
            input.wednesday.unwrap_or(existing.wednesday),
            input.thursday.unwrap_or(existing.thursday),
            input.friday.unwrap_or(existing.friday),
            input.saturday.unwrap_or(existing.saturday),
            input.sunday.unwrap_or(existing.sunday),
        ];

        self.validate_input(start_date, end_date, &rates)?;
        self.check_overlap(existing.item_id, start_date, end_date, Some(id))
            .await?;

        let row = sqlx::query_as::<_, ScaleRow>(&format!(
            r#"
            UPDATE scale_entries
            SET start_date = $1, end_date = $2,
                monday = $3, tuesday = $4, wednesday = $5, thursday = $6,
                friday = $7, saturday = $8, sunday = $9
            WHERE id = $10
            RETURNING {SCALE_COLUMNS}
            "#,
        ))
        .bind(start_date)
        .bind(end_date)
        .bind(rates[0])
        .bind(rates[1])
        .bind(rates[2])
        .bind(rates[3])
        .bind(rates[4])
        .bind(rates[5])
        .bind(rates[6])
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a scale entry
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM scale_entries WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Scale entry".to_string()));
        }

        Ok(())
    }

    fn validate_input(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        rates: &[Decimal; 7],
    ) -> AppResult<()> {
        validate_date_range(start_date, end_date).map_err(|msg| AppError::Validation {
            field: "start_date".to_string(),
            message: msg.to_string(),
        })?;
        validate_scale_rates(rates).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        Ok(())
    }

    async fn check_overlap(
        &self,
        item_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_id: Option<Uuid>,
    ) -> AppResult<()> {
        let overlaps = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM scale_entries
                WHERE item_id = $1
                  AND start_date <= $3
                  AND end_date >= $2
                  AND ($4::uuid IS NULL OR id <> $4)
            )
            "#,
        )
        .bind(item_id)
        .bind(start_date)
        .bind(end_date)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await?;

        if overlaps {
            return Err(AppError::Conflict(
                "This item already has a scale entry for the selected date range".to_string(),
            ));
        }

        Ok(())
    }
}
