//! Inventory transaction service
//!
//! Transactions carry a signed quantity: positive for receipts, negative
//! for adjustments. Balances are always derived by summing them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::StockTransaction;
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};

/// Service for managing inventory transactions
#[derive(Clone)]
pub struct TransactionService {
    db: PgPool,
}

/// Input for recording a transaction
#[derive(Debug, Deserialize)]
pub struct RecordTransactionInput {
    pub item_id: Uuid,
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub notes: Option<String>,
}

/// Input for editing a transaction
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionInput {
    pub date: Option<NaiveDate>,
    pub quantity: Option<Decimal>,
    pub notes: Option<String>,
}

/// Listing filter
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilter {
    pub item_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, FromRow)]
struct TransactionRow {
    id: Uuid,
    item_id: Uuid,
    transaction_date: NaiveDate,
    quantity: Decimal,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TransactionRow> for StockTransaction {
    fn from(row: TransactionRow) -> Self {
        StockTransaction {
            id: row.id,
            item_id: row.item_id,
            date: row.transaction_date,
            quantity: row.quantity,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

const TRANSACTION_COLUMNS: &str =
    "id, item_id, transaction_date, quantity, notes, created_at";

impl TransactionService {
    /// Create a new TransactionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an inventory transaction for an existing item
    pub async fn record(&self, input: RecordTransactionInput) -> AppResult<StockTransaction> {
        let item_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stock_items WHERE id = $1)")
                .bind(input.item_id)
                .fetch_one(&self.db)
                .await?;

        if !item_exists {
            return Err(AppError::NotFound("Stock item".to_string()));
        }

        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            INSERT INTO stock_transactions (item_id, transaction_date, quantity, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING {TRANSACTION_COLUMNS}
            "#,
        ))
        .bind(input.item_id)
        .bind(input.date)
        .bind(input.quantity)
        .bind(&input.notes)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List transactions, newest first, with optional item and date filters
    pub async fn list(
        &self,
        filter: &TransactionFilter,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<StockTransaction>> {
        let total_items = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM stock_transactions
            WHERE ($1::uuid IS NULL OR item_id = $1)
              AND ($2::date IS NULL OR transaction_date >= $2)
              AND ($3::date IS NULL OR transaction_date <= $3)
            "#,
        )
        .bind(filter.item_id)
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_one(&self.db)
        .await?;

        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            SELECT {TRANSACTION_COLUMNS}
            FROM stock_transactions
            WHERE ($1::uuid IS NULL OR item_id = $1)
              AND ($2::date IS NULL OR transaction_date >= $2)
              AND ($3::date IS NULL OR transaction_date <= $3)
            ORDER BY transaction_date DESC, created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        ))
        .bind(filter.item_id)
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

    /// Get all transactions for one item, newest first
    pub async fn list_for_item(&self, item_id: Uuid) -> AppResult<Vec<StockTransaction>> {
        let item_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM stock_items WHERE id = $1)")
                .bind(item_id)
                .fetch_one(&self.db)
                .await?;

        if !item_exists {
            return Err(AppError::NotFound("Stock item".to_string()));
        }

        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            SELECT {TRANSACTION_COLUMNS}
            FROM stock_transactions
            WHERE item_id = $1
            ORDER BY transaction_date DESC, created_at DESC
            "#,
        ))
        .bind(item_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a transaction by id
    pub async fn get(&self, id: Uuid) -> AppResult<StockTransaction> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM stock_transactions WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction".to_string()))?;

        Ok(row.into())
    }

    /// Edit a transaction
    pub async fn update(&self, id: Uuid, input: UpdateTransactionInput) -> AppResult<StockTransaction> {
        let existing = self.get(id).await?;

        let date = input.date.unwrap_or(existing.date);
        let quantity = input.quantity.unwrap_or(existing.quantity);
        let notes = input.notes.or(existing.notes);

        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            UPDATE stock_transactions
            SET transaction_date = $1, quantity = $2, notes = $3
            WHERE id = $4
            RETURNING {TRANSACTION_COLUMNS}
            "#,
        ))
        .bind(date)
        .bind(quantity)
        .bind(&notes)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a transaction
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stock_transactions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        Ok(())
    }
}
