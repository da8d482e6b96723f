//! Stock item service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::StockItem;
use shared::validation::{validate_item_name, validate_unit};

/// Service for managing stock items
#[derive(Clone)]
pub struct StockItemService {
    db: PgPool,
}

/// Input for creating a stock item
#[derive(Debug, Deserialize)]
pub struct CreateStockItemInput {
    pub name: String,
    pub unit: String,
    pub description: Option<String>,
}

/// Input for updating a stock item
#[derive(Debug, Deserialize)]
pub struct UpdateStockItemInput {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, FromRow)]
struct StockItemRow {
    id: Uuid,
    name: String,
    unit: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<StockItemRow> for StockItem {
    fn from(row: StockItemRow) -> Self {
        StockItem {
            id: row.id,
            name: row.name,
            unit: row.unit,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

impl StockItemService {
    /// Create a new StockItemService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a stock item
    pub async fn create(&self, input: CreateStockItemInput) -> AppResult<StockItem> {
        validate_item_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_unit(&input.unit).map_err(|msg| AppError::Validation {
            field: "unit".to_string(),
            message: msg.to_string(),
        })?;

        let row = sqlx::query_as::<_, StockItemRow>(
            r#"
            INSERT INTO stock_items (name, unit, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, unit, description, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.unit.trim())
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List all stock items ordered by name
    pub async fn list(&self) -> AppResult<Vec<StockItem>> {
        let rows = sqlx::query_as::<_, StockItemRow>(
            "SELECT id, name, unit, description, created_at FROM stock_items ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a stock item by id
    pub async fn get(&self, id: Uuid) -> AppResult<StockItem> {
        let row = sqlx::query_as::<_, StockItemRow>(
            "SELECT id, name, unit, description, created_at FROM stock_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Stock item".to_string()))?;

        Ok(row.into())
    }

    /// Update a stock item
    pub async fn update(&self, id: Uuid, input: UpdateStockItemInput) -> AppResult<StockItem> {
        let existing = self.get(id).await?;

        let name = input.name.unwrap_or(existing.name);
        let unit = input.unit.unwrap_or(existing.unit);
        let description = input.description.or(existing.description);

        validate_item_name(&name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_unit(&unit).map_err(|msg| AppError::Validation {
            field: "unit".to_string(),
            message: msg.to_string(),
        })?;

        let row = sqlx::query_as::<_, StockItemRow>(
            r#"
            UPDATE stock_items
            SET name = $1, unit = $2, description = $3
            WHERE id = $4
            RETURNING id, name, unit, description, created_at
            "#,
        )
        .bind(name.trim())
        .bind(unit.trim())
        .bind(&description)
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a stock item and, by cascade, its transactions and scales
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stock_items WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Stock item".to_string()));
        }

        Ok(())
    }
}
