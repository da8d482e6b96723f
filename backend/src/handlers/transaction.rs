//! HTTP handlers for inventory transaction endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::transaction::{
    RecordTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::AppState;
use shared::models::StockTransaction;
use shared::types::{PaginatedResponse, Pagination};

#[derive(Debug, Deserialize)]
pub struct TransactionListQuery {
    pub item_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List transactions with optional item and date filters
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> AppResult<Json<PaginatedResponse<StockTransaction>>> {
    let service = TransactionService::new(state.db);

    let filter = TransactionFilter {
        item_id: query.item_id,
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let default = Pagination::default();
    let pagination = Pagination {
        page: query.page.unwrap_or(default.page),
        per_page: query.per_page.unwrap_or(default.per_page),
    };

    let transactions = service.list(&filter, &pagination).await?;
    Ok(Json(transactions))
}

/// Record an inventory transaction
pub async fn record_transaction(
    State(state): State<AppState>,
    Json(input): Json<RecordTransactionInput>,
) -> AppResult<Json<StockTransaction>> {
    let service = TransactionService::new(state.db);
    let transaction = service.record(input).await?;
    Ok(Json(transaction))
}

/// Get a transaction
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<StockTransaction>> {
    let service = TransactionService::new(state.db);
    let transaction = service.get(transaction_id).await?;
    Ok(Json(transaction))
}

/// Edit a transaction
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
    Json(input): Json<UpdateTransactionInput>,
) -> AppResult<Json<StockTransaction>> {
    let service = TransactionService::new(state.db);
    let transaction = service.update(transaction_id, input).await?;
    Ok(Json(transaction))
}

/// Delete a transaction
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = TransactionService::new(state.db);
    service.delete(transaction_id).await?;
    Ok(Json(()))
}
