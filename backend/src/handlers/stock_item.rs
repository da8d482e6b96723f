//! HTTP handlers for stock item endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::scale::{ScaleFilter, ScaleService};
use crate::services::stock_item::{CreateStockItemInput, StockItemService, UpdateStockItemInput};
use crate::services::TransactionService;
use crate::AppState;
use shared::models::{ScaleEntry, StockItem, StockTransaction};

/// List all stock items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<StockItem>>> {
    let service = StockItemService::new(state.db);
    let items = service.list().await?;
    Ok(Json(items))
}

/// Create a stock item
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateStockItemInput>,
) -> AppResult<Json<StockItem>> {
    let service = StockItemService::new(state.db);
    let item = service.create(input).await?;
    Ok(Json(item))
}

/// Get a stock item
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<StockItem>> {
    let service = StockItemService::new(state.db);
    let item = service.get(item_id).await?;
    Ok(Json(item))
}

/// Update a stock item
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(input): Json<UpdateStockItemInput>,
) -> AppResult<Json<StockItem>> {
    let service = StockItemService::new(state.db);
    let item = service.update(item_id, input).await?;
    Ok(Json(item))
}

/// Delete a stock item
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = StockItemService::new(state.db);
    service.delete(item_id).await?;
    Ok(Json(()))
}

/// Get all transactions for an item
pub async fn get_item_transactions(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<Vec<StockTransaction>>> {
    let service = TransactionService::new(state.db);
    let transactions = service.list_for_item(item_id).await?;
    Ok(Json(transactions))
}

/// Get all scale entries for an item
pub async fn get_item_scales(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<Vec<ScaleEntry>>> {
    // Resolve the item first so an unknown id yields 404, not an empty list
    StockItemService::new(state.db.clone()).get(item_id).await?;

    let service = ScaleService::new(state.db);
    let scales = service
        .list(&ScaleFilter {
            item_id: Some(item_id),
        })
        .await?;
    Ok(Json(scales))
}
