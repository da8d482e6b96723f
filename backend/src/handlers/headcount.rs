//! HTTP handlers for headcount record endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::headcount::{
    CreateHeadcountInput, HeadcountFilter, HeadcountService, UpdateHeadcountInput,
};
use crate::AppState;
use shared::models::HeadcountRecord;
use shared::types::{PaginatedResponse, Pagination};

#[derive(Debug, Deserialize)]
pub struct HeadcountListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List headcount records with optional date filters
pub async fn list_headcounts(
    State(state): State<AppState>,
    Query(query): Query<HeadcountListQuery>,
) -> AppResult<Json<PaginatedResponse<HeadcountRecord>>> {
    let service = HeadcountService::new(state.db);

    let filter = HeadcountFilter {
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let default = Pagination::default();
    let pagination = Pagination {
        page: query.page.unwrap_or(default.page),
        per_page: query.per_page.unwrap_or(default.per_page),
    };

    let records = service.list(&filter, &pagination).await?;
    Ok(Json(records))
}

/// Record a headcount for a date
pub async fn create_headcount(
    State(state): State<AppState>,
    Json(input): Json<CreateHeadcountInput>,
) -> AppResult<Json<HeadcountRecord>> {
    let service = HeadcountService::new(state.db);
    let record = service.create(input).await?;
    Ok(Json(record))
}

/// Get a headcount record
pub async fn get_headcount(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> AppResult<Json<HeadcountRecord>> {
    let service = HeadcountService::new(state.db);
    let record = service.get(record_id).await?;
    Ok(Json(record))
}

/// Update the counts of a headcount record
pub async fn update_headcount(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
    Json(input): Json<UpdateHeadcountInput>,
) -> AppResult<Json<HeadcountRecord>> {
    let service = HeadcountService::new(state.db);
    let record = service.update(record_id, input).await?;
    Ok(Json(record))
}

/// Delete a headcount record
pub async fn delete_headcount(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = HeadcountService::new(state.db);
    service.delete(record_id).await?;
    Ok(Json(()))
}
