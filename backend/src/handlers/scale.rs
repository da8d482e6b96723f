//! HTTP handlers for scale entry endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::scale::{CreateScaleInput, ScaleFilter, ScaleService, UpdateScaleInput};
use crate::AppState;
use shared::models::ScaleEntry;

/// List scale entries, optionally for one item
pub async fn list_scales(
    State(state): State<AppState>,
    Query(filter): Query<ScaleFilter>,
) -> AppResult<Json<Vec<ScaleEntry>>> {
    let service = ScaleService::new(state.db);
    let scales = service.list(&filter).await?;
    Ok(Json(scales))
}

/// Create a scale entry
pub async fn create_scale(
    State(state): State<AppState>,
    Json(input): Json<CreateScaleInput>,
) -> AppResult<Json<ScaleEntry>> {
    let service = ScaleService::new(state.db);
    let scale = service.create(input).await?;
    Ok(Json(scale))
}

/// Get a scale entry
pub async fn get_scale(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
) -> AppResult<Json<ScaleEntry>> {
    let service = ScaleService::new(state.db);
    let scale = service.get(scale_id).await?;
    Ok(Json(scale))
}

/// Update a scale entry
pub async fn update_scale(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
    Json(input): Json<UpdateScaleInput>,
) -> AppResult<Json<ScaleEntry>> {
    let service = ScaleService::new(state.db);
    let scale = service.update(scale_id, input).await?;
    Ok(Json(scale))
}

/// Delete a scale entry
pub async fn delete_scale(
    State(state): State<AppState>,
    Path(scale_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ScaleService::new(state.db);
    service.delete(scale_id).await?;
    Ok(Json(()))
}
