//! HTTP handlers for stock movement reports

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StockMovementQuery {
    pub item_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// "json" (default) or "csv"
    pub format: Option<String>,
}

/// Reconstruct the daily stock movement ledger for an item over a date range
pub async fn get_stock_movement_report(
    State(state): State<AppState>,
    Query(query): Query<StockMovementQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db);
    let report = service
        .stock_movement(query.item_id, query.start_date, query.end_date)
        .await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportService::export_csv(&report)?;
        let filename = format!(
            "attachment; filename=\"stock_movement_{}_{}.csv\"",
            query.start_date, query.end_date
        );
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, filename),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(report).into_response())
    }
}
