//! Route definitions for the Ration Stock Management server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Daily headcount records
        .nest("/headcounts", headcount_routes())
        // Stock items
        .nest("/items", item_routes())
        // Inventory transactions
        .nest("/transactions", transaction_routes())
        // Scale entries
        .nest("/scales", scale_routes())
        // Reports
        .nest("/reports", report_routes())
}

/// Headcount record routes
fn headcount_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_headcounts).post(handlers::create_headcount),
        )
        .route(
            "/:record_id",
            get(handlers::get_headcount)
                .put(handlers::update_headcount)
                .delete(handlers::delete_headcount),
        )
}

/// Stock item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/:item_id/transactions", get(handlers::get_item_transactions))
        .route("/:item_id/scales", get(handlers::get_item_scales))
}

/// Inventory transaction routes
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_transactions).post(handlers::record_transaction),
        )
        .route(
            "/:transaction_id",
            get(handlers::get_transaction)
                .put(handlers::update_transaction)
                .delete(handlers::delete_transaction),
        )
}

/// Scale entry routes
fn scale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_scales).post(handlers::create_scale))
        .route(
            "/:scale_id",
            get(handlers::get_scale)
                .put(handlers::update_scale)
                .delete(handlers::delete_scale),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/stock-movement", get(handlers::get_stock_movement_report))
}
