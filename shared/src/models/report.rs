//! Daily stock movement report types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DateRange;

/// One reconstructed ledger row per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Monday"; keys the scale lookup
    pub weekday: String,
    /// Previous day's closing balance, or the backfilled balance on day one
    pub opening_balance: Decimal,
    /// Sum of transaction quantities dated exactly this day
    pub incoming_stock: Decimal,
    pub total_stock: Decimal,
    /// Net consuming headcount for the day, 0 if no record exists
    pub consuming_count: i32,
    /// Matching scale entry's rate for this weekday, 0 if none covers the day
    pub scale_value: Decimal,
    pub consumption: Decimal,
    pub closing_balance: Decimal,
}

/// Aggregate figures over a reconstructed report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    /// Opening balance of the first day in range
    pub opening_balance: Decimal,
    pub total_incoming: Decimal,
    pub total_consumption: Decimal,
    pub net_change: Decimal,
    /// Closing balance of the last day in range
    pub closing_balance: Decimal,
}

/// Full stock movement report for one item over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovementReport {
    pub item_id: Uuid,
    pub item_name: String,
    pub unit: String,
    pub range: DateRange,
    pub rows: Vec<DayRecord>,
    pub summary: ReportSummary,
}
