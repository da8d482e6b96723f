//! Stock items and inventory transactions

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A consumable stock item.
///
/// No current quantity is stored; the balance is always derived from
/// transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: Uuid,
    pub name: String,
    /// Unit of measure, e.g. "kg" or "litre"
    pub unit: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A signed inventory movement for one item on one date.
///
/// Positive quantities are receipts, negative ones adjustments. Multiple
/// transactions may share a date for the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockTransaction {
    pub id: Uuid,
    pub item_id: Uuid,
    pub date: NaiveDate,
    pub quantity: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
