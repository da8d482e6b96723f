//! Daily stock movement reconstruction engine
//!
//! Rebuilds the day-by-day ledger for one stock item over a closed date
//! range by joining three independent time series: inventory transactions,
//! headcount records, and weekday scale rates. Each day's closing balance is
//! carried forward as the next day's opening balance.
//!
//! The engine is a pure function of its inputs. It performs no I/O; the
//! caller materializes the pre-filtered, date-ordered collections (and the
//! opening-balance backfill scalar) before invoking it.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{DayRecord, HeadcountRecord, ReportSummary, ScaleEntry, StockTransaction};
use crate::types::DateRange;

/// Reconstruction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Materialized inputs for one reconstruction call.
///
/// `transactions` and `headcounts` must be restricted to the report range;
/// `scales` to entries whose validity interval intersects it, ordered by
/// validity start. `opening_balance` is the sum of all transaction
/// quantities for the item dated strictly before the range start.
#[derive(Debug, Clone, Copy)]
pub struct LedgerInputs<'a> {
    pub opening_balance: Decimal,
    pub transactions: &'a [StockTransaction],
    pub headcounts: &'a [HeadcountRecord],
    pub scales: &'a [ScaleEntry],
}

/// Reconstruct the per-day ledger over `range`, both ends inclusive.
///
/// Produces exactly one row per calendar day regardless of data
/// completeness: a day without a headcount record or covering scale entry
/// consumes nothing, and a day without transactions receives nothing.
/// Closing balances may go negative; the ledger is pure arithmetic and does
/// not clamp or flag them.
pub fn reconstruct(
    range: &DateRange,
    inputs: &LedgerInputs<'_>,
) -> Result<Vec<DayRecord>, LedgerError> {
    if !range.is_valid() {
        return Err(LedgerError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    // Pre-index both per-day sources so the day loop stays linear in
    // days + records instead of rescanning every collection per day.
    let mut incoming_by_date: HashMap<NaiveDate, Decimal> = HashMap::new();
    for txn in inputs.transactions {
        *incoming_by_date.entry(txn.date).or_insert(Decimal::ZERO) += txn.quantity;
    }

    let mut count_by_date: HashMap<NaiveDate, i32> = HashMap::new();
    for record in inputs.headcounts {
        count_by_date.insert(record.date, record.net_consuming_count());
    }

    let mut rows = Vec::with_capacity(range.num_days() as usize);
    let mut opening_balance = inputs.opening_balance;

    for date in range.iter_days() {
        let incoming_stock = incoming_by_date
            .get(&date)
            .copied()
            .unwrap_or(Decimal::ZERO);
        let total_stock = opening_balance + incoming_stock;

        let consuming_count = count_by_date.get(&date).copied().unwrap_or(0);
        let scale_value = scale_value_for(inputs.scales, date);
        let consumption = Decimal::from(consuming_count) * scale_value;
        let closing_balance = total_stock - consumption;

        rows.push(DayRecord {
            date,
            weekday: date.format("%A").to_string(),
            opening_balance,
            incoming_stock,
            total_stock,
            consuming_count,
            scale_value,
            consumption,
            closing_balance,
        });

        opening_balance = closing_balance;
    }

    Ok(rows)
}

/// Rate for `date` from the first entry whose validity interval contains it.
///
/// Entries are scanned in validity-start order, so if the caller's
/// non-overlap invariant is violated the earliest-starting entry wins. Zero
/// when no entry covers the date.
fn scale_value_for(scales: &[ScaleEntry], date: NaiveDate) -> Decimal {
    scales
        .iter()
        .find(|entry| entry.covers(date))
        .map(|entry| entry.rate_for(date.weekday()))
        .unwrap_or(Decimal::ZERO)
}

/// Aggregate figures over a reconstructed report.
///
/// Opening/closing come from the first and last rows; incoming and
/// consumption are summed over all rows.
pub fn summarize(rows: &[DayRecord]) -> ReportSummary {
    let total_incoming: Decimal = rows.iter().map(|r| r.incoming_stock).sum();
    let total_consumption: Decimal = rows.iter().map(|r| r.consumption).sum();

    ReportSummary {
        opening_balance: rows
            .first()
            .map(|r| r.opening_balance)
            .unwrap_or(Decimal::ZERO),
        total_incoming,
        total_consumption,
        net_change: total_incoming - total_consumption,
        closing_balance: rows
            .last()
            .map(|r| r.closing_balance)
            .unwrap_or(Decimal::ZERO),
    }
}
