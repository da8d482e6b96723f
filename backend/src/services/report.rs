//! Stock movement report service
//!
//! Materializes the reconstruction engine's inputs from the database
//! (range-filtered, date-ordered) and delegates the day-by-day ledger to
//! `shared::ledger`. The engine itself performs no I/O.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::StockItemService;
use shared::ledger::{self, LedgerInputs};
use shared::models::{HeadcountRecord, ScaleEntry, StockMovementReport, StockTransaction};
use shared::types::DateRange;

/// Service producing daily stock movement reports
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct TransactionRow {
    id: Uuid,
    item_id: Uuid,
    transaction_date: NaiveDate,
    quantity: Decimal,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct HeadcountRow {
    id: Uuid,
    record_date: NaiveDate,
    kitchen_male: i32,
    kitchen_female: i32,
    breakfast_male: i32,
    breakfast_female: i32,
    medical_male: i32,
    medical_female: i32,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ScaleRow {
    id: Uuid,
    item_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    monday: Decimal,
    tuesday: Decimal,
    wednesday: Decimal,
    thursday: Decimal,
    friday: Decimal,
    saturday: Decimal,
    sunday: Decimal,
    created_at: DateTime<Utc>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Reconstruct the daily stock ledger for one item over a closed date
    /// range, both ends inclusive.
    pub async fn stock_movement(
        &self,
        item_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<StockMovementReport> {
        // Resolve the item before anything else; an unknown item must fail
        // rather than produce an empty report.
        let item = StockItemService::new(self.db.clone()).get(item_id).await?;

        let range = DateRange::new(start_date, end_date);
        if !range.is_valid() {
            return Err(AppError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let opening_balance = self.sum_transactions_before(item_id, start_date).await?;
        let transactions = self.fetch_transactions(item_id, &range).await?;
        let headcounts = self.fetch_headcounts(&range).await?;
        let scales = self.fetch_scales(item_id, &range).await?;

        let rows = ledger::reconstruct(
            &range,
            &LedgerInputs {
                opening_balance,
                transactions: &transactions,
                headcounts: &headcounts,
                scales: &scales,
            },
        )?;
        let summary = ledger::summarize(&rows);

        Ok(StockMovementReport {
            item_id: item.id,
            item_name: item.name,
            unit: item.unit,
            range,
            rows,
            summary,
        })
    }

    /// Opening-balance backfill: sum of all transaction quantities for the
    /// item dated strictly before `date`
    async fn sum_transactions_before(&self, item_id: Uuid, date: NaiveDate) -> AppResult<Decimal> {
        let sum = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(quantity), 0)
            FROM stock_transactions
            WHERE item_id = $1 AND transaction_date < $2
            "#,
        )
        .bind(item_id)
        .bind(date)
        .fetch_one(&self.db)
        .await?;

        Ok(sum)
    }

    async fn fetch_transactions(
        &self,
        item_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<StockTransaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, item_id, transaction_date, quantity, notes, created_at
            FROM stock_transactions
            WHERE item_id = $1 AND transaction_date BETWEEN $2 AND $3
            ORDER BY transaction_date
            "#,
        )
        .bind(item_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StockTransaction {
                id: r.id,
                item_id: r.item_id,
                date: r.transaction_date,
                quantity: r.quantity,
                notes: r.notes,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn fetch_headcounts(&self, range: &DateRange) -> AppResult<Vec<HeadcountRecord>> {
        let rows = sqlx::query_as::<_, HeadcountRow>(
            r#"
            SELECT id, record_date, kitchen_male, kitchen_female,
                   breakfast_male, breakfast_female, medical_male, medical_female, created_at
            FROM headcount_records
            WHERE record_date BETWEEN $1 AND $2
            ORDER BY record_date
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| HeadcountRecord {
                id: r.id,
                date: r.record_date,
                kitchen_male: r.kitchen_male,
                kitchen_female: r.kitchen_female,
                breakfast_male: r.breakfast_male,
                breakfast_female: r.breakfast_female,
                medical_male: r.medical_male,
                medical_female: r.medical_female,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Scale entries whose validity interval intersects the report range,
    /// ordered by validity start
    async fn fetch_scales(&self, item_id: Uuid, range: &DateRange) -> AppResult<Vec<ScaleEntry>> {
        let rows = sqlx::query_as::<_, ScaleRow>(
            r#"
            SELECT id, item_id, start_date, end_date,
                   monday, tuesday, wednesday, thursday, friday, saturday, sunday, created_at
            FROM scale_entries
            WHERE item_id = $1 AND start_date <= $3 AND end_date >= $2
            ORDER BY start_date
            "#,
        )
        .bind(item_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ScaleEntry {
                id: r.id,
                item_id: r.item_id,
                start_date: r.start_date,
                end_date: r.end_date,
                monday: r.monday,
                tuesday: r.tuesday,
                wednesday: r.wednesday,
                thursday: r.thursday,
                friday: r.friday,
                saturday: r.saturday,
                sunday: r.sunday,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Render a report as CSV: one row per day plus a totals row carrying
    /// the opening balance, summed incoming, summed headcount, summed
    /// consumption and the closing balance.
    pub fn export_csv(report: &StockMovementReport) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        wtr.write_record([
            "Date",
            "Day",
            "Opening",
            "Incoming",
            "Total Stock",
            "Headcount",
            "Scale",
            "Consumption",
            "Closing",
        ])
        .map_err(|e| AppError::Internal(format!("CSV write error: {}", e)))?;

        for row in &report.rows {
            wtr.write_record(&[
                row.date.to_string(),
                row.weekday.clone(),
                row.opening_balance.to_string(),
                row.incoming_stock.to_string(),
                row.total_stock.to_string(),
                row.consuming_count.to_string(),
                row.scale_value.to_string(),
                row.consumption.to_string(),
                row.closing_balance.to_string(),
            ])
            .map_err(|e| AppError::Internal(format!("CSV write error: {}", e)))?;
        }

        let total_headcount: i64 = report.rows.iter().map(|r| r.consuming_count as i64).sum();
        wtr.write_record(&[
            "Total".to_string(),
            String::new(),
            report.summary.opening_balance.to_string(),
            report.summary.total_incoming.to_string(),
            String::new(),
            total_headcount.to_string(),
            String::new(),
            report.summary.total_consumption.to_string(),
            report.summary.closing_balance.to_string(),
        ])
        .map_err(|e| AppError::Internal(format!("CSV write error: {}", e)))?;

        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;

        Ok(csv_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DayRecord, ReportSummary};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report() -> StockMovementReport {
        let rows = vec![
            DayRecord {
                date: date(2024, 1, 1),
                weekday: "Monday".to_string(),
                opening_balance: dec("100"),
                incoming_stock: dec("50"),
                total_stock: dec("150"),
                consuming_count: 40,
                scale_value: dec("0.5"),
                consumption: dec("20.0"),
                closing_balance: dec("130.0"),
            },
            DayRecord {
                date: date(2024, 1, 2),
                weekday: "Tuesday".to_string(),
                opening_balance: dec("130.0"),
                incoming_stock: dec("0"),
                total_stock: dec("130.0"),
                consuming_count: 35,
                scale_value: dec("0"),
                consumption: dec("0"),
                closing_balance: dec("130.0"),
            },
        ];
        StockMovementReport {
            item_id: Uuid::new_v4(),
            item_name: "Rice".to_string(),
            unit: "kg".to_string(),
            range: DateRange::new(date(2024, 1, 1), date(2024, 1, 2)),
            rows,
            summary: ReportSummary {
                opening_balance: dec("100"),
                total_incoming: dec("50"),
                total_consumption: dec("20.0"),
                net_change: dec("30.0"),
                closing_balance: dec("130.0"),
            },
        }
    }

    #[test]
    fn csv_export_renders_day_rows_and_totals_row() {
        let csv = ReportService::export_csv(&sample_report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Date,Day,Opening,Incoming,Total Stock,Headcount,Scale,Consumption,Closing"
        );
        assert_eq!(lines[1], "2024-01-01,Monday,100,50,150,40,0.5,20.0,130.0");
        assert_eq!(lines[2], "2024-01-02,Tuesday,130.0,0,130.0,35,0,0,130.0");
        // Totals row: summed headcount and consumption, opening and closing
        // from the summary; the Day, Total Stock and Scale cells stay blank
        assert_eq!(lines[3], "Total,,100,50,,75,,20.0,130.0");
    }

    #[test]
    fn csv_export_of_empty_report_has_only_header_and_totals() {
        let mut report = sample_report();
        report.rows.clear();
        report.summary = ReportSummary {
            opening_balance: Decimal::ZERO,
            total_incoming: Decimal::ZERO,
            total_consumption: Decimal::ZERO,
            net_change: Decimal::ZERO,
            closing_balance: Decimal::ZERO,
        };

        let csv = ReportService::export_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Total,,0,0,,0,,0,0");
    }
}
