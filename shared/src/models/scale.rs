//! Per-weekday consumption scale entries

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Consumption rate table for one stock item over a validity interval.
///
/// Each weekday rate is the ration units consumed per consuming person on
/// that weekday. Validity intervals of distinct entries for the same item
/// must not overlap; that invariant is enforced by the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub id: Uuid,
    pub item_id: Uuid,
    /// Inclusive start of the validity interval
    pub start_date: NaiveDate,
    /// Inclusive end of the validity interval
    pub end_date: NaiveDate,
    pub monday: Decimal,
    pub tuesday: Decimal,
    pub wednesday: Decimal,
    pub thursday: Decimal,
    pub friday: Decimal,
    pub saturday: Decimal,
    pub sunday: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ScaleEntry {
    /// Whether the validity interval contains the given date
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Rate for the given weekday
    pub fn rate_for(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn rates(&self) -> [Decimal; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }
}
