//! Daily prisoner headcount records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One headcount record per calendar date, split by category and sex.
///
/// The date is a unique key; at most one record exists per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadcountRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kitchen_male: i32,
    pub kitchen_female: i32,
    pub breakfast_male: i32,
    pub breakfast_female: i32,
    pub medical_male: i32,
    pub medical_female: i32,
    pub created_at: DateTime<Utc>,
}

impl HeadcountRecord {
    pub fn kitchen_total(&self) -> i32 {
        self.kitchen_male + self.kitchen_female
    }

    pub fn breakfast_total(&self) -> i32 {
        self.breakfast_male + self.breakfast_female
    }

    pub fn medical_total(&self) -> i32 {
        self.medical_male + self.medical_female
    }

    /// Headcount actually drawing the item's ration.
    ///
    /// Breakfast and medical categories are subtracted because they are fed
    /// through separate supply pathways. Not clamped at zero: if they exceed
    /// the kitchen total the result is negative and flows through unchanged.
    pub fn net_consuming_count(&self) -> i32 {
        self.kitchen_total() - self.breakfast_total() - self.medical_total()
    }
}
