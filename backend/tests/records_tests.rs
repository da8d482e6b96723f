//! Record arithmetic and validation tests
//!
//! Covers the derived headcount quantities, scale entry weekday lookup and
//! interval cover, and the caller-side guards (date-range ordering and
//! scale-range overlap) the reconstruction engine assumes hold.

use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{HeadcountRecord, ScaleEntry};
use shared::types::DateRange;
use shared::validation::{
    ranges_overlap, validate_date_range, validate_headcounts, validate_item_name,
    validate_scale_rates, validate_unit,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(kitchen: (i32, i32), breakfast: (i32, i32), medical: (i32, i32)) -> HeadcountRecord {
    HeadcountRecord {
        id: Uuid::new_v4(),
        date: date(2024, 1, 1),
        kitchen_male: kitchen.0,
        kitchen_female: kitchen.1,
        breakfast_male: breakfast.0,
        breakfast_female: breakfast.1,
        medical_male: medical.0,
        medical_female: medical.1,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

// ============================================================================
// Headcount Derivations
// ============================================================================

#[test]
fn category_totals_sum_both_sexes() {
    let r = record((30, 20), (4, 2), (3, 1));

    assert_eq!(r.kitchen_total(), 50);
    assert_eq!(r.breakfast_total(), 6);
    assert_eq!(r.medical_total(), 4);
}

#[test]
fn net_consuming_count_subtracts_other_pathways() {
    let r = record((30, 20), (4, 2), (3, 1));

    assert_eq!(r.net_consuming_count(), 40);
}

#[test]
fn net_consuming_count_is_not_clamped() {
    // Breakfast and medical exceeding the kitchen total yields a negative
    // count, preserved as-is.
    let r = record((5, 0), (4, 2), (3, 1));

    assert_eq!(r.net_consuming_count(), -5);
}

// ============================================================================
// Scale Entries
// ============================================================================

fn scale_entry(start: NaiveDate, end: NaiveDate) -> ScaleEntry {
    ScaleEntry {
        id: Uuid::new_v4(),
        item_id: Uuid::new_v4(),
        start_date: start,
        end_date: end,
        monday: dec("0.5"),
        tuesday: dec("0.6"),
        wednesday: dec("0.7"),
        thursday: dec("0.8"),
        friday: dec("0.9"),
        saturday: dec("1.0"),
        sunday: dec("1.1"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn rate_for_maps_each_weekday() {
    let entry = scale_entry(date(2024, 1, 1), date(2024, 1, 7));

    assert_eq!(entry.rate_for(Weekday::Mon), dec("0.5"));
    assert_eq!(entry.rate_for(Weekday::Wed), dec("0.7"));
    assert_eq!(entry.rate_for(Weekday::Sun), dec("1.1"));
    assert_eq!(
        entry.rates(),
        [
            dec("0.5"),
            dec("0.6"),
            dec("0.7"),
            dec("0.8"),
            dec("0.9"),
            dec("1.0"),
            dec("1.1"),
        ]
    );
}

#[test]
fn covers_is_inclusive_of_both_ends() {
    let entry = scale_entry(date(2024, 1, 1), date(2024, 1, 7));

    assert!(entry.covers(date(2024, 1, 1)));
    assert!(entry.covers(date(2024, 1, 7)));
    assert!(!entry.covers(date(2023, 12, 31)));
    assert!(!entry.covers(date(2024, 1, 8)));
}

// ============================================================================
// Validation Guards
// ============================================================================

#[test]
fn date_range_must_be_ordered() {
    assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 31)).is_ok());
    assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    assert!(validate_date_range(date(2024, 2, 1), date(2024, 1, 1)).is_err());
}

#[test]
fn overlap_detects_any_intersection() {
    // Touching at a single day counts as overlap; intervals are inclusive
    assert!(ranges_overlap(
        date(2024, 1, 1),
        date(2024, 1, 10),
        date(2024, 1, 10),
        date(2024, 1, 20),
    ));
    assert!(ranges_overlap(
        date(2024, 1, 5),
        date(2024, 1, 15),
        date(2024, 1, 1),
        date(2024, 1, 31),
    ));
    assert!(!ranges_overlap(
        date(2024, 1, 1),
        date(2024, 1, 10),
        date(2024, 1, 11),
        date(2024, 1, 20),
    ));
}

#[test]
fn negative_counts_are_rejected() {
    assert!(validate_headcounts(&[10, 20, 0, 0, 5, 1]).is_ok());
    assert!(validate_headcounts(&[10, -1, 0, 0, 5, 1]).is_err());
}

#[test]
fn negative_rates_are_rejected() {
    let ok = [Decimal::ZERO; 7];
    assert!(validate_scale_rates(&ok).is_ok());

    let mut bad = ok;
    bad[3] = dec("-0.1");
    assert!(validate_scale_rates(&bad).is_err());
}

#[test]
fn item_name_and_unit_must_be_present() {
    assert!(validate_item_name("Rice").is_ok());
    assert!(validate_item_name("  ").is_err());
    assert!(validate_unit("kg").is_ok());
    assert!(validate_unit("").is_err());
}

// ============================================================================
// Date Range Iteration
// ============================================================================

#[test]
fn iter_days_walks_every_day_inclusive() {
    let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 2));
    let days: Vec<_> = range.iter_days().collect();

    // Leap year: February 29 is included
    assert_eq!(
        days,
        vec![
            date(2024, 2, 27),
            date(2024, 2, 28),
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2024, 3, 2),
        ]
    );
    assert_eq!(range.num_days(), 5);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net consuming count always equals the category arithmetic
    #[test]
    fn prop_net_count_arithmetic(
        km in 0i32..1000, kf in 0i32..1000,
        bm in 0i32..1000, bf in 0i32..1000,
        mm in 0i32..1000, mf in 0i32..1000,
    ) {
        let r = record((km, kf), (bm, bf), (mm, mf));
        prop_assert_eq!(
            r.net_consuming_count(),
            (km + kf) - (bm + bf) - (mm + mf)
        );
    }

    /// Overlap is symmetric in its two intervals
    #[test]
    fn prop_overlap_symmetric(
        a in 0u32..400, b in 0u32..400,
        c in 0u32..400, d in 0u32..400,
    ) {
        let base = date(2023, 1, 1);
        let day = |n: u32| base + chrono::Days::new(n as u64);
        let (a_start, a_end) = (day(a.min(b)), day(a.max(b)));
        let (b_start, b_end) = (day(c.min(d)), day(c.max(d)));

        prop_assert_eq!(
            ranges_overlap(a_start, a_end, b_start, b_end),
            ranges_overlap(b_start, b_end, a_start, a_end)
        );
    }

    /// A range's day iterator length always matches num_days
    #[test]
    fn prop_iter_days_matches_num_days(start in 0u32..700, len in 0u32..120) {
        let base = date(2023, 1, 1);
        let s = base + chrono::Days::new(start as u64);
        let e = s + chrono::Days::new(len as u64);
        let range = DateRange::new(s, e);

        prop_assert_eq!(range.iter_days().count() as i64, range.num_days());
    }
}
