//! Validation utilities for the Ration Stock Management system
//!
//! Caller-side guards the reconstruction engine assumes are already
//! satisfied: duplicate-date rejection and overlapping-scale-range
//! rejection live in the service layer and lean on these helpers.

use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Date Range Validations
// ============================================================================

/// Validate that a closed date interval is ordered
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if start > end {
        return Err("Start date must not be after end date");
    }
    Ok(())
}

/// Whether two inclusive date intervals intersect
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

// ============================================================================
// Headcount Validations
// ============================================================================

/// Validate that every headcount field is non-negative
pub fn validate_headcounts(counts: &[i32]) -> Result<(), &'static str> {
    if counts.iter().any(|c| *c < 0) {
        return Err("Headcounts cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Scale Validations
// ============================================================================

/// Validate that every weekday rate is non-negative
pub fn validate_scale_rates(rates: &[Decimal; 7]) -> Result<(), &'static str> {
    if rates.iter().any(|r| *r < Decimal::ZERO) {
        return Err("Scale rates cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a stock item name (non-empty, reasonable length)
pub fn validate_item_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Item name cannot be empty");
    }
    if trimmed.len() > 200 {
        return Err("Item name must be at most 200 characters");
    }
    Ok(())
}

/// Validate a unit-of-measure label
pub fn validate_unit(unit: &str) -> Result<(), &'static str> {
    let trimmed = unit.trim();
    if trimmed.is_empty() {
        return Err("Unit cannot be empty");
    }
    if trimmed.len() > 50 {
        return Err("Unit must be at most 50 characters");
    }
    Ok(())
}
