//! Age derivation from birth dates
//!
//! Ages are whole months at a reference date, the granularity the growth
//! reference tables are indexed by.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{GrowthScreenError, Result};

/// Calculate a child's age in whole months at a reference date
///
/// Counts calendar months between the two dates and subtracts one when the
/// day-of-month anniversary has not yet been reached in the reference
/// month. Never negative: a birth date after the reference date yields 0.
#[must_use]
pub fn age_in_months(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let months = (reference.year() - birth.year()) * 12 + reference.month() as i32
        - birth.month() as i32;
    let adjustment = i32::from(reference.day() < birth.day());
    (months - adjustment).max(0) as u32
}

/// Calculate age in whole months from an ISO `YYYY-MM-DD` birth date string
///
/// An empty or unparseable string yields 0 rather than an error. Callers
/// that need to distinguish "newborn" from "missing" should validate with
/// [`parse_birth_date`] first.
#[must_use]
pub fn age_in_months_from_iso(birth_iso: &str, reference: NaiveDate) -> u32 {
    match birth_iso.trim().parse::<NaiveDate>() {
        Ok(birth) => age_in_months(birth, reference),
        Err(_) => {
            log::debug!("unparseable birth date {birth_iso:?}, treating age as 0 months");
            0
        }
    }
}

/// Age in whole months as of today's local date
#[must_use]
pub fn current_age_in_months(birth_iso: &str) -> u32 {
    age_in_months_from_iso(birth_iso, Local::now().date_naive())
}

/// Strictly parse an ISO `YYYY-MM-DD` birth date
pub fn parse_birth_date(birth_iso: &str) -> Result<NaiveDate> {
    birth_iso
        .trim()
        .parse::<NaiveDate>()
        .map_err(|e| GrowthScreenError::InvalidDate(format!("{birth_iso:?}: {e}")))
}
