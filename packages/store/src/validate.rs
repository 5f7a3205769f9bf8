//! # Submission-time validation
//!
//! Checks run in a fixed order and stop at the first failure: minimum age,
//! email uniqueness, pincode shape. A failed submission mutates nothing; the
//! caller surfaces the error's `Display` text to the user and the form keeps
//! its values so the user can correct and resubmit.
//!
//! The current year is passed in rather than read from a clock, so the checks
//! are deterministic and the crate stays free of platform time APIs. The UI
//! layer supplies the platform clock.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::{Registration, UserRecord};

/// Minimum age, in whole calendar years, required to register.
pub const MIN_AGE_YEARS: i32 = 18;

/// Required pincode length in digits.
pub const PINCODE_DIGITS: usize = 6;

/// Why a submission was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("You must be at least 18 years old to register.")]
    Underage,
    #[error("Email is already registered.")]
    DuplicateEmail,
    #[error("Pincode must be a 6-digit number.")]
    InvalidPincode,
}

/// Age as a plain calendar-year difference.
///
/// The month and day of birth are ignored: a birthday that has not yet
/// occurred in `current_year` still counts as a completed year.
pub fn age_in_years(dob: NaiveDate, current_year: i32) -> i32 {
    current_year - dob.year()
}

/// Whether `pincode` is exactly six ASCII digits.
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == PINCODE_DIGITS && pincode.bytes().all(|b| b.is_ascii_digit())
}

/// Run all checks against the existing records, in order, short-circuiting
/// on the first failure.
pub(crate) fn check(
    submission: &Registration,
    records: &[UserRecord],
    current_year: i32,
) -> Result<(), RegistrationError> {
    if age_in_years(submission.dob, current_year) < MIN_AGE_YEARS {
        return Err(RegistrationError::Underage);
    }
    if records.iter().any(|record| record.email == submission.email) {
        return Err(RegistrationError::DuplicateEmail);
    }
    if !is_valid_pincode(&submission.pincode) {
        return Err(RegistrationError::InvalidPincode);
    }
    Ok(())
}
