//! # Roster — the in-memory list of registered users
//!
//! [`Roster`] owns an ordered, insertion-order `Vec` of [`UserRecord`]s for
//! the lifetime of the component instance that holds it. Records are created
//! only through [`Roster::register`], never updated, and die with the roster;
//! there is no delete operation and no persistence.
//!
//! Name search is a derived view: [`Roster::filter_by_name`] returns the
//! matching records without touching the stored list, so widening or clearing
//! the query always shows everything that was registered.

use uuid::Uuid;

use crate::models::{Registration, UserRecord};
use crate::validate::{self, RegistrationError};

/// Ordered in-memory list of registered users.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate a submission and append it as a new record.
    ///
    /// Checks run in order (age, email uniqueness, pincode shape) against the
    /// current records; on the first failure nothing is stored and the error
    /// is returned. On success the record is appended at the end with a
    /// freshly assigned id and returned.
    pub fn register(
        &mut self,
        submission: Registration,
        current_year: i32,
    ) -> Result<UserRecord, RegistrationError> {
        validate::check(&submission, &self.records, current_year)?;

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            dob: submission.dob,
            city: submission.city,
            pincode: submission.pincode,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// Records whose name contains `query` as a case-insensitive substring,
    /// in insertion order. An empty query matches every record.
    pub fn filter_by_name(&self, query: &str) -> Vec<UserRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use chrono::NaiveDate;

    const YEAR: i32 = 2026;

    fn submission(name: &str, email: &str, dob: &str, pincode: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            dob: NaiveDate::parse_from_str(dob, "%Y-%m-%d").unwrap(),
            city: City::Bengaluru,
            pincode: pincode.to_string(),
        }
    }

    #[test]
    fn test_register_appends_record() {
        let mut roster = Roster::new();

        let record = roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();

        assert_eq!(roster.len(), 1);
        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.dob.to_string(), "2000-01-01");
        assert_eq!(record.city, City::Bengaluru);
        assert_eq!(record.pincode, "560001");
        assert_eq!(roster.records()[0], record);
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let mut roster = Roster::new();
        let a = roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();
        let b = roster
            .register(submission("Bob", "b@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_underage_rejected() {
        let mut roster = Roster::new();

        let err = roster
            .register(submission("Carol", "c@x.com", "2010-01-01", "560001"), YEAR)
            .unwrap_err();

        assert_eq!(err, RegistrationError::Underage);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_age_boundary_uses_calendar_years() {
        let mut roster = Roster::new();

        // Year difference of exactly 18 passes even though the birthday
        // (December 31) cannot have occurred yet.
        roster
            .register(submission("Dave", "d@x.com", "2008-12-31", "560001"), YEAR)
            .unwrap();

        // Year difference of 17 fails.
        let err = roster
            .register(submission("Eve", "e@x.com", "2009-01-01", "560001"), YEAR)
            .unwrap_err();
        assert_eq!(err, RegistrationError::Underage);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();

        let err = roster
            .register(submission("Bob", "a@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap_err();

        assert_eq!(err, RegistrationError::DuplicateEmail);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.records()[0].name, "Alice");
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();

        // Only an exact match counts as a duplicate.
        roster
            .register(submission("Bob", "A@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_invalid_pincode_rejected() {
        let mut roster = Roster::new();

        let err = roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "12a456"), YEAR)
            .unwrap_err();

        assert_eq!(err, RegistrationError::InvalidPincode);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_leading_zero_pincode_accepted() {
        let mut roster = Roster::new();
        let record = roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "012345"), YEAR)
            .unwrap();
        assert_eq!(record.pincode, "012345");
    }

    #[test]
    fn test_checks_run_in_order() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();

        // Underage, duplicate email and bad pincode at once: the age check
        // runs first and wins.
        let err = roster
            .register(submission("Kid", "a@x.com", "2015-01-01", "bad"), YEAR)
            .unwrap_err();
        assert_eq!(err, RegistrationError::Underage);

        // Adult with duplicate email and bad pincode: uniqueness wins.
        let err = roster
            .register(submission("Bob", "a@x.com", "1990-01-01", "bad"), YEAR)
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateEmail);
    }

    #[test]
    fn test_filter_by_name() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();
        roster
            .register(submission("Bob", "b@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap();

        let matches = roster.filter_by_name("ali");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Alice");

        // Case-insensitive in both directions.
        assert_eq!(roster.filter_by_name("ALICE").len(), 1);
        assert_eq!(roster.filter_by_name("bOb").len(), 1);

        assert!(roster.filter_by_name("zzz").is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_matches_everywhere() {
        let mut roster = Roster::new();
        roster
            .register(submission("Bob", "b@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap();
        roster
            .register(submission("Rob", "r@x.com", "1990-02-02", "110001"), YEAR)
            .unwrap();

        // Substring may match anywhere in the name; insertion order is kept.
        let matches = roster.filter_by_name("ob");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Bob");
        assert_eq!(matches[1].name, "Rob");
    }

    #[test]
    fn test_filter_does_not_discard_records() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();
        roster
            .register(submission("Bob", "b@x.com", "1995-05-05", "700001"), YEAR)
            .unwrap();

        let narrowed = roster.filter_by_name("ali");
        assert_eq!(narrowed.len(), 1);

        // The stored list is untouched; clearing the query shows everyone.
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.filter_by_name("").len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut roster = Roster::new();
        roster
            .register(submission("Alice", "a@x.com", "2000-01-01", "560001"), YEAR)
            .unwrap();
        roster
            .register(submission("Alina", "al@x.com", "1999-09-09", "400001"), YEAR)
            .unwrap();

        let once = roster.filter_by_name("ali");
        let twice = roster.filter_by_name("ali");
        assert_eq!(once, twice);
    }
}
