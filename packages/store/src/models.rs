//! # Domain models for the registration roster
//!
//! Defines the data carried by the registration form and stored in the
//! in-memory [`crate::Roster`]. These types are `Serialize + Deserialize` so
//! they can cross component boundaries or a future transport unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | One registered user as held by the roster. Carries an opaque `id` assigned at registration, the submitted `name` and `email`, the date of birth, the selected [`City`], and the six-digit `pincode` kept as text. |
//! | [`Registration`] | A submission as entered in the form, before validation. Same fields as [`UserRecord`] minus the `id`. |
//! | [`City`] | The fixed set of cities offered by the form's select control. |
//!
//! [`City`] parses from the exact option strings via [`FromStr`]; an
//! unrecognised value yields [`UnknownCity`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One registered user held by the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque unique token assigned at registration.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Date of birth as submitted.
    pub dob: NaiveDate,
    pub city: City,
    /// Exactly six decimal digits, kept as text to preserve leading zeros.
    pub pincode: String,
}

/// A registration submission before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub city: City,
    pub pincode: String,
}

/// Cities offered by the registration form.
///
/// The spellings are the literal accepted values, including "Hydrabad",
/// "Gujurat" and "Gurgram".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Bengaluru,
    Hydrabad,
    Kolkata,
    Gujurat,
    Gurgram,
}

impl City {
    /// All selectable cities, in form display order.
    pub const ALL: [City; 5] = [
        City::Bengaluru,
        City::Hydrabad,
        City::Kolkata,
        City::Gujurat,
        City::Gurgram,
    ];

    /// The display and wire spelling of the city.
    pub fn as_str(self) -> &'static str {
        match self {
            City::Bengaluru => "Bengaluru",
            City::Hydrabad => "Hydrabad",
            City::Kolkata => "Kolkata",
            City::Gujurat => "Gujurat",
            City::Gurgram => "Gurgram",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the offered cities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown city: {0}")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .copied()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}
