pub mod models;
pub mod validate;

mod roster;
pub use roster::Roster;

pub use models::{City, Registration, UnknownCity, UserRecord};
pub use validate::{RegistrationError, MIN_AGE_YEARS, PINCODE_DIGITS};
