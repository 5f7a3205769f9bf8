//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const ROSTER_CSS: Asset = asset!("/assets/roster.css");

mod roster;
pub use roster::{use_roster, RosterProvider};

mod registration_form;
pub use registration_form::RegistrationForm;

mod roster_table;
pub use roster_table::RosterTable;
