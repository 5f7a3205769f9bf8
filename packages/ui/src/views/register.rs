//! Registration page view: sign-up form next to the searchable user list.

use dioxus::prelude::*;

use crate::{RegistrationForm, RosterProvider, RosterTable};

/// Register page component.
///
/// The roster lives in the [`RosterProvider`] mounted by this view, so all
/// registered users are discarded when the view unmounts or the page reloads.
#[component]
pub fn Register() -> Element {
    rsx! {
        RosterProvider {
            div {
                class: "registration-layout",
                RegistrationForm {}
                RosterTable {}
            }
        }
    }
}
