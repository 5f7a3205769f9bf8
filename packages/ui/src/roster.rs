//! Roster context and hooks for the UI.

use dioxus::prelude::*;
use store::Roster;

/// Get the roster owned by the nearest [`RosterProvider`].
/// Returns a signal that updates when users register.
pub fn use_roster() -> Signal<Roster> {
    use_context::<Signal<Roster>>()
}

/// Provider component that owns the in-memory roster for its subtree.
///
/// The roster is created when the provider mounts and discarded with it, so
/// every registration made through [`use_roster`] is gone after a reload.
#[component]
pub fn RosterProvider(children: Element) -> Element {
    let roster = use_signal(Roster::new);
    use_context_provider(|| roster);

    rsx! {
        {children}
    }
}
