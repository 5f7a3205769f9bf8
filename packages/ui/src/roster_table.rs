//! Searchable table of registered users.

use dioxus::prelude::*;

use crate::components::{Input, Label};
use crate::icons::FaMagnifyingGlass;
use crate::use_roster;
use crate::Icon;

/// Table of every registered user, narrowed live by the search box.
///
/// The search derives a view over the roster and never removes records, so
/// clearing the box shows the full list again.
#[component]
pub fn RosterTable() -> Element {
    let roster = use_roster();
    let mut query = use_signal(String::new);

    let visible = roster.read().filter_by_name(&query());

    rsx! {
        div {
            class: "roster-panel",

            h2 { class: "panel-title", "User List" }

            div {
                class: "form-group",
                Label {
                    html_for: "search",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    " Search by Name:"
                }
                Input {
                    id: "search",
                    r#type: "text",
                    placeholder: "search...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }

            table {
                class: "roster-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "DOB" }
                        th { "City" }
                        th { "Pincode" }
                    }
                }
                tbody {
                    for user in visible {
                        tr {
                            key: "{user.id}",
                            td { "{user.name}" }
                            td { "{user.email}" }
                            td { "{user.dob}" }
                            td { "{user.city}" }
                            td { "{user.pincode}" }
                        }
                    }
                }
            }
        }
    }
}
