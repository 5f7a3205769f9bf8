use dioxus::prelude::*;

/// Inline danger-styled alert for form errors.
#[component]
pub fn Alert(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "alert alert-danger {class}",
            role: "alert",
            {children}
        }
    }
}
