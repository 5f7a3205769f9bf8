use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default = String::new())] html_for: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "form-label {class}",
            r#for: if !html_for.is_empty() { "{html_for}" },
            {children}
        }
    }
}
