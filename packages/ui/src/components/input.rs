use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] pattern: String,
    #[props(default = false)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            id: if !id.is_empty() { "{id}" },
            class: "input {class}",
            r#type: "{kind}",
            placeholder: if !placeholder.is_empty() { "{placeholder}" },
            pattern: if !pattern.is_empty() { "{pattern}" },
            required: required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
