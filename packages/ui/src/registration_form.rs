//! Registration form with inline validation.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::{City, Registration};

use crate::components::{Alert, Button, ButtonVariant, Input, Label};
use crate::use_roster;

/// User registration form bound to the surrounding roster.
///
/// A rejected submission keeps the field values so the user can correct the
/// offending field and resubmit; a successful one clears the whole form.
#[component]
pub fn RegistrationForm() -> Element {
    let mut roster = use_roster();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut pincode = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        // The `required` attributes keep these from being empty in the
        // browser; bail out quietly if they are anyway.
        let Ok(dob_value) = NaiveDate::parse_from_str(&dob(), "%Y-%m-%d") else {
            return;
        };
        let Ok(city_value) = city().parse::<City>() else {
            return;
        };

        let submission = Registration {
            name: name(),
            email: email(),
            dob: dob_value,
            city: city_value,
            pincode: pincode(),
        };

        let result = roster.write().register(submission, current_year());
        match result {
            Ok(record) => {
                tracing::debug!(id = %record.id, "registered {}", record.name);
                name.set(String::new());
                email.set(String::new());
                dob.set(String::new());
                city.set(String::new());
                pincode.set(String::new());
            }
            Err(err) => {
                tracing::warn!("registration rejected: {err}");
                error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        form {
            onsubmit: handle_register,
            class: "registration-form",

            h2 { class: "panel-title", "User Registration" }

            div {
                class: "form-group",
                Label { html_for: "name", "Name:" }
                Input {
                    id: "name",
                    r#type: "text",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div {
                class: "form-group",
                Label { html_for: "email", "Email:" }
                Input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div {
                class: "form-group",
                Label { html_for: "dob", "DOB:" }
                Input {
                    id: "dob",
                    r#type: "date",
                    required: true,
                    value: dob(),
                    oninput: move |evt: FormEvent| dob.set(evt.value()),
                }
            }

            div {
                class: "form-group",
                Label { html_for: "city", "City:" }
                select {
                    id: "city",
                    class: "input",
                    required: true,
                    value: city(),
                    onchange: move |evt| city.set(evt.value()),
                    option { value: "", "Select City" }
                    for option_city in City::ALL {
                        option {
                            key: "{option_city}",
                            value: "{option_city}",
                            "{option_city}"
                        }
                    }
                }
            }

            div {
                class: "form-group",
                Label { html_for: "pincode", "Pincode:" }
                Input {
                    id: "pincode",
                    r#type: "number",
                    pattern: "[0-9]{{6}}",
                    required: true,
                    value: pincode(),
                    oninput: move |evt: FormEvent| pincode.set(evt.value()),
                }
            }

            if let Some(err) = error() {
                Alert { "{err}" }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                "Register"
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
