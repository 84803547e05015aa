//! Reusable form input components.

use dioxus::prelude::*;

/// A labelled text input with an inline validation message slot. The
/// error slot takes the first backend field error or a client-side
/// validation message; empty means valid.
#[component]
pub fn TextField(
    /// Input label
    label: &'static str,
    /// Field name, doubles as the element id
    name: &'static str,
    /// HTML input type
    #[props(default = "text")]
    input_type: &'static str,
    /// Controlled value
    value: String,
    #[props(default = "")]
    placeholder: &'static str,
    #[props(default = "")]
    autocomplete: &'static str,
    /// Validation message to show under the field; empty means valid
    #[props(default)]
    error: String,
    /// Called on every input event
    oninput: EventHandler<FormEvent>,
) -> Element {
    let has_error = !error.is_empty();

    rsx! {
        div { class: "field",
            label { r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                autocomplete: "{autocomplete}",
                aria_invalid: if has_error { "true" },
                oninput: move |e| oninput.call(e),
            }
            if has_error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}
