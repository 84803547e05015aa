//! Password reset request page.

use dioxus::prelude::*;

use crate::api::auth::{AuthClient, ForgotPasswordRequest};
use crate::api::ApiError;
use crate::app::components::{ErrorAlert, Layout, TextField};
use crate::app::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<ApiError>::None);
    // The acknowledgement message from the backend; worded the same for
    // known and unknown addresses.
    let mut sent = use_signal(|| Option::<String>::None);

    let mut submit = move |_: ()| {
        if busy() {
            return;
        }
        error.set(None);
        busy.set(true);
        spawn(async move {
            let req = ForgotPasswordRequest { email: email() };
            match AuthClient::new().forgot_password(&req).await {
                Ok(message) => sent.set(Some(message)),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let current = error();
    let email_error = current
        .as_ref()
        .and_then(|e| e.field_error("email"))
        .unwrap_or_default();
    let alert = match &current {
        Some(e) if email_error.is_empty() => Some(e.to_string()),
        _ => None,
    };
    let confirmation = sent();

    rsx! {
        Layout {
            title: "Reset password".to_string(),
            nav_active: String::new(),
            hide_chat: true,

            section { class: "auth-card",
                h1 { "Reset your password" }

                if let Some(message) = confirmation {
                    p { class: "auth-sent", role: "status", "{message}" }
                    p { class: "auth-links",
                        Link { to: Route::Login {}, "Back to log in" }
                    }
                } else {
                    p { class: "text-muted",
                        "Enter the address you signed up with and we'll send a reset link."
                    }

                    if let Some(message) = alert {
                        ErrorAlert {
                            message: message,
                            on_dismiss: move |_| error.set(None),
                        }
                    }

                    form {
                        onsubmit: move |e| {
                            e.prevent_default();
                            submit(());
                        },
                        TextField {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            value: email(),
                            placeholder: "you@company.com",
                            autocomplete: "email",
                            error: email_error,
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: busy(),
                            if busy() { "Sending..." } else { "Send reset link" }
                        }
                    }

                    p { class: "auth-links",
                        Link { to: Route::Login {}, "Back to log in" }
                    }
                }
            }
        }
    }
}
