//! Account registration page.

use dioxus::prelude::*;

use crate::api::auth::{oauth_redirect_url, AuthClient, OauthProvider, RegisterRequest};
use crate::api::ApiError;
use crate::app::components::{ErrorAlert, Layout, TextField};
use crate::app::hooks::use_auth;
use crate::app::Route;
use crate::session::Session;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut mismatch = use_signal(|| false);

    use_effect(move || {
        if auth.is_loaded() && auth.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let mut submit = move |_: ()| {
        if busy() {
            return;
        }
        error.set(None);
        // The backend checks this too; catching it here saves a round
        // trip and gives a message on the right field.
        if password() != confirmation() {
            mismatch.set(true);
            return;
        }
        mismatch.set(false);
        busy.set(true);
        spawn(async move {
            let req = RegisterRequest {
                name: name(),
                email: email(),
                password: password(),
                password_confirmation: confirmation(),
            };
            match AuthClient::new().register(&req).await {
                Ok(payload) => {
                    auth.sign_in(Session {
                        token: payload.token,
                        user: payload.user,
                    });
                    nav.push(Route::Dashboard {});
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let current = error();
    let name_error = current
        .as_ref()
        .and_then(|e| e.field_error("name"))
        .unwrap_or_default();
    let email_error = current
        .as_ref()
        .and_then(|e| e.field_error("email"))
        .unwrap_or_default();
    let password_error = current
        .as_ref()
        .and_then(|e| e.field_error("password"))
        .unwrap_or_default();
    let confirmation_error = if mismatch() {
        "Passwords do not match."
    } else {
        current
            .as_ref()
            .and_then(|e| e.field_error("password_confirmation"))
            .unwrap_or_default()
    };
    let has_field_error = !name_error.is_empty()
        || !email_error.is_empty()
        || !password_error.is_empty()
        || !confirmation_error.is_empty();
    let alert = match &current {
        Some(e) if !has_field_error => Some(e.to_string()),
        _ => None,
    };

    let google_url = oauth_redirect_url(OauthProvider::Google);
    let github_url = oauth_redirect_url(OauthProvider::GitHub);

    rsx! {
        Layout {
            title: "Create account".to_string(),
            nav_active: String::new(),
            hide_chat: true,

            section { class: "auth-card",
                h1 { "Create your account" }
                p { class: "text-muted", "Free for 14 days on any plan. No card needed to start." }

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
                        label: "Full name",
                        name: "name",
                        value: name(),
                        placeholder: "Priya Kulkarni",
                        autocomplete: "name",
                        error: name_error,
                        oninput: move |e: FormEvent| name.set(e.value()),
                    }
                    TextField {
                        label: "Work email",
                        name: "email",
                        input_type: "email",
                        value: email(),
                        placeholder: "you@company.com",
                        autocomplete: "email",
                        error: email_error,
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                    TextField {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        value: password(),
                        autocomplete: "new-password",
                        error: password_error,
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    TextField {
                        label: "Confirm password",
                        name: "password_confirmation",
                        input_type: "password",
                        value: confirmation(),
                        autocomplete: "new-password",
                        error: confirmation_error,
                        oninput: move |e: FormEvent| confirmation.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: busy(),
                        if busy() { "Creating account..." } else { "Create account" }
                    }
                }

                div { class: "auth-divider", span { "or" } }
                div { class: "oauth-buttons",
                    a { class: "btn btn-oauth", href: "{google_url}", "Continue with Google" }
                    a { class: "btn btn-oauth", href: "{github_url}", "Continue with GitHub" }
                }

                p { class: "auth-links",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
