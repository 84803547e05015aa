//! Login page.

use dioxus::prelude::*;

use crate::api::auth::{oauth_redirect_url, AuthClient, LoginRequest, OauthProvider};
use crate::api::ApiError;
use crate::app::components::{ErrorAlert, Layout, TextField};
use crate::app::hooks::use_auth;
use crate::app::Route;
use crate::session::Session;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<ApiError>::None);

    // Visiting /login while signed in is a no-op; skip to the dashboard.
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
        busy.set(true);
        spawn(async move {
            let req = LoginRequest {
                email: email(),
                password: password(),
            };
            match AuthClient::new().login(&req).await {
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
    let email_error = current
        .as_ref()
        .and_then(|e| e.field_error("email"))
        .unwrap_or_default();
    let password_error = current
        .as_ref()
        .and_then(|e| e.field_error("password"))
        .unwrap_or_default();
    let alert = match &current {
        Some(e) if email_error.is_empty() && password_error.is_empty() => Some(e.to_string()),
        _ => None,
    };

    let google_url = oauth_redirect_url(OauthProvider::Google);
    let github_url = oauth_redirect_url(OauthProvider::GitHub);

    rsx! {
        Layout {
            title: "Log in".to_string(),
            nav_active: "login".to_string(),
            hide_chat: true,

            section { class: "auth-card",
                h1 { "Log in" }

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
                    TextField {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        value: password(),
                        autocomplete: "current-password",
                        error: password_error,
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: busy(),
                        if busy() { "Signing in..." } else { "Log in" }
                    }
                }

                div { class: "auth-divider", span { "or" } }
                div { class: "oauth-buttons",
                    a { class: "btn btn-oauth", href: "{google_url}", "Continue with Google" }
                    a { class: "btn btn-oauth", href: "{github_url}", "Continue with GitHub" }
                }

                p { class: "auth-links",
                    Link { to: Route::ForgotPassword {}, "Forgot your password?" }
                }
                p { class: "auth-links",
                    "New to Pavit? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
