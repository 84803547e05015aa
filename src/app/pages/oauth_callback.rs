//! OAuth landing route.
//!
//! Providers redirect back here with the session token and basic
//! profile in the query string. A missing token means the provider
//! denied or the state check failed upstream; all we can offer is a
//! retry.

use dioxus::prelude::*;

use crate::api::auth::User;
use crate::app::components::Layout;
use crate::app::hooks::use_auth;
use crate::app::Route;
use crate::session::Session;

#[component]
pub fn OauthCallback(token: String, name: String, email: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let failed = token.is_empty();
    let token_effect = token.clone();
    let name_effect = name.clone();
    let email_effect = email.clone();

    use_effect(move || {
        if token_effect.is_empty() {
            return;
        }
        if !auth.is_authenticated() {
            // Providers hand back only the basics; the full profile
            // arrives with the first authenticated call.
            let display_name = if name_effect.is_empty() {
                email_effect
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            } else {
                name_effect.clone()
            };
            auth.sign_in(Session {
                token: token_effect.clone(),
                user: User {
                    id: 0,
                    name: display_name,
                    email: email_effect.clone(),
                    subscription: None,
                },
            });
        }
        nav.replace(Route::Dashboard {});
    });

    rsx! {
        Layout {
            title: "Signing in".to_string(),
            nav_active: String::new(),
            hide_chat: true,

            section { class: "auth-card",
                if failed {
                    h1 { "Sign-in didn't complete" }
                    p { class: "text-muted",
                        "Your provider didn't return a session. This usually means the request was cancelled or timed out."
                    }
                    p { class: "auth-links",
                        Link { class: "btn btn-primary", to: Route::Login {}, "Try again" }
                    }
                } else {
                    article { aria_busy: "true", class: "page-loading", "Completing sign-in..." }
                }
            }
        }
    }
}
