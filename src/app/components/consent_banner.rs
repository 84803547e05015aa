//! Cookie consent banner.
//!
//! Shown until the visitor answers. The answer decides where the session
//! lives (see `session::consent`), so the banner renders on every page
//! through the layout rather than only on auth pages.

use dioxus::prelude::*;

use crate::app::hooks::use_consent;
use crate::session::consent::Consent;

#[component]
pub fn ConsentBanner() -> Element {
    let consent = use_consent();

    if !consent.needs_prompt() {
        return rsx! {};
    }

    rsx! {
        div { class: "consent-banner", role: "dialog", aria_label: "Cookie consent",
            p {
                "We use a first-party cookie to keep you signed in. If you decline, "
                "sign-in still works; it just stays in this browser's local storage. "
                a { href: "/legal/privacy", "Privacy policy" }
            }
            div { class: "consent-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| consent.choose(Consent::Accepted),
                    "Accept cookies"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| consent.choose(Consent::Declined),
                    "Decline"
                }
            }
        }
    }
}
