//! Navigation component for the web UI.

use dioxus::prelude::*;

use crate::app::hooks::use_auth;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "pricing")
    pub active: String,
}

/// Top navigation bar. Marketing links on the left, session actions on
/// the right.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let signed_in = auth.is_authenticated();
    let first_name = auth
        .user()
        .map(|u| u.name.split_whitespace().next().unwrap_or_default().to_string())
        .unwrap_or_default();

    rsx! {
        nav { class: "site-nav",
            ul {
                li {
                    a { href: "/", class: "brand", strong { "Pavit IoT" } }
                }
            }
            ul {
                li {
                    if props.active == "home" {
                        a { href: "/", "aria-current": "page", strong { "Home" } }
                    } else {
                        a { href: "/", "Home" }
                    }
                }
                li {
                    if props.active == "pricing" {
                        a { href: "/pricing", "aria-current": "page", strong { "Pricing" } }
                    } else {
                        a { href: "/pricing", "Pricing" }
                    }
                }
                li {
                    if props.active == "blog" {
                        a { href: "/blog", "aria-current": "page", strong { "Blog" } }
                    } else {
                        a { href: "/blog", "Blog" }
                    }
                }
                li {
                    if props.active == "about" {
                        a { href: "/about", "aria-current": "page", strong { "About" } }
                    } else {
                        a { href: "/about", "About" }
                    }
                }
            }
            ul { class: "nav-session",
                if signed_in {
                    li {
                        if props.active == "dashboard" {
                            a { href: "/dashboard", "aria-current": "page", strong { "Dashboard" } }
                        } else {
                            a { href: "/dashboard", "Dashboard" }
                        }
                    }
                    li { span { class: "nav-user", "{first_name}" } }
                    li {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                auth.sign_out();
                                nav.push(Route::Home {});
                            },
                            "Sign out"
                        }
                    }
                } else {
                    li {
                        if props.active == "login" {
                            a { href: "/login", "aria-current": "page", strong { "Log in" } }
                        } else {
                            a { href: "/login", "Log in" }
                        }
                    }
                    li {
                        a { href: "/register", class: "btn btn-primary", "Get started" }
                    }
                }
            }
        }
    }
}
