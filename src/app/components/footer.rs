//! Site footer with link columns and the build line.

use dioxus::prelude::*;

use super::theme::ThemeSwitcher;

#[component]
pub fn SiteFooter() -> Element {
    let version = env!("PAVIT_VERSION");
    let git_sha = env!("PAVIT_GIT_SHA");

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-columns",
                div {
                    h4 { "Product" }
                    ul {
                        li { a { href: "/pricing", "Pricing" } }
                        li { a { href: "/dashboard", "Dashboard" } }
                        li { a { href: "/blog", "Blog" } }
                    }
                }
                div {
                    h4 { "Company" }
                    ul {
                        li { a { href: "/about", "About us" } }
                        li { a { href: "mailto:hello@pavitinfotech.com", "Contact" } }
                    }
                }
                div {
                    h4 { "Legal" }
                    ul {
                        li { a { href: "/legal/privacy", "Privacy policy" } }
                        li { a { href: "/legal/terms", "Terms of service" } }
                    }
                }
                div {
                    h4 { "Appearance" }
                    ThemeSwitcher {}
                }
            }
            div { class: "footer-meta",
                small { class: "text-muted", "Pavit Infotech · pavit-web v{version} ({git_sha})" }
            }
        }
    }
}
