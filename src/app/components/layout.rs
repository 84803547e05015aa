//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::chat::ChatWidget;
use super::consent_banner::ConsentBanner;
use super::footer::SiteFooter;
use super::nav::Nav;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
    /// Hide the assistant launcher (auth and checkout forms keep focus)
    #[props(default = false)]
    pub hide_chat: bool,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Pavit IoT", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Meta {
            name: "description",
            content: "Pavit IoT monitors your device fleet: live telemetry, alert rules, reports and heatmaps in one dashboard."
        }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/main.css")
        }
        document::Link {
            rel: "icon",
            r#type: "image/svg+xml",
            href: asset!("/public/favicon.svg")
        }

        // Body content
        Nav { active: props.nav_active.clone() }
        main { class: "page",
            {props.children}
        }
        if !props.hide_chat {
            ChatWidget {}
        }
        ConsentBanner {}
        SiteFooter {}
    }
}
