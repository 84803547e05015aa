//! Legal documents (privacy policy, terms of service).

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::pages::NotFound;
use crate::content;

#[component]
pub fn Legal(slug: String) -> Element {
    let Some(doc) = content::legal_doc(&slug) else {
        return rsx! {
            NotFound { segments: vec!["legal".to_string(), slug] }
        };
    };

    rsx! {
        Layout {
            title: doc.title.to_string(),
            nav_active: String::new(),

            article { class: "legal-doc",
                h1 { "{doc.title}" }
                p { class: "text-muted", "Last updated {doc.updated}" }
                for section in doc.sections {
                    h2 { "{section.heading}" }
                    p { "{section.body}" }
                }
            }
        }
    }
}
