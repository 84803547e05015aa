//! Catch-all 404 page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Page not found".to_string(),
            nav_active: String::new(),

            section { class: "not-found",
                h1 { "404" }
                p {
                    "There's nothing at "
                    code { "{path}" }
                    "."
                }
                p {
                    Link { class: "btn btn-primary", to: Route::Home {}, "Back to the home page" }
                }
            }
        }
    }
}
