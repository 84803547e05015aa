//! About page: company story, team, office map.

use dioxus::prelude::*;

use crate::api::maps::{MapsClient, PinRequest};
use crate::app::components::Layout;
use crate::content::{MILESTONES, TEAM};
use crate::session::consent::active_backend;

/// Head office pin. The embed itself comes from the backend and is
/// cached client-side, so repeat visits render the map without a call.
fn office_pin() -> PinRequest {
    PinRequest {
        latitude: 18.5204,
        longitude: 73.8567,
        zoom: 14,
        label: Some("Pavit Infotech, Pune".to_string()),
    }
}

#[component]
fn OfficeMap() -> Element {
    let embed = use_resource(|| async {
        let store = active_backend();
        MapsClient::new().pin_cached(store.as_ref(), &office_pin()).await
    });

    let state = embed.read().clone();
    match state {
        None => rsx! {
            div { class: "office-map", aria_busy: "true", "Loading map..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "office-map office-map-fallback",
                p { "Pavit Infotech" }
                p { class: "text-muted", "4th Floor, Baner Road, Pune 411045, India" }
            }
        },
        Some(Ok(html)) => rsx! {
            div { class: "office-map", dangerous_inner_html: "{html}" }
        },
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Layout {
            title: "About".to_string(),
            nav_active: "about".to_string(),

            section { class: "page-header",
                h1 { "About Pavit" }
                p { class: "text-muted",
                    "We build monitoring software for the machines the internet forgot. Founded in Pune, running fleets on four continents."
                }
            }

            section { class: "milestones",
                h2 { "Milestones" }
                ul { class: "milestone-list",
                    for milestone in MILESTONES {
                        li {
                            strong { "{milestone.year}" }
                            span { " {milestone.event}" }
                        }
                    }
                }
            }

            section { class: "team",
                h2 { "The team" }
                div { class: "team-grid",
                    for member in TEAM {
                        article { class: "team-card",
                            h3 { "{member.name}" }
                            p { class: "team-role", "{member.role}" }
                            p { "{member.bio}" }
                        }
                    }
                }
            }

            section { class: "visit",
                h2 { "Visit us" }
                OfficeMap {}
            }
        }
    }
}
