//! Landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::hooks::use_auth;
use crate::app::Route;
use crate::content::devices;

struct Capability {
    title: &'static str,
    blurb: &'static str,
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Live telemetry",
        blurb: "Temperature, humidity, vibration and power from every site on one screen, sampled down to the minute.",
    },
    Capability {
        title: "Alert rules",
        blurb: "Draw the rule, pick the channel. Triggers and conditions chain visually, no query language to learn.",
    },
    Capability {
        title: "Weekly reports",
        blurb: "Drag the blocks you want into a report layout and we deliver it to your inbox every Monday.",
    },
    Capability {
        title: "Fleet heatmaps",
        blurb: "Spot the 3 AM spike. Week-by-hour heatmaps make slow drift and periodic faults obvious.",
    },
];

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth.is_authenticated();

    let fleet = devices::fleet();
    let online = fleet.iter().filter(|d| d.online).count();
    let sites: Vec<&'static str> = {
        let mut seen = Vec::new();
        for device in fleet {
            if !seen.contains(&device.site) {
                seen.push(device.site);
            }
        }
        seen
    };

    rsx! {
        Layout {
            title: "Industrial IoT monitoring".to_string(),
            nav_active: "home".to_string(),

            section { class: "hero",
                h1 { "See every machine. Catch every drift." }
                p { class: "hero-sub",
                    "Pavit connects your plant-floor sensors to one dashboard with visual alert rules, weekly reports and heatmaps your ops team will actually read."
                }
                div { class: "hero-actions",
                    if signed_in {
                        Link { class: "btn btn-primary", to: Route::Dashboard {}, "Open dashboard" }
                    } else {
                        Link { class: "btn btn-primary", to: Route::Register {}, "Start free" }
                        Link { class: "btn btn-ghost", to: Route::Pricing {}, "See pricing" }
                    }
                }
            }

            section { class: "capabilities",
                h2 { "What you get" }
                div { class: "capability-grid",
                    for capability in CAPABILITIES {
                        article { class: "capability-card",
                            h3 { "{capability.title}" }
                            p { "{capability.blurb}" }
                        }
                    }
                }
            }

            section { class: "live-strip",
                h2 { "Running right now" }
                p {
                    "The demo fleet spans "
                    strong { "{sites.len()} sites" }
                    " with "
                    strong { "{online} of {fleet.len()} devices online" }
                    ". Sign in to poke at the same widgets your team would use."
                }
                ul { class: "site-list",
                    for site in sites {
                        li { "{site}" }
                    }
                }
            }
        }
    }
}
