//! Public pricing page, plans fetched from the backend.

use dioxus::prelude::*;

use crate::api::payment::PaymentClient;
use crate::app::components::{ErrorAlert, Layout};
use crate::app::hooks::{use_active_plan, use_auth};
use crate::app::Route;

#[component]
pub fn Pricing() -> Element {
    let auth = use_auth();
    let active_plan = use_active_plan();
    let mut plans = use_resource(|| async { PaymentClient::new().plans().await });
    let mut dismissed = use_signal(|| false);

    let signed_in = auth.is_authenticated();
    let current_slug = active_plan.map(|p| p.slug);
    let state = plans.read().clone();

    let body = match state {
        None => rsx! {
            article { aria_busy: "true", class: "page-loading", "Loading plans..." }
        },
        Some(Err(err)) => {
            if dismissed() {
                rsx! {
                    p { class: "text-muted", "Plans are unavailable right now." }
                }
            } else {
                rsx! {
                    ErrorAlert {
                        message: format!("Couldn't load plans: {err}"),
                        on_dismiss: move |_| dismissed.set(true),
                        on_retry: move |_| {
                            dismissed.set(false);
                            plans.restart();
                        },
                    }
                }
            }
        }
        Some(Ok(list)) => rsx! {
            div { class: "plan-grid",
                for plan in list {
                    article {
                        key: "{plan.slug}",
                        class: "plan-card",
                        class: if plan.highlighted { "highlighted" },
                        h3 { "{plan.name}" }
                        p { class: "plan-blurb", "{plan.description}" }
                        p { class: "plan-price",
                            strong { "{plan.price} {plan.currency}" }
                            span { class: "text-muted", " / {plan.interval}" }
                        }
                        ul { class: "plan-features",
                            for feature in plan.features.iter() {
                                li { "{feature}" }
                            }
                        }
                        if current_slug.as_deref() == Some(plan.slug.as_str()) {
                            p { class: "plan-current", "Your current plan" }
                        } else if signed_in {
                            Link {
                                class: "btn btn-primary",
                                to: Route::Checkout { slug: plan.slug.clone() },
                                "Choose {plan.name}"
                            }
                        } else {
                            Link {
                                class: "btn btn-primary",
                                to: Route::Register {},
                                "Start with {plan.name}"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Pricing".to_string(),
            nav_active: "pricing".to_string(),

            section { class: "page-header",
                h1 { "Pricing" }
                p { class: "text-muted",
                    "Every plan includes the dashboard, alert rules and reports. Pick by fleet size; switch or step back any time from billing."
                }
            }
            {body}
        }
    }
}
