//! Billing page: payment history, payment detail, refunds and plan
//! revert.

use dioxus::prelude::*;

use crate::api::payment::{Payment, PaymentClient};
use crate::api::ApiError;
use crate::app::components::{ErrorAlert, Layout};
use crate::app::hooks::{use_auth, RequireAuth};
use crate::app::pages::dashboard::DashboardNav;

fn card_display(payment: &Payment) -> String {
    match (&payment.card_brand, &payment.card_last_four) {
        (Some(brand), Some(last4)) => format!("{} ···· {}", brand, last4),
        _ => "—".to_string(),
    }
}

fn date_display(payment: &Payment) -> String {
    payment
        .created_at
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn Billing() -> Element {
    rsx! {
        Layout {
            title: "Billing".to_string(),
            nav_active: "dashboard".to_string(),

            RequireAuth {
                DashboardNav { active: "billing" }
                BillingInner {}
            }
        }
    }
}

#[component]
fn BillingInner() -> Element {
    let auth = use_auth();

    let mut payments = use_resource(move || {
        let token = auth.token();
        async move {
            let Some(token) = token else {
                return Err(ApiError::Network("not signed in".to_string()));
            };
            PaymentClient::new().payments(&token).await
        }
    });

    let mut selected = use_signal(|| Option::<u64>::None);
    let mut detail = use_resource(move || {
        let token = auth.token();
        let id = selected();
        async move {
            let (Some(token), Some(id)) = (token, id) else {
                return Ok(None);
            };
            PaymentClient::new().payment(&token, id).await.map(Some)
        }
    });

    let mut refunding = use_signal(|| Option::<u64>::None);
    let mut revert_busy = use_signal(|| false);
    let mut revert_ack = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut refund = move |id: u64| {
        if refunding().is_some() {
            return;
        }
        let Some(token) = auth.token() else {
            return;
        };
        refunding.set(Some(id));
        action_error.set(None);
        spawn(async move {
            match PaymentClient::new().refund(&token, id).await {
                Ok(_) => {
                    payments.restart();
                    if selected() == Some(id) {
                        detail.restart();
                    }
                }
                Err(e) => action_error.set(Some(format!("Refund failed: {e}"))),
            }
            refunding.set(None);
        });
    };

    let mut revert = move |_: ()| {
        if revert_busy() {
            return;
        }
        let Some(token) = auth.token() else {
            return;
        };
        revert_busy.set(true);
        action_error.set(None);
        revert_ack.set(None);
        spawn(async move {
            match PaymentClient::new().revert_plan(&token).await {
                Ok(message) => revert_ack.set(Some(message)),
                Err(e) => action_error.set(Some(format!("Couldn't revert the plan: {e}"))),
            }
            revert_busy.set(false);
        });
    };

    let history = payments.read().clone();
    let action_alert = action_error();
    let ack = revert_ack();
    let busy_refund = refunding();

    let table = match history {
        None => rsx! {
            article { aria_busy: "true", class: "page-loading", "Loading payments..." }
        },
        Some(Err(err)) => rsx! {
            ErrorAlert {
                message: format!("Couldn't load payments: {err}"),
                on_dismiss: move |_| {},
                on_retry: move |_| payments.restart(),
            }
        },
        Some(Ok(list)) => {
            if list.is_empty() {
                rsx! {
                    p { class: "text-muted", "No payments yet. They'll show up here after your first checkout." }
                }
            } else {
                let rows: Vec<(u64, String, String, String, String, &'static str, bool)> = list
                    .iter()
                    .map(|p| {
                        let status_class = match p.status.as_str() {
                            "succeeded" => "payment-status status-ok",
                            "refunded" => "payment-status status-warn",
                            _ => "payment-status status-err",
                        };
                        (
                            p.id,
                            date_display(p),
                            format!("{} {}", p.amount, p.currency),
                            card_display(p),
                            p.status.clone(),
                            status_class,
                            p.status == "succeeded",
                        )
                    })
                    .collect();
                rsx! {
                    table { class: "payments-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Amount" }
                                th { "Card" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for (id, date, amount, card, status, status_class, refundable) in rows {
                                tr {
                                    td { "{date}" }
                                    td { "{amount}" }
                                    td { "{card}" }
                                    td { span { class: "{status_class}", "{status}" } }
                                    td { class: "payment-actions",
                                        button {
                                            class: "btn btn-sm",
                                            onclick: move |_| selected.set(Some(id)),
                                            "View"
                                        }
                                        if refundable {
                                            button {
                                                class: "btn btn-sm btn-ghost",
                                                disabled: busy_refund.is_some(),
                                                onclick: move |_| refund(id),
                                                if busy_refund == Some(id) { "Refunding..." } else { "Refund" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let detail_view = match (selected(), detail.read().clone()) {
        (None, _) => rsx! {},
        (Some(_), None) => rsx! {
            article { aria_busy: "true", class: "payment-detail", "Loading payment..." }
        },
        (Some(_), Some(Err(err))) => rsx! {
            article { class: "payment-detail",
                p { class: "status-err", "Couldn't load this payment: {err}" }
            }
        },
        (Some(_), Some(Ok(None))) => rsx! {},
        (Some(_), Some(Ok(Some(payment)))) => {
            let card = card_display(&payment);
            let date = date_display(&payment);
            let subscription = payment
                .subscription_id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "—".to_string());
            rsx! {
                article { class: "payment-detail",
                    header {
                        h3 { "Payment #{payment.id}" }
                        button {
                            class: "btn btn-ghost btn-sm",
                            aria_label: "Close detail",
                            onclick: move |_| selected.set(None),
                            "×"
                        }
                    }
                    dl {
                        dt { "Date" }
                        dd { "{date}" }
                        dt { "Amount" }
                        dd { "{payment.amount} {payment.currency}" }
                        dt { "Card" }
                        dd { "{card}" }
                        dt { "Status" }
                        dd { "{payment.status}" }
                        dt { "Subscription" }
                        dd { "{subscription}" }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "billing",
            h1 { "Billing" }

            if let Some(message) = action_alert {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| action_error.set(None),
                }
            }

            section { class: "payment-history",
                h2 { "Payment history" }
                {table}
            }

            {detail_view}

            section { class: "revert-plan",
                h2 { "Plan changes" }
                p { class: "text-muted",
                    "Refunded an upgrade by mistake? Revert puts your account back on the plan you had before the last change."
                }
                if let Some(message) = ack {
                    p { class: "revert-ack", role: "status", "{message}" }
                }
                button {
                    class: "btn",
                    disabled: revert_busy(),
                    onclick: move |_| revert(()),
                    if revert_busy() { "Reverting..." } else { "Revert to previous plan" }
                }
            }
        }
    }
}
