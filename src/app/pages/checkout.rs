//! Checkout: subscribe to a plan and pay by card.
//!
//! Two-step flow against the backend: create the subscription, then
//! process the payment. Card details are validated locally before
//! either call goes out.

use chrono::Utc;
use dioxus::prelude::*;

use crate::api::payment::{
    CreateSubscriptionRequest, Payment, PaymentClient, Plan, ProcessPaymentRequest,
};
use crate::api::ApiError;
use crate::app::components::{ErrorAlert, Layout, TextField};
use crate::app::hooks::{use_auth, RequireAuth};
use crate::app::Route;
use crate::billing::{
    detect_brand, format_card_number, normalize, parse_expiry, validate_card_number,
    validate_cvv, validate_expiry, CardBrand,
};

#[component]
pub fn Checkout(slug: String) -> Element {
    rsx! {
        Layout {
            title: "Checkout".to_string(),
            nav_active: String::new(),
            hide_chat: true,

            RequireAuth {
                PlanLoader { slug: slug.clone() }
            }
        }
    }
}

#[component]
fn PlanLoader(slug: String) -> Element {
    let fetch_slug = slug.clone();
    let mut plan = use_resource(use_reactive!(|fetch_slug| async move {
        PaymentClient::new().plan_by_slug(&fetch_slug).await
    }));

    let state = plan.read().clone();
    match state {
        None => rsx! {
            article { aria_busy: "true", class: "page-loading", "Loading plan..." }
        },
        Some(Err(err)) => rsx! {
            ErrorAlert {
                message: format!("Couldn't load this plan: {err}"),
                on_dismiss: move |_| {},
                on_retry: move |_| plan.restart(),
            }
            p { class: "auth-links",
                Link { to: Route::Pricing {}, "Back to pricing" }
            }
        },
        Some(Ok(loaded)) => rsx! {
            CheckoutForm { plan: loaded }
        },
    }
}

#[component]
fn CheckoutForm(plan: Plan) -> Element {
    let auth = use_auth();

    let mut card_number = use_signal(String::new);
    let mut card_holder = use_signal(String::new);
    let mut expiry = use_signal(String::new);
    let mut cvv = use_signal(String::new);

    let mut number_error = use_signal(|| Option::<String>::None);
    let mut holder_error = use_signal(|| Option::<String>::None);
    let mut expiry_error = use_signal(|| Option::<String>::None);
    let mut cvv_error = use_signal(|| Option::<String>::None);
    let mut alert = use_signal(|| Option::<String>::None);

    let mut busy = use_signal(|| false);
    let mut paid = use_signal(|| Option::<Payment>::None);

    let plan_id = plan.id;
    let plan_for_refresh = plan.clone();

    let mut submit = move |_: ()| {
        if busy() {
            return;
        }
        number_error.set(None);
        holder_error.set(None);
        expiry_error.set(None);
        cvv_error.set(None);
        alert.set(None);

        // Validate everything before deciding whether to submit, so the
        // user sees all problems at once.
        let number = normalize(&card_number());
        let brand = match validate_card_number(&number) {
            Ok(brand) => Some(brand),
            Err(e) => {
                number_error.set(Some(e.to_string()));
                None
            }
        };
        let holder = card_holder().trim().to_string();
        if holder.is_empty() {
            holder_error.set(Some("Name on card is required.".to_string()));
        }
        let parsed_expiry = match parse_expiry(&expiry()) {
            Ok((month, year)) => {
                match validate_expiry(month, year, Utc::now().date_naive()) {
                    Ok(()) => Some((month, year)),
                    Err(e) => {
                        expiry_error.set(Some(e.to_string()));
                        None
                    }
                }
            }
            Err(e) => {
                expiry_error.set(Some(e.to_string()));
                None
            }
        };
        if let Some(brand) = brand {
            if let Err(e) = validate_cvv(&cvv(), brand) {
                cvv_error.set(Some(e.to_string()));
            }
        }
        let (Some(_), Some((month, year))) = (brand, parsed_expiry) else {
            return;
        };
        if holder_error().is_some() || cvv_error().is_some() {
            return;
        }

        let Some(token) = auth.token() else {
            return;
        };
        let plan_after = plan_for_refresh.clone();
        busy.set(true);
        spawn(async move {
            let client = PaymentClient::new();
            let subscription = match client
                .create_subscription(&token, &CreateSubscriptionRequest { plan_id })
                .await
            {
                Ok(sub) => sub,
                Err(e) => {
                    alert.set(Some(format!("Couldn't start the subscription: {e}")));
                    busy.set(false);
                    return;
                }
            };

            let req = ProcessPaymentRequest {
                subscription_id: subscription.id,
                card_number: normalize(&card_number()),
                card_holder: card_holder().trim().to_string(),
                expiry_month: format!("{:02}", month),
                expiry_year: year.to_string(),
                cvv: cvv(),
            };
            match client.process_payment(&token, &req).await {
                Ok(payment) => {
                    // Reflect the new plan locally; the server state is
                    // already updated.
                    if let Some(mut user) = auth.user() {
                        let mut sub = subscription;
                        sub.status = "active".to_string();
                        if sub.plan.is_none() {
                            sub.plan = Some(plan_after.clone());
                        }
                        user.subscription = Some(sub);
                        auth.refresh_user(user);
                    }
                    paid.set(Some(payment));
                }
                Err(e) => {
                    let number = e.field_error("card_number").map(String::from);
                    let holder = e.field_error("card_holder").map(String::from);
                    let exp = e
                        .field_error("expiry_month")
                        .or_else(|| e.field_error("expiry_year"))
                        .map(String::from);
                    let cvv_msg = e.field_error("cvv").map(String::from);
                    let any_field = number.is_some()
                        || holder.is_some()
                        || exp.is_some()
                        || cvv_msg.is_some();
                    number_error.set(number);
                    holder_error.set(holder);
                    expiry_error.set(exp);
                    cvv_error.set(cvv_msg);
                    if !any_field {
                        alert.set(Some(format!("Payment failed: {e}")));
                    }
                }
            }
            busy.set(false);
        });
    };

    let brand = detect_brand(&normalize(&card_number()));
    let brand_hint = if brand == CardBrand::Unknown {
        String::new()
    } else {
        brand.label().to_string()
    };
    let alert_text = alert();
    let receipt = paid();

    if let Some(payment) = receipt {
        let card = match (&payment.card_brand, &payment.card_last_four) {
            (Some(brand), Some(last4)) => format!("{} ending {}", brand, last4),
            _ => "your card".to_string(),
        };
        return rsx! {
            section { class: "checkout-done",
                h1 { "You're on {plan.name}" }
                p {
                    "We charged "
                    strong { "{payment.amount} {payment.currency}" }
                    " to {card}."
                }
                p { class: "text-muted", "A receipt is on its way to your inbox." }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to dashboard" }
                    Link { class: "btn btn-ghost", to: Route::Billing {}, "View billing" }
                }
            }
        };
    }

    rsx! {
        section { class: "checkout",
            div { class: "checkout-summary",
                h1 { "Checkout" }
                article { class: "plan-card",
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
                }
                p { class: "auth-links",
                    Link { to: Route::Pricing {}, "Pick a different plan" }
                }
            }

            form {
                class: "checkout-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(());
                },

                if let Some(message) = alert_text {
                    ErrorAlert {
                        message: message,
                        on_dismiss: move |_| alert.set(None),
                    }
                }

                TextField {
                    label: "Card number",
                    name: "card_number",
                    input_type: "text",
                    value: card_number(),
                    placeholder: "4111 1111 1111 1111",
                    autocomplete: "cc-number",
                    error: number_error().unwrap_or_default(),
                    oninput: move |e: FormEvent| card_number.set(format_card_number(&e.value())),
                }
                if !brand_hint.is_empty() {
                    p { class: "card-brand", "{brand_hint}" }
                }
                TextField {
                    label: "Name on card",
                    name: "card_holder",
                    value: card_holder(),
                    autocomplete: "cc-name",
                    error: holder_error().unwrap_or_default(),
                    oninput: move |e: FormEvent| card_holder.set(e.value()),
                }
                div { class: "field-row",
                    TextField {
                        label: "Expiry",
                        name: "expiry",
                        value: expiry(),
                        placeholder: "MM/YY",
                        autocomplete: "cc-exp",
                        error: expiry_error().unwrap_or_default(),
                        oninput: move |e: FormEvent| expiry.set(e.value()),
                    }
                    TextField {
                        label: "CVV",
                        name: "cvv",
                        input_type: "password",
                        value: cvv(),
                        autocomplete: "cc-csc",
                        error: cvv_error().unwrap_or_default(),
                        oninput: move |e: FormEvent| cvv.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: busy(),
                    if busy() { "Processing..." } else { "Subscribe and pay" }
                }
                p { class: "text-muted checkout-note",
                    "Card details go straight to our payment processor over TLS and are never stored on this site."
                }
            }
        }
    }
}
