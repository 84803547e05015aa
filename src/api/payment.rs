//! Billing endpoints: plan catalogue, subscriptions, card payments,
//! payment history, refunds and plan reverts.
//!
//! Prices travel as decimal strings with a separate currency field and
//! are rendered verbatim; no float money anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transport::{platform_transport, ApiRequest, Transport};
use super::{api_base, parse_ack, parse_data, ApiError};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub currency: String,
    /// Billing interval, "month" or "year".
    pub interval: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSubscriptionRequest {
    pub plan_id: u64,
}

/// Card details exactly as the checkout form collects them. Client-side
/// validation (`crate::billing`) runs before this ever leaves the page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProcessPaymentRequest {
    pub subscription_id: u64,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: u64,
    pub amount: String,
    pub currency: String,
    /// "succeeded", "refunded" or "failed".
    pub status: String,
    #[serde(default)]
    pub card_brand: Option<String>,
    #[serde(default)]
    pub card_last_four: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub struct PaymentClient {
    base: String,
    transport: Box<dyn Transport>,
}

impl PaymentClient {
    pub fn new() -> Self {
        Self::with_transport(api_base(), platform_transport())
    }

    pub fn with_transport(base: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    /// Public plan catalogue, ordered by the backend.
    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::get(format!("{}/subscription-plans", self.base)))
            .await?;
        parse_data(&raw)
    }

    pub async fn plan_by_slug(&self, slug: &str) -> Result<Plan, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::get(format!(
                "{}/subscription-plans/{}",
                self.base,
                urlencoding::encode(slug)
            )))
            .await?;
        parse_data(&raw)
    }

    /// Creates a pending subscription on the chosen plan; payment follows
    /// as a second step.
    pub async fn create_subscription(
        &self,
        token: &str,
        req: &CreateSubscriptionRequest,
    ) -> Result<Subscription, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(format!("{}/subscriptions", self.base), req)?.bearer(token))
            .await?;
        parse_data(&raw)
    }

    pub async fn process_payment(
        &self,
        token: &str,
        req: &ProcessPaymentRequest,
    ) -> Result<Payment, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(format!("{}/payments/process", self.base), req)?.bearer(token))
            .await?;
        parse_data(&raw)
    }

    /// Payment history for the signed-in account, newest first.
    pub async fn payments(&self, token: &str) -> Result<Vec<Payment>, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::get(format!("{}/payments", self.base)).bearer(token))
            .await?;
        parse_data(&raw)
    }

    pub async fn payment(&self, token: &str, id: u64) -> Result<Payment, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::get(format!("{}/payments/{}", self.base, id)).bearer(token))
            .await?;
        parse_data(&raw)
    }

    pub async fn refund(&self, token: &str, id: u64) -> Result<Payment, ApiError> {
        let raw = self
            .transport
            .send(
                ApiRequest::post_empty(format!("{}/payments/refund/{}", self.base, id))
                    .bearer(token),
            )
            .await?;
        parse_data(&raw)
    }

    /// Drops back to the previous plan after a refund. Acknowledgement
    /// only; the caller refetches the user to see the new state.
    pub async fn revert_plan(&self, token: &str) -> Result<String, ApiError> {
        let raw = self
            .transport
            .send(
                ApiRequest::post_empty(format!("{}/payments/revert-plan", self.base))
                    .bearer(token),
            )
            .await?;
        parse_ack(&raw)
    }
}

impl Default for PaymentClient {
    fn default() -> Self {
        Self::new()
    }
}
