//! Mock platform API for client integration testing
//!
//! Serves the same routes as the hosted backend with every response
//! wrapped in the standard envelope (`status`, `message`, `data`, `code`,
//! `timestamp`, plus `errors` on validation failures). Backed by an
//! in-memory account/plan/payment store so tests can drive the full
//! register -> subscribe -> pay -> refund journey without the network.

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

type SharedState = Arc<RwLock<MockBackendState>>;

/// Card number that always fails at the processor.
pub const DECLINED_CARD: &str = "4000000000000002";

/// Deterministic assistant reply, so tests can assert on it.
pub const ASSISTANT_REPLY: &str =
    "Pavit IoT can stream telemetry from your first device within five minutes of onboarding.";

#[derive(Debug, Clone)]
struct MockUser {
    id: u64,
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
struct MockPlan {
    id: u64,
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: &'static str,
    features: Vec<&'static str>,
    highlighted: bool,
}

#[derive(Debug, Clone)]
struct MockSubscription {
    id: u64,
    user_id: u64,
    plan_id: u64,
    status: String,
    started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct MockPayment {
    id: u64,
    user_id: u64,
    amount: String,
    currency: String,
    status: String,
    card_brand: String,
    card_last_four: String,
    subscription_id: u64,
    created_at: DateTime<Utc>,
}

#[derive(Debug)]
struct MockBackendState {
    users: Vec<MockUser>,
    tokens: HashMap<String, u64>,
    plans: Vec<MockPlan>,
    subscriptions: Vec<MockSubscription>,
    payments: Vec<MockPayment>,
    next_user_id: u64,
    next_subscription_id: u64,
    next_payment_id: u64,
    token_seq: u64,
    pin_requests: usize,
    last_prompt: Option<String>,
}

impl MockBackendState {
    /// One seeded account and the three public plans.
    fn seeded() -> Self {
        Self {
            users: vec![MockUser {
                id: 1,
                name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                password: "correct-horse-battery".to_string(),
            }],
            tokens: HashMap::new(),
            plans: vec![
                MockPlan {
                    id: 1,
                    name: "Starter",
                    slug: "starter",
                    description: "For the first few devices",
                    price: "19.00",
                    features: vec!["Up to 10 devices", "24h telemetry retention"],
                    highlighted: false,
                },
                MockPlan {
                    id: 2,
                    name: "Growth",
                    slug: "growth",
                    description: "For scaling fleets",
                    price: "49.00",
                    features: vec!["Up to 100 devices", "30d retention", "Alert rules"],
                    highlighted: true,
                },
                MockPlan {
                    id: 3,
                    name: "Scale",
                    slug: "scale",
                    description: "For serious deployments",
                    price: "99.00",
                    features: vec!["Unlimited devices", "1y retention", "Priority support"],
                    highlighted: false,
                },
            ],
            subscriptions: Vec::new(),
            payments: Vec::new(),
            next_user_id: 2,
            next_subscription_id: 1,
            next_payment_id: 1,
            token_seq: 1,
            pin_requests: 0,
            last_prompt: None,
        }
    }

    fn mint_token(&mut self, user_id: u64) -> String {
        let token = format!("mock-token-{}", self.token_seq);
        self.token_seq += 1;
        self.tokens.insert(token.clone(), user_id);
        token
    }

    fn user_for(&self, headers: &HeaderMap) -> Option<&MockUser> {
        let user_id = *self.tokens.get(&bearer(headers)?)?;
        self.users.iter().find(|u| u.id == user_id)
    }
}

/// A running mock of the platform API, bound to an ephemeral local port.
pub struct MockBackend {
    addr: SocketAddr,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state: SharedState = Arc::new(RwLock::new(MockBackendState::seeded()));

        let app = Router::new()
            .route("/auth/login", post(login_handler))
            .route("/auth/register", post(register_handler))
            .route("/auth/password/forgot", post(forgot_handler))
            .route("/auth/logout", post(logout_handler))
            .route("/subscription-plans", get(plans_handler))
            .route("/subscription-plans/{slug}", get(plan_handler))
            .route("/subscriptions", post(create_subscription_handler))
            .route("/payments/process", post(process_payment_handler))
            .route("/payments", get(payments_handler))
            .route("/payments/{id}", get(payment_handler))
            .route("/payments/refund/{id}", post(refund_handler))
            .route("/payments/revert-plan", post(revert_plan_handler))
            .route("/ai/generate", post(ai_handler))
            .route("/maps/pin", post(pin_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL in the form the clients expect (no trailing slash).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn add_user(&self, name: &str, email: &str, password: &str) -> u64 {
        let mut state = self.state.write().await;
        let id = state.next_user_id;
        state.next_user_id += 1;
        state.users.push(MockUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        id
    }

    /// Whether a bearer token is still accepted.
    pub async fn token_is_live(&self, token: &str) -> bool {
        self.state.read().await.tokens.contains_key(token)
    }

    /// How many times `/maps/pin` was actually hit, for cache tests.
    pub async fn pin_requests(&self) -> usize {
        self.state.read().await.pin_requests
    }

    /// Last prompt string received by `/ai/generate`.
    pub async fn last_prompt(&self) -> Option<String> {
        self.state.read().await.last_prompt.clone()
    }

    pub async fn stop(self) {
        self.handle.abort();
    }
}

// ---- envelope helpers ----

fn success(code: u16, message: &str, data: Value) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::OK),
        Json(json!({
            "status": "success",
            "message": message,
            "data": data,
            "code": code,
            "timestamp": Utc::now(),
        })),
    )
}

fn error(code: u16, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({
            "status": "error",
            "message": message,
            "data": null,
            "code": code,
            "timestamp": Utc::now(),
        })),
    )
}

fn invalid(errors: BTreeMap<&'static str, Vec<&'static str>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "status": "error",
            "message": "The given data was invalid.",
            "data": null,
            "code": 422,
            "timestamp": Utc::now(),
            "errors": errors,
        })),
    )
}

fn unauthenticated() -> (StatusCode, Json<Value>) {
    error(401, "Unauthenticated.")
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn field(body: &Value, name: &str) -> String {
    body.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

// ---- payload shapes ----

fn plan_json(plan: &MockPlan) -> Value {
    json!({
        "id": plan.id,
        "name": plan.name,
        "slug": plan.slug,
        "description": plan.description,
        "price": plan.price,
        "currency": "USD",
        "interval": "month",
        "features": plan.features,
        "highlighted": plan.highlighted,
    })
}

fn subscription_json(state: &MockBackendState, sub: &MockSubscription) -> Value {
    let plan = state
        .plans
        .iter()
        .find(|p| p.id == sub.plan_id)
        .map(plan_json);
    json!({
        "id": sub.id,
        "status": sub.status,
        "plan": plan,
        "started_at": sub.started_at,
        "ends_at": null,
    })
}

fn user_json(state: &MockBackendState, user: &MockUser) -> Value {
    let subscription = state
        .subscriptions
        .iter()
        .rev()
        .find(|s| s.user_id == user.id && s.status != "cancelled")
        .map(|s| subscription_json(state, s));
    json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "subscription": subscription,
    })
}

fn payment_json(payment: &MockPayment) -> Value {
    json!({
        "id": payment.id,
        "amount": payment.amount,
        "currency": payment.currency,
        "status": payment.status,
        "card_brand": payment.card_brand,
        "card_last_four": payment.card_last_four,
        "subscription_id": payment.subscription_id,
        "created_at": payment.created_at,
    })
}

// ---- handlers ----

async fn login_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let email = field(&body, "email");
    let password = field(&body, "password");

    let mut errors = BTreeMap::new();
    if email.is_empty() {
        errors.insert("email", vec!["The email field is required."]);
    }
    if password.is_empty() {
        errors.insert("password", vec!["The password field is required."]);
    }
    if !errors.is_empty() {
        return invalid(errors);
    }

    let mut state = state.write().await;
    let user = match state
        .users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .cloned()
    {
        Some(user) => user,
        None => return error(401, "Invalid credentials."),
    };

    let token = state.mint_token(user.id);
    let user = user_json(&state, &user);
    success(200, "Logged in.", json!({ "token": token, "user": user }))
}

async fn register_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let name = field(&body, "name");
    let email = field(&body, "email");
    let password = field(&body, "password");
    let confirmation = field(&body, "password_confirmation");

    let mut state = state.write().await;

    let mut errors = BTreeMap::new();
    if name.is_empty() {
        errors.insert("name", vec!["The name field is required."]);
    }
    if email.is_empty() {
        errors.insert("email", vec!["The email field is required."]);
    } else if state.users.iter().any(|u| u.email == email) {
        errors.insert("email", vec!["The email has already been taken."]);
    }
    if password.is_empty() {
        errors.insert("password", vec!["The password field is required."]);
    } else if password.len() < 8 {
        errors.insert("password", vec!["The password must be at least 8 characters."]);
    }
    if password != confirmation {
        errors.insert(
            "password_confirmation",
            vec!["The password confirmation does not match."],
        );
    }
    if !errors.is_empty() {
        return invalid(errors);
    }

    let id = state.next_user_id;
    state.next_user_id += 1;
    let user = MockUser {
        id,
        name,
        email,
        password,
    };
    state.users.push(user.clone());

    let token = state.mint_token(id);
    let user = user_json(&state, &user);
    success(201, "Account created.", json!({ "token": token, "user": user }))
}

/// Identical acknowledgement whether or not the address exists.
async fn forgot_handler(
    State(_state): State<SharedState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if field(&body, "email").is_empty() {
        let mut errors = BTreeMap::new();
        errors.insert("email", vec!["The email field is required."]);
        return invalid(errors);
    }
    success(
        200,
        "If that address exists, a reset link is on its way.",
        Value::Null,
    )
}

async fn logout_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let token = match bearer(&headers) {
        Some(token) => token,
        None => return unauthenticated(),
    };
    let mut state = state.write().await;
    if state.tokens.remove(&token).is_none() {
        return unauthenticated();
    }
    success(200, "Logged out.", Value::Null)
}

async fn plans_handler(State(state): State<SharedState>) -> (StatusCode, Json<Value>) {
    let state = state.read().await;
    let plans: Vec<Value> = state.plans.iter().map(plan_json).collect();
    success(200, "OK", json!(plans))
}

async fn plan_handler(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> (StatusCode, Json<Value>) {
    let state = state.read().await;
    match state.plans.iter().find(|p| p.slug == slug) {
        Some(plan) => success(200, "OK", plan_json(plan)),
        None => error(404, "Plan not found."),
    }
}

async fn create_subscription_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.write().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };

    let plan_id = body.get("plan_id").and_then(Value::as_u64).unwrap_or(0);
    if !state.plans.iter().any(|p| p.id == plan_id) {
        let mut errors = BTreeMap::new();
        errors.insert("plan_id", vec!["The selected plan is invalid."]);
        return invalid(errors);
    }

    let id = state.next_subscription_id;
    state.next_subscription_id += 1;
    let sub = MockSubscription {
        id,
        user_id,
        plan_id,
        status: "pending".to_string(),
        started_at: None,
    };
    state.subscriptions.push(sub.clone());
    let sub = subscription_json(&state, &sub);
    success(201, "Subscription created.", sub)
}

async fn process_payment_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.write().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };

    let subscription_id = body
        .get("subscription_id")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let card_number = field(&body, "card_number");

    let plan_id = match state
        .subscriptions
        .iter()
        .find(|s| s.id == subscription_id && s.user_id == user_id)
    {
        Some(sub) => sub.plan_id,
        None => return error(404, "Subscription not found."),
    };

    if card_number == DECLINED_CARD {
        return error(402, "Your card was declined.");
    }

    let (amount, currency) = state
        .plans
        .iter()
        .find(|p| p.id == plan_id)
        .map(|p| (p.price.to_string(), "USD".to_string()))
        .unwrap_or_else(|| ("0.00".to_string(), "USD".to_string()));

    let brand = match card_number.chars().next() {
        Some('4') => "Visa",
        Some('5') => "Mastercard",
        Some('3') => "American Express",
        Some('6') => "Discover",
        _ => "Card",
    };
    let last_four = card_number
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<String>();

    let id = state.next_payment_id;
    state.next_payment_id += 1;
    let payment = MockPayment {
        id,
        user_id,
        amount,
        currency,
        status: "succeeded".to_string(),
        card_brand: brand.to_string(),
        card_last_four: last_four,
        subscription_id,
        created_at: Utc::now(),
    };
    state.payments.push(payment.clone());

    if let Some(sub) = state
        .subscriptions
        .iter_mut()
        .find(|s| s.id == subscription_id)
    {
        sub.status = "active".to_string();
        sub.started_at = Some(Utc::now());
    }

    success(200, "Payment processed.", payment_json(&payment))
}

/// GET /payments - History for the signed-in account, newest first.
async fn payments_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let state = state.read().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };
    let payments: Vec<Value> = state
        .payments
        .iter()
        .rev()
        .filter(|p| p.user_id == user_id)
        .map(payment_json)
        .collect();
    success(200, "OK", json!(payments))
}

async fn payment_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    let state = state.read().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };
    match state
        .payments
        .iter()
        .find(|p| p.id == id && p.user_id == user_id)
    {
        Some(payment) => success(200, "OK", payment_json(payment)),
        None => error(404, "Payment not found."),
    }
}

async fn refund_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.write().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };
    let payment = match state
        .payments
        .iter_mut()
        .find(|p| p.id == id && p.user_id == user_id)
    {
        Some(payment) => payment,
        None => return error(404, "Payment not found."),
    };
    if payment.status != "succeeded" {
        return error(422, "Only a successful payment can be refunded.");
    }
    payment.status = "refunded".to_string();
    let payment = payment.clone();
    success(200, "Payment refunded.", payment_json(&payment))
}

async fn revert_plan_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let mut state = state.write().await;
    let user_id = match state.user_for(&headers) {
        Some(user) => user.id,
        None => return unauthenticated(),
    };
    if let Some(sub) = state
        .subscriptions
        .iter_mut()
        .rev()
        .find(|s| s.user_id == user_id && s.status != "cancelled")
    {
        sub.status = "cancelled".to_string();
    }
    success(200, "Your plan change was reverted.", Value::Null)
}

async fn ai_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let prompt = field(&body, "prompt");
    if prompt.is_empty() {
        let mut errors = BTreeMap::new();
        errors.insert("prompt", vec!["The prompt field is required."]);
        return invalid(errors);
    }
    state.write().await.last_prompt = Some(prompt);
    success(200, "OK", json!({ "response": ASSISTANT_REPLY }))
}

async fn pin_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let latitude = body.get("latitude").and_then(Value::as_f64).unwrap_or(0.0);
    let longitude = body.get("longitude").and_then(Value::as_f64).unwrap_or(0.0);
    let zoom = body.get("zoom").and_then(Value::as_u64).unwrap_or(12);

    state.write().await.pin_requests += 1;

    let html = format!(
        "<iframe src=\"https://maps.pavitinfotech.com/embed?lat={latitude}&lng={longitude}&z={zoom}\" loading=\"lazy\"></iframe>"
    );
    success(200, "OK", json!({ "html": html }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_the_plan_catalogue() {
        let backend = MockBackend::start().await;

        let body: Value = reqwest::get(format!("{}/subscription-plans", backend.base_url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "success");
        assert_eq!(body["code"], 200);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][1]["slug"], "growth");
        assert_eq!(body["data"][1]["highlighted"], true);

        backend.stop().await;
    }

    #[tokio::test]
    async fn rejects_bad_credentials_with_an_error_envelope() {
        let backend = MockBackend::start().await;

        let resp = reqwest::Client::new()
            .post(format!("{}/auth/login", backend.base_url()))
            .json(&json!({ "email": "asha@example.com", "password": "wrong" }))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 401);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], 401);
        assert_eq!(body["message"], "Invalid credentials.");

        backend.stop().await;
    }

    #[tokio::test]
    async fn seeded_and_added_users_can_log_in() {
        let backend = MockBackend::start().await;
        backend.add_user("Dev Mehta", "dev@example.com", "another-passphrase").await;

        let client = reqwest::Client::new();
        for (email, password) in [
            ("asha@example.com", "correct-horse-battery"),
            ("dev@example.com", "another-passphrase"),
        ] {
            let body: Value = client
                .post(format!("{}/auth/login", backend.base_url()))
                .json(&json!({ "email": email, "password": password }))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            assert_eq!(body["status"], "success", "login failed for {email}");
            let token = body["data"]["token"].as_str().unwrap();
            assert!(backend.token_is_live(token).await);
        }

        backend.stop().await;
    }
}
