//! API Checker CLI
//!
//! Validates JSON payloads against the platform API envelope contract.
//! Can be used to validate recorded responses or test fixtures.
//!
//! Usage:
//!   api-checker validate <type> <json-file>
//!   api-checker validate <type> --stdin
//!   api-checker list-types
//!   api-checker generate-example <type>
//!
//! Types: envelope, ack-response, auth-response, plan-response,
//!        plans-response, subscription-response, payment-response,
//!        payments-response, ai-response, pin-response, plus the bare
//!        `user`/`plan`/`payment` objects and the request bodies

// Dev tool - allow unwrap for CLI simplicity
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
// Schema structs are used for JSON validation via Deserialize, fields read by serde
#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

// Schema types (mirrored from the main codebase for standalone validation)

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EnvelopeStatus {
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: EnvelopeStatus,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    code: u16,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: u64,
    name: String,
    email: String,
    #[serde(default)]
    subscription: Option<Subscription>,
}

#[derive(Debug, Deserialize)]
struct AuthPayload {
    token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct Plan {
    id: u64,
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    price: String,
    currency: String,
    interval: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    highlighted: bool,
}

#[derive(Debug, Deserialize)]
struct Subscription {
    id: u64,
    status: String,
    #[serde(default)]
    plan: Option<Plan>,
    #[serde(default)]
    started_at: Option<String>,
    #[serde(default)]
    ends_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Payment {
    id: u64,
    amount: String,
    currency: String,
    status: String,
    #[serde(default)]
    card_brand: Option<String>,
    #[serde(default)]
    card_last_four: Option<String>,
    #[serde(default)]
    subscription_id: Option<u64>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct PinEmbed {
    html: String,
}

// Request bodies

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
}

#[derive(Debug, Deserialize)]
struct ForgotPasswordRequest {
    email: String,
}

#[derive(Debug, Deserialize)]
struct CreateSubscriptionRequest {
    plan_id: u64,
}

#[derive(Debug, Deserialize)]
struct ProcessPaymentRequest {
    subscription_id: u64,
    card_number: String,
    card_holder: String,
    expiry_month: String,
    expiry_year: String,
    cvv: String,
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct PinRequest {
    latitude: f64,
    longitude: f64,
    zoom: u8,
    #[serde(default)]
    label: Option<String>,
}

const SUPPORTED_TYPES: &[&str] = &[
    // Response envelopes
    "envelope",
    "ack-response",
    "auth-response",
    "plan-response",
    "plans-response",
    "subscription-response",
    "payment-response",
    "payments-response",
    "ai-response",
    "pin-response",
    // Bare payload objects
    "user",
    "plan",
    "payment",
    // Request bodies
    "login-request",
    "register-request",
    "forgot-request",
    "subscription-request",
    "payment-request",
    "ai-request",
    "pin-request",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "validate" => {
            if args.len() < 3 {
                eprintln!("Error: Missing type argument");
                print_usage();
                process::exit(1);
            }
            let schema_type = &args[2];
            let json = if args.len() >= 4 {
                if args[3] == "--stdin" {
                    read_stdin()
                } else {
                    read_file(&args[3])
                }
            } else {
                read_stdin()
            };
            validate(schema_type, &json);
        }
        "list-types" => {
            println!("Supported schema types:");
            for t in SUPPORTED_TYPES {
                println!("  {}", t);
            }
        }
        "generate-example" => {
            if args.len() < 3 {
                eprintln!("Error: Missing type argument");
                print_usage();
                process::exit(1);
            }
            generate_example(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("API Checker - Validate platform API payloads against the envelope contract");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  api-checker validate <type> <json-file>");
    eprintln!("  api-checker validate <type> --stdin");
    eprintln!("  api-checker list-types");
    eprintln!("  api-checker generate-example <type>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  api-checker validate auth-response login.json");
    eprintln!("  curl -s $API/subscription-plans | api-checker validate plans-response --stdin");
    eprintln!("  api-checker generate-example payment-response");
}

fn read_stdin() -> String {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");
    input
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    })
}

/// A bare object, no envelope around it.
fn plain<T: DeserializeOwned>(value: Value) -> Result<(), String> {
    serde_json::from_value::<T>(value)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// An envelope whose `data` must decode as `T` when the status is
/// success. Error envelopes pass as long as the envelope itself decodes.
fn enveloped<T: DeserializeOwned>(value: Value) -> Result<(), String> {
    let envelope: Envelope = serde_json::from_value(value).map_err(|e| e.to_string())?;
    match envelope.status {
        EnvelopeStatus::Success => {
            let data = envelope
                .data
                .ok_or_else(|| "success envelope without data".to_string())?;
            serde_json::from_value::<T>(data)
                .map(|_| ())
                .map_err(|e| format!("data payload: {}", e))
        }
        EnvelopeStatus::Error => Ok(()),
    }
}

/// Acknowledgement envelope: data is ignored but a success must carry a
/// message, since that message is what the UI shows.
fn ack(value: Value) -> Result<(), String> {
    let envelope: Envelope = serde_json::from_value(value).map_err(|e| e.to_string())?;
    if matches!(envelope.status, EnvelopeStatus::Success) && envelope.message.is_empty() {
        return Err("success acknowledgement without a message".to_string());
    }
    Ok(())
}

fn validate(schema_type: &str, json: &str) {
    // First, parse as generic JSON to catch syntax errors
    let value: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("INVALID: JSON parse error: {}", e);
            process::exit(1);
        }
    };

    let result = match schema_type {
        // Response envelopes
        "envelope" => plain::<Envelope>(value),
        "ack-response" => ack(value),
        "auth-response" => enveloped::<AuthPayload>(value),
        "plan-response" => enveloped::<Plan>(value),
        "plans-response" => enveloped::<Vec<Plan>>(value),
        "subscription-response" => enveloped::<Subscription>(value),
        "payment-response" => enveloped::<Payment>(value),
        "payments-response" => enveloped::<Vec<Payment>>(value),
        "ai-response" => enveloped::<GenerateResponse>(value),
        "pin-response" => enveloped::<PinEmbed>(value),
        // Bare payload objects
        "user" => plain::<User>(value),
        "plan" => plain::<Plan>(value),
        "payment" => plain::<Payment>(value),
        // Request bodies
        "login-request" => plain::<LoginRequest>(value),
        "register-request" => plain::<RegisterRequest>(value),
        "forgot-request" => plain::<ForgotPasswordRequest>(value),
        "subscription-request" => plain::<CreateSubscriptionRequest>(value),
        "payment-request" => plain::<ProcessPaymentRequest>(value),
        "ai-request" => plain::<GenerateRequest>(value),
        "pin-request" => plain::<PinRequest>(value),
        _ => {
            eprintln!("Unknown schema type: {}", schema_type);
            eprintln!("Run 'api-checker list-types' to see supported types");
            process::exit(1);
        }
    };

    match result {
        Ok(()) => {
            println!("VALID: JSON conforms to '{}' schema", schema_type);
        }
        Err(e) => {
            eprintln!(
                "INVALID: Schema validation failed for '{}': {}",
                schema_type, e
            );
            process::exit(1);
        }
    }
}

fn generate_example(schema_type: &str) {
    let example: Value = match schema_type {
        "envelope" => {
            // Show both envelope shapes
            println!("// Success envelope:");
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "status": "success",
                    "message": "OK",
                    "data": { "anything": "payload-shaped" },
                    "code": 200,
                    "timestamp": "2025-06-01T12:00:00Z"
                }))
                .unwrap()
            );
            println!();
            println!("// Error envelope with field validation messages:");
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "status": "error",
                    "message": "The given data was invalid.",
                    "data": null,
                    "code": 422,
                    "timestamp": "2025-06-01T12:00:00Z",
                    "errors": {
                        "email": ["The email field is required."],
                        "password": ["The password must be at least 8 characters."]
                    }
                }))
                .unwrap()
            );
            return;
        }
        "ack-response" => serde_json::json!({
            "status": "success",
            "message": "Logged out.",
            "data": null,
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "auth-response" => serde_json::json!({
            "status": "success",
            "message": "Login successful.",
            "data": {
                "token": "1|9f8b7c6d5e4a3210fedcba9876543210",
                "user": {
                    "id": 42,
                    "name": "Asha Rao",
                    "email": "asha@example.com",
                    "subscription": null
                }
            },
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "plan-response" => serde_json::json!({
            "status": "success",
            "message": "OK",
            "data": {
                "id": 3,
                "name": "Growth",
                "slug": "growth",
                "description": "For scaling fleets",
                "price": "49.00",
                "currency": "USD",
                "interval": "month",
                "features": ["Up to 100 devices", "Alert rules", "Report exports"],
                "highlighted": true
            },
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "plans-response" => serde_json::json!({
            "status": "success",
            "message": "OK",
            "data": [
                {
                    "id": 1,
                    "name": "Starter",
                    "slug": "starter",
                    "description": "First fleet on the platform",
                    "price": "19.00",
                    "currency": "USD",
                    "interval": "month",
                    "features": ["Up to 10 devices"],
                    "highlighted": false
                },
                {
                    "id": 3,
                    "name": "Growth",
                    "slug": "growth",
                    "description": "For scaling fleets",
                    "price": "49.00",
                    "currency": "USD",
                    "interval": "month",
                    "features": ["Up to 100 devices", "Alert rules"],
                    "highlighted": true
                }
            ],
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "subscription-response" => serde_json::json!({
            "status": "success",
            "message": "Subscription created.",
            "data": {
                "id": 11,
                "status": "pending",
                "plan": {
                    "id": 3,
                    "name": "Growth",
                    "slug": "growth",
                    "description": "For scaling fleets",
                    "price": "49.00",
                    "currency": "USD",
                    "interval": "month",
                    "features": []
                },
                "started_at": null,
                "ends_at": null
            },
            "code": 201,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "payment-response" => serde_json::json!({
            "status": "success",
            "message": "Payment processed.",
            "data": {
                "id": 9001,
                "amount": "49.00",
                "currency": "USD",
                "status": "succeeded",
                "card_brand": "Visa",
                "card_last_four": "4242",
                "subscription_id": 11,
                "created_at": "2025-06-01T12:00:00Z"
            },
            "code": 200,
            "timestamp": "2025-06-01T12:00:01Z"
        }),
        "payments-response" => serde_json::json!({
            "status": "success",
            "message": "OK",
            "data": [
                {
                    "id": 9001,
                    "amount": "49.00",
                    "currency": "USD",
                    "status": "succeeded",
                    "card_brand": "Visa",
                    "card_last_four": "4242",
                    "subscription_id": 11,
                    "created_at": "2025-06-01T12:00:00Z"
                },
                {
                    "id": 8990,
                    "amount": "19.00",
                    "currency": "USD",
                    "status": "refunded",
                    "card_brand": "Mastercard",
                    "card_last_four": "4444",
                    "subscription_id": 10,
                    "created_at": "2025-05-01T09:30:00Z"
                }
            ],
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "ai-response" => serde_json::json!({
            "status": "success",
            "message": "OK",
            "data": {
                "response": "Pavit IoT ingests telemetry over MQTT and HTTPS. Devices appear on the dashboard within seconds of their first heartbeat."
            },
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "pin-response" => serde_json::json!({
            "status": "success",
            "message": "OK",
            "data": {
                "html": "<iframe src=\"https://maps.example.com/embed?pin=abc123\" loading=\"lazy\"></iframe>"
            },
            "code": 200,
            "timestamp": "2025-06-01T12:00:00Z"
        }),
        "user" => serde_json::json!({
            "id": 42,
            "name": "Asha Rao",
            "email": "asha@example.com",
            "subscription": {
                "id": 11,
                "status": "active",
                "plan": {
                    "id": 3,
                    "name": "Growth",
                    "slug": "growth",
                    "description": "For scaling fleets",
                    "price": "49.00",
                    "currency": "USD",
                    "interval": "month",
                    "features": []
                },
                "started_at": "2025-06-01T12:00:00Z",
                "ends_at": null
            }
        }),
        "plan" => serde_json::json!({
            "id": 3,
            "name": "Growth",
            "slug": "growth",
            "description": "For scaling fleets",
            "price": "49.00",
            "currency": "USD",
            "interval": "month",
            "features": ["Up to 100 devices"],
            "highlighted": true
        }),
        "payment" => serde_json::json!({
            "id": 9001,
            "amount": "49.00",
            "currency": "USD",
            "status": "succeeded",
            "card_brand": "Visa",
            "card_last_four": "4242",
            "subscription_id": 11,
            "created_at": "2025-06-01T12:00:00Z"
        }),
        "login-request" => serde_json::json!({
            "email": "asha@example.com",
            "password": "hunter2hunter2"
        }),
        "register-request" => serde_json::json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "password": "hunter2hunter2",
            "password_confirmation": "hunter2hunter2"
        }),
        "forgot-request" => serde_json::json!({
            "email": "asha@example.com"
        }),
        "subscription-request" => serde_json::json!({
            "plan_id": 3
        }),
        "payment-request" => serde_json::json!({
            "subscription_id": 11,
            "card_number": "4242424242424242",
            "card_holder": "Asha Rao",
            "expiry_month": "09",
            "expiry_year": "2027",
            "cvv": "123"
        }),
        "ai-request" => serde_json::json!({
            "prompt": "You are the Pavit IoT assistant...\n\nUser: How do I connect a device?\nAssistant:"
        }),
        "pin-request" => serde_json::json!({
            "latitude": 18.5204,
            "longitude": 73.8567,
            "zoom": 14,
            "label": "Pavit Infotech, Pune"
        }),
        _ => {
            eprintln!("Unknown schema type: {}", schema_type);
            eprintln!("Run 'api-checker list-types' to see supported types");
            process::exit(1);
        }
    };

    println!("{}", serde_json::to_string_pretty(&example).unwrap());
}
