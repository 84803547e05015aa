//! Typed clients for the Pavit platform API.
//!
//! Every backend response arrives in a single envelope shape:
//! `{ status, message, data, code, timestamp }`, where error envelopes may
//! also carry a field-keyed `errors` map from validation. The clients here
//! decode that envelope once and hand the UI either typed data or an
//! [`ApiError`]; nothing above this layer touches raw JSON.
//!
//! Requests are never retried. A failed call surfaces to the page that
//! made it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub mod ai;
pub mod auth;
pub mod maps;
pub mod payment;
pub mod transport;

use transport::RawResponse;

/// Backend origin, baked in at compile time (see build.rs). The WASM
/// bundle has no environment to read at runtime, so both halves of the
/// app share this constant.
pub fn api_base() -> &'static str {
    env!("PAVIT_API_BASE")
}

/// `status` discriminant of the response envelope.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// The uniform response envelope the backend wraps every payload in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Mirrors the HTTP status of the response.
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Field name to validation messages, present on validation failures.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// What an API call can fail with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a well-formed error envelope.
    #[error("{message}")]
    Api {
        code: u16,
        message: String,
        errors: Option<BTreeMap<String, Vec<String>>>,
    },
    /// The request never produced a response (DNS, CORS, offline, SSR stub).
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx body that did not match the envelope contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend rejected our credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { code: 401, .. })
    }

    /// Field-keyed validation messages, when the failure carried them.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Api { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// First validation message for one form field, for inline display.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .and_then(|map| map.get(field))
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }
}

fn decode_envelope<T: DeserializeOwned>(raw: &RawResponse) -> Result<Envelope<T>, ApiError> {
    match serde_json::from_str::<Envelope<T>>(&raw.body) {
        Ok(envelope) => Ok(envelope),
        // A 2xx we cannot decode is a contract break; a non-2xx without an
        // envelope (proxy error page, empty body) still maps to Api so
        // callers can branch on the status code.
        Err(e) if raw.ok() => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Api {
            code: raw.status,
            message: format!("request failed with HTTP {}", raw.status),
            errors: None,
        }),
    }
}

fn envelope_error<T>(envelope: Envelope<T>, http_status: u16) -> ApiError {
    ApiError::Api {
        code: if envelope.code != 0 {
            envelope.code
        } else {
            http_status
        },
        message: if envelope.message.is_empty() {
            format!("request failed with HTTP {}", http_status)
        } else {
            envelope.message
        },
        errors: envelope.errors,
    }
}

/// Decode a response whose success envelope must carry `data`.
pub(crate) fn parse_data<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ApiError> {
    let envelope = decode_envelope::<T>(raw)?;
    match envelope.status {
        EnvelopeStatus::Success => envelope
            .data
            .ok_or_else(|| ApiError::Decode("success envelope without data".into())),
        EnvelopeStatus::Error => Err(envelope_error(envelope, raw.status)),
    }
}

/// Decode a response where only the acknowledgement matters (logout,
/// password reset). Returns the envelope message for display.
pub(crate) fn parse_ack(raw: &RawResponse) -> Result<String, ApiError> {
    let envelope = decode_envelope::<serde_json::Value>(raw)?;
    match envelope.status {
        EnvelopeStatus::Success => Ok(envelope.message),
        EnvelopeStatus::Error => Err(envelope_error(envelope, raw.status)),
    }
}
