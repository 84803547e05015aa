//! Map embed endpoint with a seven-day client-side cache.
//!
//! `/maps/pin` renders an embeddable HTML snippet for a device location.
//! Embeds are immutable for a given pin, so they are cached in whichever
//! storage the visitor's cookie consent selected. Cache entries carry
//! their own `cached_at` stamp because localStorage has no expiry of its
//! own.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::session::backend::StorageBackend;

use super::transport::{platform_transport, ApiRequest, Transport};
use super::{api_base, parse_data, ApiError};

pub const CACHE_TTL_DAYS: i64 = 7;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PinRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PinEmbed {
    pub html: String,
}

#[derive(Serialize, Deserialize)]
struct CachedEmbed {
    html: String,
    cached_at: DateTime<Utc>,
}

/// Storage key for one pin request. Hashed so coordinates and free-text
/// labels never appear in a cookie name.
pub fn cache_key(req: &PinRequest) -> String {
    let canonical = format!(
        "{:.6}|{:.6}|{}|{}",
        req.latitude,
        req.longitude,
        req.zoom,
        req.label.as_deref().unwrap_or("")
    );
    let digest = Sha256::digest(canonical.as_bytes());
    format!("pavit_map_{}", &hex::encode(digest)[..16])
}

fn load_fresh(store: &dyn StorageBackend, key: &str, now: DateTime<Utc>) -> Option<String> {
    let cached: CachedEmbed = serde_json::from_str(&store.get(key)?).ok()?;
    if now - cached.cached_at < Duration::days(CACHE_TTL_DAYS) {
        Some(cached.html)
    } else {
        store.remove(key);
        None
    }
}

fn store_embed(store: &dyn StorageBackend, key: &str, html: &str, now: DateTime<Utc>) {
    let entry = CachedEmbed {
        html: html.to_string(),
        cached_at: now,
    };
    if let Ok(json) = serde_json::to_string(&entry) {
        let ttl = std::time::Duration::from_secs(60 * 60 * 24 * CACHE_TTL_DAYS as u64);
        store.set(key, &json, Some(ttl));
    }
}

pub struct MapsClient {
    base: String,
    transport: Box<dyn Transport>,
}

impl MapsClient {
    pub fn new() -> Self {
        Self::with_transport(api_base(), platform_transport())
    }

    pub fn with_transport(base: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    /// Fetches the embed without consulting the cache.
    pub async fn pin(&self, req: &PinRequest) -> Result<String, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(format!("{}/maps/pin", self.base), req)?)
            .await?;
        let embed: PinEmbed = parse_data(&raw)?;
        Ok(embed.html)
    }

    /// Cache-through fetch: returns the stored embed while it is fresh,
    /// otherwise hits the backend and stores the result.
    pub async fn pin_cached(
        &self,
        store: &dyn StorageBackend,
        req: &PinRequest,
    ) -> Result<String, ApiError> {
        self.pin_cached_at(store, req, Utc::now()).await
    }

    pub async fn pin_cached_at(
        &self,
        store: &dyn StorageBackend,
        req: &PinRequest,
        now: DateTime<Utc>,
    ) -> Result<String, ApiError> {
        let key = cache_key(req);
        if let Some(html) = load_fresh(store, &key, now) {
            return Ok(html);
        }
        let html = self.pin(req).await?;
        store_embed(store, &key, &html, now);
        Ok(html)
    }
}

impl Default for MapsClient {
    fn default() -> Self {
        Self::new()
    }
}
