//! Storage backends the session can live in.
//!
//! Two browser-backed implementations (first-party cookies and
//! localStorage) plus an in-memory one used by native tests and as the
//! SSR placeholder. Cookie strings are built and parsed by pure helpers
//! so the string handling stays testable off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Key/value store with optional expiry. Implementations that have no
/// native expiry (localStorage, memory) ignore `ttl`; values that need
/// one carry their own timestamp.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>);
    fn remove(&self, key: &str);
}

// ---------------------------------------------------------------------------
// Cookie string handling (pure)
// ---------------------------------------------------------------------------

/// Finds `name` in a `document.cookie` string and returns its decoded
/// value.
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(raw) = part
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return urlencoding::decode(raw).ok().map(|v| v.into_owned());
        }
    }
    None
}

/// Serializes one `Set-Cookie`-style assignment for `document.cookie`.
/// Values are percent-encoded so JSON payloads survive the cookie grammar.
pub fn build_set_cookie(name: &str, value: &str, ttl: Option<Duration>, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        name,
        urlencoding::encode(value)
    );
    if let Some(ttl) = ttl {
        cookie.push_str(&format!("; Max-Age={}", ttl.as_secs()));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn build_clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
}

// ---------------------------------------------------------------------------
// Browser backends
// ---------------------------------------------------------------------------

/// First-party cookie storage via `document.cookie`.
#[cfg(target_arch = "wasm32")]
pub struct CookieBackend;

#[cfg(target_arch = "wasm32")]
impl CookieBackend {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn secure_context() -> bool {
        web_sys::window()
            .map(|w| w.location().protocol().ok() == Some("https:".to_string()))
            .unwrap_or(false)
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for CookieBackend {
    fn get(&self, key: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        parse_cookie_header(&header, key)
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&build_set_cookie(key, value, ttl, Self::secure_context()));
        }
    }

    fn remove(&self, key: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&build_clear_cookie(key));
        }
    }
}

/// localStorage-backed storage.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str, _ttl: Option<Duration>) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Map-backed store. Holds nothing across page loads; used by tests and
/// as the server-side placeholder where no browser storage exists.
#[derive(Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str, _ttl: Option<Duration>) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_parsing_finds_the_named_cookie() {
        let header = "theme=dark; pavit_token=tok_abc123; other=1";
        assert_eq!(
            parse_cookie_header(header, "pavit_token"),
            Some("tok_abc123".to_string())
        );
        assert_eq!(parse_cookie_header(header, "missing"), None);
    }

    #[test]
    fn cookie_names_do_not_prefix_match() {
        let header = "pavit_token_old=stale; pavit_token=fresh";
        assert_eq!(
            parse_cookie_header(header, "pavit_token"),
            Some("fresh".to_string())
        );
    }

    #[test]
    fn cookie_values_survive_json_payloads() {
        let value = r#"{"id":1,"name":"Asha Rao"}"#;
        let cookie = build_set_cookie("pavit_user", value, None, false);
        // The raw JSON must not leak cookie-breaking characters.
        assert!(!cookie.contains('{'));
        assert!(!cookie.contains(' ') || cookie.contains("; "));

        let assignment = cookie.split(';').next().unwrap();
        let parsed = parse_cookie_header(assignment, "pavit_user");
        assert_eq!(parsed.as_deref(), Some(value));
    }

    #[test]
    fn set_cookie_carries_ttl_and_flags() {
        let cookie = build_set_cookie(
            "pavit_token",
            "tok",
            Some(Duration::from_secs(3600)),
            true,
        );
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.ends_with("Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(build_clear_cookie("pavit_token").contains("Max-Age=0"));
    }

    #[test]
    fn memory_backend_round_trips() {
        let store = MemoryBackend::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v", None);
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
