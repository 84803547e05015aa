//! Cookie consent and the storage choice that hangs off it.
//!
//! Until the visitor accepts cookies, nothing may be written to
//! `document.cookie`, so the session falls back to localStorage. The
//! consent flag itself always lives in localStorage (remembering a
//! refusal is what makes the banner stay dismissed). When the choice
//! flips, any existing session moves to the newly selected store.

use super::backend::StorageBackend;
use super::{clear, load, save};

pub const CONSENT_KEY: &str = "pavit_cookie_consent";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Consent {
    /// Banner not answered yet.
    #[default]
    Unknown,
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Unknown => "unknown",
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Consent {
        match value {
            "accepted" => Consent::Accepted,
            "declined" => Consent::Declined,
            _ => Consent::Unknown,
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Consent::Unknown)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Cookie,
    LocalStorage,
}

/// Which store a consent level selects. Only an explicit accept unlocks
/// cookies.
pub fn selected_kind(consent: Consent) -> BackendKind {
    match consent {
        Consent::Accepted => BackendKind::Cookie,
        Consent::Unknown | Consent::Declined => BackendKind::LocalStorage,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn backend_for(kind: BackendKind) -> Box<dyn StorageBackend> {
    match kind {
        BackendKind::Cookie => Box::new(super::backend::CookieBackend),
        BackendKind::LocalStorage => Box::new(super::backend::LocalStorageBackend),
    }
}

/// Server-side placeholder. SSR always renders the signed-out shell; the
/// hydrated client re-reads the real store.
#[cfg(not(target_arch = "wasm32"))]
pub fn backend_for(_kind: BackendKind) -> Box<dyn StorageBackend> {
    Box::new(super::backend::MemoryBackend::new())
}

/// The store selected by the currently persisted consent.
pub fn active_backend() -> Box<dyn StorageBackend> {
    backend_for(selected_kind(stored_consent()))
}

#[cfg(target_arch = "wasm32")]
pub fn stored_consent() -> Consent {
    let flag = super::backend::LocalStorageBackend.get(CONSENT_KEY);
    flag.map(|v| Consent::parse(&v)).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn stored_consent() -> Consent {
    Consent::Unknown
}

/// Records the visitor's choice and moves the session into the store that
/// choice selects.
pub fn set_consent(new: Consent) {
    let old = stored_consent();
    persist_consent_flag(new);

    let old_kind = selected_kind(old);
    let new_kind = selected_kind(new);
    if old_kind != new_kind {
        migrate_session(&*backend_for(old_kind), &*backend_for(new_kind));
    }
}

#[cfg(target_arch = "wasm32")]
fn persist_consent_flag(consent: Consent) {
    use super::backend::LocalStorageBackend;
    if consent.is_answered() {
        LocalStorageBackend.set(CONSENT_KEY, consent.as_str(), None);
    } else {
        LocalStorageBackend.remove(CONSENT_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_consent_flag(_consent: Consent) {}

/// Moves a complete session from one store to the other, leaving the
/// source empty. No session, no writes.
pub fn migrate_session(from: &dyn StorageBackend, to: &dyn StorageBackend) {
    if let Some(session) = load(from) {
        save(to, &session);
        clear(from);
    }
}
