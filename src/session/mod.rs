//! Browser session persistence.
//!
//! The signed-in session is a bearer token plus the user snapshot returned
//! at login. Where it lives depends on the visitor's cookie consent:
//! first-party cookies once consent is given, localStorage otherwise. The
//! [`backend::StorageBackend`] trait hides that choice from everything
//! above it; [`consent`] owns the choice and the migration when it flips.

use serde::{Deserialize, Serialize};

use crate::api::auth::User;

pub mod backend;
pub mod consent;

use backend::StorageBackend;

pub const TOKEN_KEY: &str = "pavit_token";
pub const USER_KEY: &str = "pavit_user";

/// How long a persisted session is honoured by the cookie backend.
pub const SESSION_TTL: std::time::Duration = std::time::Duration::from_secs(60 * 60 * 24 * 30);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Persists a session to the given store. Token and user live under
/// separate keys so the token never travels through serde.
pub fn save(store: &dyn StorageBackend, session: &Session) {
    store.set(TOKEN_KEY, &session.token, Some(SESSION_TTL));
    if let Ok(user_json) = serde_json::to_string(&session.user) {
        store.set(USER_KEY, &user_json, Some(SESSION_TTL));
    }
}

/// Loads a session, if the store holds a complete one. A token without a
/// readable user snapshot counts as absent; stale halves are cleared so
/// the next load starts clean.
pub fn load(store: &dyn StorageBackend) -> Option<Session> {
    let token = store.get(TOKEN_KEY)?;
    match store.get(USER_KEY).map(|raw| serde_json::from_str(&raw)) {
        Some(Ok(user)) => Some(Session { token, user }),
        _ => {
            clear(store);
            None
        }
    }
}

pub fn clear(store: &dyn StorageBackend) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Replaces just the user snapshot, keeping the token. Used after calls
/// that change account state (plan changes, refunds).
pub fn update_user(store: &dyn StorageBackend, user: &User) {
    if let Ok(user_json) = serde_json::to_string(user) {
        store.set(USER_KEY, &user_json, Some(SESSION_TTL));
    }
}
