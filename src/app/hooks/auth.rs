//! Signed-in session state, shared through context.
//!
//! The provider restores the persisted session once on the client; SSR
//! always renders signed-out and hydration catches up. `RequireAuth`
//! wraps the dashboard routes and bounces visitors without a session to
//! the login page.

use dioxus::prelude::*;

use crate::api::auth::{AuthClient, User};
use crate::app::Route;
use crate::session::{self, consent, Session};

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<Option<Session>>,
    /// True once the client has checked persistent storage. Guards must
    /// not redirect before this flips or a page refresh would bounce
    /// signed-in users.
    loaded: Signal<bool>,
}

impl AuthContext {
    pub fn session(&self) -> Option<Session> {
        (self.session)()
    }

    pub fn user(&self) -> Option<User> {
        (self.session)().map(|s| s.user)
    }

    pub fn token(&self) -> Option<String> {
        (self.session)().map(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        (self.session)().is_some()
    }

    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    /// Persists a fresh sign-in and publishes it to the app.
    pub fn sign_in(&self, new_session: Session) {
        session::save(&*consent::active_backend(), &new_session);
        let mut s = self.session;
        s.set(Some(new_session));
    }

    /// Clears local state immediately and revokes the token in the
    /// background. Signing out never fails from the user's side.
    pub fn sign_out(&self) {
        let token = self.token();
        // Both stores, not just the active one; a copy left in the
        // inactive store must not outlive the sign-out.
        session::clear(&*consent::backend_for(consent::BackendKind::Cookie));
        session::clear(&*consent::backend_for(consent::BackendKind::LocalStorage));
        let mut s = self.session;
        s.set(None);
        if let Some(token) = token {
            spawn(async move {
                if let Err(e) = AuthClient::new().logout(&token).await {
                    tracing::debug!(error = %e, "logout call failed; token left to expire");
                }
            });
        }
    }

    /// Replaces the cached user snapshot after account-changing calls
    /// (plan changes, refunds). The token stays.
    pub fn refresh_user(&self, user: User) {
        session::update_user(&*consent::active_backend(), &user);
        let mut s = self.session;
        if let Some(mut current) = s() {
            current.user = user;
            s.set(Some(current));
        }
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() {
    let session = use_signal(|| None);
    let loaded = use_signal(|| false);

    use_context_provider(|| AuthContext { session, loaded });

    // Client-side only: restore the persisted session
    #[cfg(target_arch = "wasm32")]
    {
        let mut session = session;
        let mut loaded = loaded;
        use_effect(move || {
            session.set(crate::session::load(&*consent::active_backend()));
            loaded.set(true);
        });
    }
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Gate for account pages. Children render only with a session; once the
/// persisted session has been checked and none exists, the visitor is
/// redirected to the login page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_loaded() && !auth.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    if !auth.is_authenticated() {
        return rsx! {
            article { aria_busy: "true", class: "page-loading", "Checking your session..." }
        };
    }

    rsx! {
        {children}
    }
}
