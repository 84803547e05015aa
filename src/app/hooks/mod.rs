//! App-wide state hooks: session, cookie consent, subscription.

pub mod auth;
pub mod consent;
pub mod subscription;

pub use auth::{use_auth, use_auth_provider, AuthContext, RequireAuth};
pub use consent::{use_consent, use_consent_provider, ConsentContext};
pub use subscription::{use_active_plan, use_subscription};
