//! Read side of the account's subscription, derived from the session.
//!
//! The backend embeds the subscription in the user object it returns at
//! login, so no extra fetch happens here; pages that change the plan call
//! `AuthContext::refresh_user` with the updated snapshot.

use crate::api::payment::{Plan, Subscription};

use super::use_auth;

/// The account's subscription, whatever its status.
pub fn use_subscription() -> Option<Subscription> {
    use_auth().user().and_then(|user| user.subscription)
}

/// The plan behind an active subscription, if there is one. Pages use
/// this to decide between "upgrade" and "manage" affordances.
pub fn use_active_plan() -> Option<Plan> {
    use_subscription().and_then(|sub| if sub.is_active() { sub.plan } else { None })
}
