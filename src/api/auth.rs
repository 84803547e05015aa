//! Auth endpoints: credential login, registration, password reset,
//! logout and the OAuth redirect entry points.

use serde::{Deserialize, Serialize};

use super::transport::{platform_transport, ApiRequest, Transport};
use super::{api_base, parse_ack, parse_data, ApiError};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// The signed-in account as the backend reports it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subscription: Option<super::payment::Subscription>,
}

/// What login and register hand back: the bearer token plus the account.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Identity providers the backend can hand a browser off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OauthProvider {
    Google,
    GitHub,
}

impl OauthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OauthProvider::Google => "google",
            OauthProvider::GitHub => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OauthProvider::Google => "Google",
            OauthProvider::GitHub => "GitHub",
        }
    }
}

/// Full browser-navigation URL that starts the OAuth dance for a provider.
/// The backend redirects back to `/auth/callback` with token and profile
/// fields in the query string.
pub fn oauth_redirect_url(provider: OauthProvider) -> String {
    format!("{}/auth/{}/redirect", api_base(), provider.as_str())
}

pub struct AuthClient {
    base: String,
    transport: Box<dyn Transport>,
}

impl AuthClient {
    pub fn new() -> Self {
        Self::with_transport(api_base(), platform_transport())
    }

    pub fn with_transport(base: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthPayload, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(format!("{}/auth/login", self.base), req)?)
            .await?;
        parse_data(&raw)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(
                format!("{}/auth/register", self.base),
                req,
            )?)
            .await?;
        parse_data(&raw)
    }

    /// Requests a reset email. Returns the acknowledgement message, which
    /// the backend keeps identical for known and unknown addresses.
    pub async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<String, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post(
                format!("{}/auth/password/forgot", self.base),
                req,
            )?)
            .await?;
        parse_ack(&raw)
    }

    /// Revokes the token server-side. Local session state is cleared by the
    /// caller regardless of the outcome here.
    pub async fn logout(&self, token: &str) -> Result<String, ApiError> {
        let raw = self
            .transport
            .send(ApiRequest::post_empty(format!("{}/auth/logout", self.base)).bearer(token))
            .await?;
        parse_ack(&raw)
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_urls_point_at_provider_redirects() {
        let google = oauth_redirect_url(OauthProvider::Google);
        let github = oauth_redirect_url(OauthProvider::GitHub);
        assert!(google.ends_with("/auth/google/redirect"));
        assert!(github.ends_with("/auth/github/redirect"));
        assert!(google.starts_with(api_base()));
    }

    #[test]
    fn user_parses_with_and_without_subscription() {
        let bare: User = serde_json::from_str(
            r#"{"id":1,"name":"Asha Rao","email":"asha@example.com"}"#,
        )
        .unwrap();
        assert_eq!(bare.subscription, None);

        let with_sub: User = serde_json::from_str(
            r#"{
                "id": 2,
                "name": "Dev Mehta",
                "email": "dev@example.com",
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
                        "features": ["Up to 100 devices"]
                    }
                }
            }"#,
        )
        .unwrap();
        let sub = with_sub.subscription.unwrap();
        assert_eq!(sub.status, "active");
        assert_eq!(sub.plan.unwrap().slug, "growth");
    }
}
