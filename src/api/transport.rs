//! HTTP transport behind the API clients.
//!
//! One trait, three implementations: `fetch` in the browser, reqwest for
//! the integration tests, and an SSR stub that errors immediately so
//! server rendering never waits on the network. Pages render their
//! loading state during SSR and the hydrated client performs the real
//! fetch.

use async_trait::async_trait;
use serde::Serialize;

use super::ApiError;

/// A request in the shape every backend call takes: JSON in, JSON out,
/// optional bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: &'static str,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET",
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn post<B: Serialize>(url: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self {
            method: "POST",
            url: url.into(),
            bearer: None,
            body: Some(body),
        })
    }

    /// Bodyless POST (logout and friends).
    pub fn post_empty(url: impl Into<String>) -> Self {
        Self {
            method: "POST",
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Raw response before envelope decoding: HTTP status plus body text.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between clients and the platform HTTP stack.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Transport for UI code. Real fetch in the browser; on the server this is
/// the SSR stub.
pub fn platform_transport() -> Box<dyn Transport> {
    Box::new(FetchTransport)
}

/// Browser transport over `window.fetch`.
#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

        let headers = Headers::new().map_err(js_err)?;
        headers.set("Accept", "application/json").map_err(js_err)?;
        if req.body.is_some() {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
        }
        if let Some(token) = &req.bearer {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_err)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method);
        opts.set_headers(&headers);
        if let Some(body) = &req.body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(js_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("not a Response".into()))?;

        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(RawResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

/// SSR stub - fails immediately so server rendering never blocks on the
/// backend. The hydrated client refetches.
#[cfg(not(target_arch = "wasm32"))]
pub struct FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, _req: ApiRequest) -> Result<RawResponse, ApiError> {
        Err(ApiError::Network(
            "browser fetch is only available in the client bundle".to_string(),
        ))
    }
}

/// Server-side transport over reqwest, for the integration tests.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = match req.method {
            "POST" => self.client.post(&req.url),
            _ => self.client.get(&req.url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(token) = &req.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = req.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_body_and_sets_method() {
        #[derive(Serialize)]
        struct Login<'a> {
            email: &'a str,
        }

        let req = ApiRequest::post("http://x/auth/login", &Login { email: "a@b.c" }).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
        assert_eq!(req.bearer, None);
    }

    #[test]
    fn bearer_builder_attaches_token() {
        let req = ApiRequest::get("http://x/payments").bearer("tok_123");
        assert_eq!(req.bearer.as_deref(), Some("tok_123"));
        assert_eq!(req.body, None);
    }

    #[test]
    fn response_ok_covers_2xx_only() {
        let mk = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(mk(200).ok());
        assert!(mk(204).ok());
        assert!(!mk(302).ok());
        assert!(!mk(422).ok());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn ssr_stub_fails_without_touching_the_network() {
        let transport = FetchTransport;
        let err = tokio_test::block_on(transport.send(ApiRequest::get("http://unreachable/")))
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
