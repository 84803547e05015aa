#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Ops endpoint routing tests
//!
//! Builds the same /healthz, /robots.txt and /sitemap.xml routes main.rs
//! mounts (minus the rendered app) and drives them through the router,
//! so routing and state extraction are covered, not just the handler
//! bodies.
//!
//! Run with: cargo test --test ops_routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use pavit_web::server::{self, AppState};

/// Same ops routes as main.rs
fn ops_app() -> Router {
    Router::new()
        .route("/healthz", get(server::healthz_handler))
        .route("/robots.txt", get(server::robots_handler))
        .route("/sitemap.xml", get(server::sitemap_handler))
        .with_state(AppState::new("https://pavitinfotech.com".to_string()))
}

/// Helper to make a GET request and return body as string
async fn get_body(app: &Router, path: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn healthz_reports_service_identity() {
    let app = ops_app();
    let (status, body) = get_body(&app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&body).expect("healthz should return JSON");
    assert_eq!(parsed["service"], "pavit-web");
    assert!(parsed["uptime_secs"].is_u64());
}

#[tokio::test]
async fn robots_txt_keeps_crawlers_out_of_the_dashboard() {
    let app = ops_app();
    let (status, body) = get_body(&app, "/robots.txt").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Disallow: /dashboard"));
    assert!(body.contains("Sitemap: https://pavitinfotech.com/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_lists_absolute_marketing_urls() {
    let app = ops_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/sitemap.xml")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml");

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("<loc>https://pavitinfotech.com/pricing</loc>"));
    assert!(body.contains("<loc>https://pavitinfotech.com/legal/privacy</loc>"));
}
