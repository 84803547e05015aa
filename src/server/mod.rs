//! HTTP handlers served next to the rendered app.
//!
//! Everything here sits outside the Dioxus router: the health probe the
//! deploy target polls and the crawler endpoints (robots.txt, sitemap).

use crate::content;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub started: Instant,
    pub site_base: String,
}

impl AppState {
    pub fn new(site_base: String) -> Self {
        Self {
            started: Instant::now(),
            site_base,
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

/// Service health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
}

/// GET /healthz - Service health check
pub async fn healthz_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "pavit-web",
        version: env!("PAVIT_VERSION"),
        git_sha: env!("PAVIT_GIT_SHA"),
        uptime_secs: state.uptime_secs(),
    })
}

/// GET /robots.txt - Crawler policy
pub async fn robots_handler(State(state): State<AppState>) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /dashboard\n\nSitemap: {}/sitemap.xml\n",
        state.site_base
    )
}

/// Paths listed in the sitemap. Marketing and content pages only; the
/// dashboard and auth flows are deliberately absent.
pub fn sitemap_paths() -> Vec<String> {
    let mut paths = vec![
        "/".to_string(),
        "/pricing".to_string(),
        "/blog".to_string(),
        "/about".to_string(),
    ];
    for doc in content::LEGAL_DOCS {
        paths.push(format!("/legal/{}", doc.slug));
    }
    for post in content::blog::all() {
        paths.push(format!("/blog/{}", post.slug));
    }
    paths
}

/// GET /sitemap.xml - Sitemap for crawlers
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for path in sitemap_paths() {
        xml.push_str("  <url><loc>");
        xml.push_str(&state.site_base);
        xml.push_str(&path);
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
