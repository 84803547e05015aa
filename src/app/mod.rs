//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! app-wide contexts (theme, auth session, cookie consent).

use dioxus::prelude::*;

pub mod components;
pub mod hooks;
pub mod pages;
pub mod theme;
pub mod widgets;

use hooks::{use_auth_provider, use_consent_provider};
use pages::{
    About, Billing, BlogArticle, BlogIndex, Checkout, Dashboard, DashboardCompare,
    DashboardHeatmap, DashboardReports, DashboardRules, ForgotPassword, Home, Legal, Login,
    NotFound, OauthCallback, Pricing, Register,
};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme context first so every page class-toggles the same signal.
    use_theme_provider();

    // Consent decides where the session is persisted, so it loads
    // before the session is restored.
    use_consent_provider();
    use_auth_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/pricing")]
    Pricing {},
    #[route("/blog")]
    BlogIndex {},
    #[route("/blog/:slug")]
    BlogArticle { slug: String },
    #[route("/about")]
    About {},
    #[route("/legal/:slug")]
    Legal { slug: String },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/auth/callback?:token&:name&:email")]
    OauthCallback {
        token: String,
        name: String,
        email: String,
    },
    #[route("/checkout/:slug")]
    Checkout { slug: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/rules")]
    DashboardRules {},
    #[route("/dashboard/reports")]
    DashboardReports {},
    #[route("/dashboard/compare")]
    DashboardCompare {},
    #[route("/dashboard/heatmap")]
    DashboardHeatmap {},
    #[route("/dashboard/billing")]
    Billing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
