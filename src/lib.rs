//! Pavit IoT web front-end.
//!
//! Marketing site and customer dashboard for the Pavit IoT monitoring
//! platform, served as a Dioxus fullstack app (SSR + WASM hydration).
//! All business data lives behind the hosted API; this crate renders,
//! validates and talks to it.
//!
//! This library provides:
//! - Typed clients for the platform API (auth, billing, AI assistant, maps)
//! - Consent-aware session storage (cookie or localStorage)
//! - Card validation used by the checkout flow
//! - The Dioxus UI (pages, dashboard widgets, shared components)

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// API client layer (shared; transport is platform-split internally)
pub mod api;

// Session + consent storage (shared; browser backends are wasm-only)
pub mod session;

// Card validation (shared, pure)
pub mod billing;

// Static site content and dashboard mock data (shared)
pub mod content;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
