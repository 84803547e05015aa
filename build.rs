//! Build script to inject version, git SHA and the backend base URL at
//! compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - PAVIT_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - PAVIT_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)
//! - PAVIT_API_BASE: Backend API origin, baked into both server and WASM
//!   builds (defaults to the production deployment)

use std::process::Command;

const DEFAULT_API_BASE: &str = "https://api.pavitinfotech.com/api/v1";

fn main() {
    // Version: prefer PAVIT_VERSION env var, fall back to CARGO_PKG_VERSION
    let version = std::env::var("PAVIT_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=PAVIT_VERSION={}", version);

    // Git SHA: prefer PAVIT_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("PAVIT_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s[..7].to_string()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=PAVIT_GIT_SHA={}", git_sha);

    // API base: must be known at compile time because the WASM bundle has no
    // environment to read it from at runtime
    let api_base = std::env::var("PAVIT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
    println!(
        "cargo:rustc-env=PAVIT_API_BASE={}",
        api_base.trim_end_matches('/')
    );

    // Rebuild if these change
    println!("cargo:rerun-if-env-changed=PAVIT_VERSION");
    println!("cargo:rerun-if-env-changed=PAVIT_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    println!("cargo:rerun-if-env-changed=PAVIT_API_BASE");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
