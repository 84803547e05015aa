//! Page-layer enforcement lint - rules the type system cannot express.
//!
//! The app ships the same source to the browser bundle and the server
//! binary, which makes a few habits quietly destructive:
//! - `.unwrap()` / `.expect()` in shared code aborts the whole WASM app
//! - `std::env::var` reads return nothing in the browser; backend origin
//!   and config must come from `env!` at build time or the config module
//! - `println!` goes nowhere useful; tracing works on both targets
//! - HTTP anywhere but the transport seam bypasses envelope handling
//!
//! Exceptions:
//! - The api-checker binary is a terminal tool; it prints and unwraps
//! - The config module is server-only and owns the env var precedence
//! - The reqwest transport is the one sanctioned HTTP implementation
//! - Signal handler installation may expect(); failing there is fatal
//!   by definition

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Patterns that break one of the targets, with the fix to apply.
const DISALLOWED_PATTERNS: &[(&str, &str)] = &[
    (
        ".unwrap()",
        "Propagate with ? or render a fallback; a panic takes down the whole page",
    ),
    (
        ".expect(",
        "Propagate with ? or render a fallback; a panic takes down the whole page",
    ),
    (
        "std::env::var",
        "Use env!() at build time, or route through the config module",
    ),
    (
        "println!",
        "Use tracing::info!/debug! so output reaches both targets",
    ),
    (
        "eprintln!",
        "Use tracing::warn!/error! so output reaches both targets",
    ),
    (
        "reqwest::",
        "Go through api::transport::Transport so envelope handling stays in one place",
    ),
    (
        "api.pavitinfotech.com",
        "Use api::api_base(); the origin is injected at build time",
    ),
    (
        "web_sys::",
        "Browser APIs live behind the session, theme and transport modules",
    ),
];

/// Files exempt from the whole pattern list.
const ALLOWED_FILES: &[&str] = &[
    // Standalone CLI: prints to a terminal and unwraps by design
    "bin/api_checker.rs",
    // Server-only config layer owns the env var precedence rules
    "config/mod.rs",
    // The sanctioned reqwest implementation of the transport seam, and
    // the two other modules that wrap browser APIs behind cfg gates
    "api/transport.rs",
    "session/backend.rs",
    "app/theme.rs",
];

/// Functions allowed to use any of the patterns.
const ALLOWED_CONTEXTS: &[&str] = &[
    // If installing a signal handler fails the process cannot shut down
    // cleanly anyway
    "shutdown_signal",
];

fn is_in_allowed_context(content: &str, pattern_pos: usize) -> bool {
    let before = &content[..pattern_pos];

    let fn_markers = ["pub async fn ", "async fn ", "pub fn ", "fn "];

    for marker in fn_markers {
        if let Some(fn_pos) = before.rfind(marker) {
            let fn_start = fn_pos + marker.len();
            let after_marker = &before[fn_start..];

            let fn_end = after_marker
                .find(|c: char| c == '(' || c == '<' || c.is_whitespace())
                .unwrap_or(after_marker.len().min(50));

            let fn_name = &after_marker[..fn_end];

            for allowed in ALLOWED_CONTEXTS {
                if fn_name.contains(allowed) {
                    return true;
                }
            }

            return false;
        }
    }

    false
}

fn analyze_file(path: &Path) -> Vec<(String, String, String)> {
    let path_str = path.display().to_string();

    for allowed in ALLOWED_FILES {
        if path_str.contains(allowed) {
            return vec![];
        }
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    // In-file unit tests may unwrap; scanning stops at the test module.
    let scan_end = content.find("#[cfg(test)]").unwrap_or(content.len());
    let content = &content[..scan_end];

    let mut violations = Vec::new();

    for (pattern, suggestion) in DISALLOWED_PATTERNS {
        let mut search_from = 0;
        while let Some(pos) = content[search_from..].find(pattern) {
            let absolute_pos = search_from + pos;

            if !is_in_allowed_context(content, absolute_pos) {
                let line_num = content[..absolute_pos].matches('\n').count() + 1;

                violations.push((
                    format!("{}:{}", path_str, line_num),
                    (*pattern).to_string(),
                    (*suggestion).to_string(),
                ));
            }

            search_from = absolute_pos + pattern.len();
        }
    }

    violations
}

#[test]
fn shared_code_never_panics_or_bypasses_the_seams() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let violations = analyze_file(entry.path());
        all_violations.extend(violations);
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\n\
            ╔══════════════════════════════════════════════════════════════════════════════╗\n\
            ║  PAGE RULES VIOLATION: shared code must stay panic-free and seam-clean       ║\n\
            ╚══════════════════════════════════════════════════════════════════════════════╝\n\n\
            The same source compiles into the browser bundle and the server binary.\n\
            A panic aborts the page for the visitor; raw env/stdout/HTTP calls only\n\
            work on one of the two targets.\n\n\
            Violations found:\n\n",
        );

        for (location, pattern, suggestion) in &all_violations {
            error_msg.push_str(&format!("  {} \n", location));
            error_msg.push_str(&format!("    Found: {}\n", pattern));
            error_msg.push_str(&format!("    Fix: {}\n\n", suggestion));
        }

        error_msg.push_str(
            "If this is intentional (e.g., a server-only module), add the file to\n\
            ALLOWED_FILES or the function to ALLOWED_CONTEXTS in tests/page_lint.rs\n",
        );

        panic!("{}", error_msg);
    }
}

#[test]
fn protected_pages_wrap_require_auth() {
    // Account-scoped pages must gate rendering on a live session.
    let protected = [
        "src/app/pages/dashboard.rs",
        "src/app/pages/billing.rs",
        "src/app/pages/checkout.rs",
    ];

    for relative in protected {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
        let content =
            fs::read_to_string(&path).unwrap_or_else(|_| panic!("failed to read {}", relative));

        assert!(
            content.contains("RequireAuth"),
            "{} renders account data but never wraps it in RequireAuth",
            relative
        );
    }
}

#[test]
fn every_page_renders_inside_the_layout() {
    // Pages share the nav/footer/consent chrome through Layout; a page
    // rendered outside it loses the session UI and the chat launcher.
    let pages_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("app")
        .join("pages");

    let mut bare_pages = Vec::new();

    for entry in WalkDir::new(&pages_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        if entry.path().file_name().is_some_and(|n| n == "mod.rs") {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(_) => continue,
        };
        if !content.contains("Layout {") {
            bare_pages.push(entry.path().display().to_string());
        }
    }

    assert!(
        bare_pages.is_empty(),
        "pages rendered outside Layout: {:?}",
        bare_pages
    );
}
