//! Pavit IoT web front-end.
//!
//! Server build renders the app (SSR + hydration assets) and serves the
//! ops endpoints; the web build boots the same app in the browser.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{routing::get, Router};
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use pavit_web::app::App;
    use pavit_web::{config, server};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pavit_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Pavit web v{} ({})",
        env!("PAVIT_VERSION"),
        env!("PAVIT_GIT_SHA")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    let state = server::AppState::new(config.site_base.clone());

    // Build routes: ops endpoints first, then the rendered app
    let app = Router::new()
        // Health check
        .route("/healthz", get(server::healthz_handler))
        // Crawler endpoints
        .route("/robots.txt", get(server::robots_handler))
        .route("/sitemap.xml", get(server::sitemap_handler))
        .with_state(state)
        // SSR pages, hydration assets and server functions
        .merge(Router::new().serve_dioxus_application(ServeConfig::default(), App))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(pavit_web::app::App);
}
