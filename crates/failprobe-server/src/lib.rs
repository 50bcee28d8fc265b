pub mod error;
pub mod routes;
pub mod state;
pub mod ui;

use axum::routing::{get, post};
use axum::Router;
use failprobe_core::ProbeConfig;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
///
/// `base_url` is the externally visible address of this same server; the
/// catalog's local scenarios point back at it.
pub fn build_router(config: ProbeConfig, base_url: &str) -> anyhow::Result<Router> {
    let app_state = state::AppState::new(config, base_url)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        // Events (SSE)
        .route("/api/events", get(routes::events::sse_events))
        // Catalog
        .route("/api/actions", get(routes::actions::list_actions))
        .route("/api/actions/{label}/run", post(routes::actions::run_action))
        // Log
        .route("/api/log", get(routes::log::get_log))
        .route("/api/log/clear", post(routes::log::clear_log))
        // Introspection
        .route("/api/status", get(routes::status::get_status))
        .route("/api/config", get(routes::status::get_config))
        // Demo failure endpoints
        .route("/api/ok", get(routes::demo::ok))
        .route(
            "/api/server-response-http500",
            get(routes::demo::http500),
        )
        .route(
            "/api/server-response-timed-out",
            get(routes::demo::timed_out),
        )
        .fallback(ui::index)
        .layer(cors)
        .with_state(app_state))
}

/// Start the demo server on a pre-bound listener.
///
/// Accepting a `TcpListener` lets the caller bind port 0, read the actual
/// port, and hand us a base URL that matches it.
pub async fn serve_on(
    config: ProbeConfig,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let base_url = format!("http://localhost:{actual_port}");
    let app = build_router(config, &base_url)?;

    tracing::info!("failprobe listening on {base_url}");

    if open_browser {
        let _ = open::that(&base_url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
