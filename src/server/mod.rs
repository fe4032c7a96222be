//! The HTTP interface: a JSON API over the expense store plus the web page that uses it.

mod assets;
mod error;
mod handlers;

use crate::{Config, Result};
use anyhow::Context;
use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::{ApiError, ErrorResponse};
pub use handlers::MessageResponse;

/// Builds the router with every route bound to `config`.
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/debug", get(handlers::debug))
        .route("/static/css/style.css", get(handlers::style))
        .route("/static/js/script.js", get(handlers::script))
        .route(
            "/api/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/api/expenses/:id",
            put(handlers::update_expense).delete(handlers::delete_expense),
        )
        .route("/api/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Binds `host:port` and serves until Ctrl-C is received.
pub(crate) async fn run(config: Config, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Unable to listen on {addr}"))?;
    let local = listener
        .local_addr()
        .context("Unable to read the listening address")?;
    info!(
        "Serving {} on http://{local}",
        config.store().path().display()
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("The server stopped unexpectedly")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => error!("Unable to listen for Ctrl-C: {e}"),
    }
}
