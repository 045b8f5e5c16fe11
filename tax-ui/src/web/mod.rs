//! Web form for the comparison.

pub mod handlers;
pub mod page;

use std::{future::IntoFuture, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::UiConfig;
pub use page::{PageRenderer, PageView, RenderError};

/// Shared, read-only state of the web server.
#[derive(Debug)]
pub struct AppState {
    pub config: UiConfig,
    pub pages: PageRenderer,
}

impl AppState {
    pub fn new(config: UiConfig) -> Result<Self, RenderError> {
        Ok(Self {
            config,
            pages: PageRenderer::new()?,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculate", post(handlers::calculate))
        .route("/api/compare", post(handlers::api_compare))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serves the form until Ctrl-C.
pub async fn run_server(config: UiConfig) -> Result<()> {
    let bind = config.bind;
    let state = Arc::new(AppState::new(config).context("failed to compile page template")?);

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let actual_addr = listener.local_addr()?;
    info!(bind = %actual_addr, "calculator listening on http://{actual_addr}/");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .into_future()
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
