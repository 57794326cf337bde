//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router for the JSON API and the dashboard
//! - Wire up middleware (tracing, request timeout)
//! - Serve until the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ListenerConfig;
use crate::lifecycle::shutdown;
use crate::monitor::{StatusRecord, StatusStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: StatusStore,
    pub page: Arc<str>,
}

/// Dashboard and API server.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(store: StatusStore, page: String, config: &ListenerConfig) -> Self {
        let state = AppState {
            store,
            page: Arc::from(page),
        };
        let router = build_router(state, Duration::from_secs(config.request_timeout_secs));
        Self { router }
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, stop: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Dashboard listening on http://localhost:{}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(stop))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/healthz", get(healthz))
        .fallback(dashboard)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn get_status(State(state): State<AppState>) -> Json<Vec<StatusRecord>> {
    Json(state.store.snapshot())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}
