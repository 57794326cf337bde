//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start the probe scheduler and the dashboard server
//! - Tear both down when the stop signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener is bound before any probe runs

use std::future::Future;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::MonitorConfig;
use crate::http::dashboard::render_page;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::monitor::{HttpProber, Scheduler, StatusStore};
use crate::observability::metrics;

/// Process-level failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error("HTTP server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Run the monitor until SIGINT/SIGTERM.
pub async fn run(config: MonitorConfig) -> Result<(), StartupError> {
    let listener = bind(&config).await?;
    run_until(config, listener, signals::wait_for_signal()).await
}

/// Bind the dashboard listener described by `config`.
pub async fn bind(config: &MonitorConfig) -> Result<TcpListener, StartupError> {
    let address = config.listener.bind_address();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

/// Run the monitor on an already bound listener until `stop` resolves.
pub async fn run_until<F>(config: MonitorConfig, listener: TcpListener, stop: F) -> Result<(), StartupError>
where
    F: Future<Output = ()>,
{
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let registry = config.registry();
    let store = StatusStore::new(&registry);
    let prober = Arc::new(HttpProber::new(config.check.probe_settings())?);

    tracing::info!(
        targets = registry.len(),
        interval_ms = config.check.interval_ms,
        timeout_ms = config.check.timeout_ms,
        success_min = config.check.success_min,
        success_max = config.check.success_max,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let scheduler = Scheduler::new(prober, store.clone(), config.check.interval());
    let probes = scheduler.start(&registry, &shutdown);

    let page = render_page(registry.len(), config.check.interval());
    let server = HttpServer::new(store, page, &config.listener);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let early_exit = tokio::select! {
        _ = stop => None,
        result = &mut server_task => Some(result),
    };

    shutdown.trigger();
    probes.join().await;

    let result = match early_exit {
        Some(result) => result,
        None => server_task.await,
    };
    result?.map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
