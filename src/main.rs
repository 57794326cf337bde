//! HTTP endpoint status monitor.
//!
//! Probes a fixed list of URLs on an interval and serves the latest results.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                        STATUS MONITOR                        │
//!   │                                                              │
//!   │  ┌──────────┐   ┌───────────┐   ┌────────┐   ┌────────────┐  │
//!   │  │  config  │──▶│ scheduler │──▶│ prober │──▶│   store    │  │
//!   │  │ registry │   │ 1 task /  │   │ GET +  │   │ latest per │  │
//!   │  └──────────┘   │  target   │   │timeout │   │   target   │  │
//!   │                 └───────────┘   └────────┘   └─────┬──────┘  │
//!   │                                                    │ pull    │
//!   │                                            ┌───────▼──────┐  │
//!   │   Browser ◀──── HTML page / JSON ──────────│ http server  │  │
//!   │                                            └──────────────┘  │
//!   │                                                              │
//!   │   lifecycle: signals → shutdown broadcast → tasks exit        │
//!   │   observability: tracing logs, optional Prometheus metrics   │
//!   └──────────────────────────────────────────────────────────────┘
//! ```

use status_monitor::config;
use status_monitor::lifecycle::startup;
use status_monitor::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    logging::init_logging(&config.observability)?;

    tracing::info!("status-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;
    Ok(())
}
