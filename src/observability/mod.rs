//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler and prober produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields (url, status, latency_ms) on every probe event
//! - Metrics calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
