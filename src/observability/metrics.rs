//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_probes_total` (counter): probes by target, outcome
//! - `monitor_probe_duration_seconds` (histogram): latency of answered probes
//! - `monitor_target_up` (gauge): 1=up, 0=down
//! - `monitor_ticks_skipped_total` (counter): ticks dropped while a probe ran

use std::net::SocketAddr;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::monitor::StatusRecord;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Outcome label for a record.
pub fn outcome(record: &StatusRecord) -> &'static str {
    match (record.reachable, record.http_code) {
        (true, _) => "up",
        (false, Some(_)) => "down",
        (false, None) => "unreachable",
    }
}

pub fn record_probe(record: &StatusRecord) {
    counter!(
        "monitor_probes_total",
        "target" => record.target.clone(),
        "outcome" => outcome(record)
    )
    .increment(1);

    if let Some(ms) = record.latency_ms {
        histogram!("monitor_probe_duration_seconds", "target" => record.target.clone())
            .record(ms as f64 / 1000.0);
    }

    gauge!("monitor_target_up", "target" => record.target.clone())
        .set(if record.reachable { 1.0 } else { 0.0 });
}

pub fn record_skipped_tick(target: &str) {
    counter!("monitor_ticks_skipped_total", "target" => target.to_string()).increment(1);
}
