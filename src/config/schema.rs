//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file and
//! every field has a default, so an empty file is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::monitor::{ProbeSettings, SuccessRange, TargetRegistry};

/// Placeholder target used when none is configured.
pub const DEFAULT_TARGET: &str = "http://example.com";

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Endpoint addresses to probe, in display order.
    pub targets: Vec<String>,

    /// Probe cadence and classification.
    pub check: CheckConfig,

    /// Dashboard listener.
    pub listener: ListenerConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            targets: vec![DEFAULT_TARGET.to_string()],
            check: CheckConfig::default(),
            listener: ListenerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl MonitorConfig {
    pub fn registry(&self) -> TargetRegistry {
        TargetRegistry::new(&self.targets)
    }
}

/// Probe settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Time between two probes of the same target, in milliseconds.
    pub interval_ms: u64,

    /// Per-probe deadline, in milliseconds.
    pub timeout_ms: u64,

    /// Lowest status code counted as up.
    pub success_min: u16,

    /// Highest status code counted as up (inclusive).
    pub success_max: u16,

    /// User-Agent header sent with every probe.
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        let range = SuccessRange::default();
        let probe = ProbeSettings::default();
        Self {
            interval_ms: 30_000,
            timeout_ms: probe.timeout.as_millis() as u64,
            success_min: range.min,
            success_max: range.max,
            user_agent: probe.user_agent,
        }
    }
}

impl CheckConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn success_range(&self) -> SuccessRange {
        SuccessRange::new(self.success_min, self.success_max)
    }

    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: self.timeout(),
            success: self.success_range(),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Dashboard port. 0 picks an ephemeral port.
    pub port: u16,

    /// Upper bound for handling one dashboard request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 10,
        }
    }
}

impl ListenerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info").
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Serve Prometheus metrics.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
