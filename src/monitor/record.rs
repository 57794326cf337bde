//! Status record: the latest observed outcome for one target.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent completed check for a target.
///
/// Serialized with the dashboard's wire names (`url`, `up`, `status`,
/// `responseTime`, `lastChecked` as epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "url")]
    pub target: String,

    #[serde(rename = "up")]
    pub reachable: bool,

    #[serde(rename = "status", default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,

    #[serde(rename = "responseTime", default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,

    #[serde(rename = "lastChecked", with = "chrono::serde::ts_milliseconds")]
    pub observed_at: DateTime<Utc>,
}

impl StatusRecord {
    /// A response was received; `reachable` follows the success classification.
    pub fn responded(target: impl Into<String>, reachable: bool, http_code: u16, latency_ms: u64) -> Self {
        Self {
            target: target.into(),
            reachable,
            http_code: Some(http_code),
            latency_ms: Some(latency_ms),
            observed_at: Utc::now(),
        }
    }

    /// The probe failed before any response arrived.
    pub fn unreachable(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reachable: false,
            http_code: None,
            latency_ms: None,
            observed_at: Utc::now(),
        }
    }
}
