//! Single health check against a single target.
//!
//! # Responsibilities
//! - Issue one GET against a target, bounded by a deadline
//! - Classify the response against the configured success range
//! - Fold every failure mode into the returned `StatusRecord`
//!
//! # Design Decisions
//! - `probe` has no error path: transport failures become records with no
//!   code or latency, bad status codes become records with both
//! - Latency is measured up to the response headers; the body is not read
//! - Redirects follow the client's default policy

use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use tokio::time;

use super::record::StatusRecord;
use super::target::Target;
use crate::observability::metrics;

/// Default per-probe deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Inclusive range of HTTP status codes classified as "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessRange {
    pub min: u16,
    pub max: u16,
}

impl SuccessRange {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, code: u16) -> bool {
        (self.min..=self.max).contains(&code)
    }
}

impl Default for SuccessRange {
    fn default() -> Self {
        Self { min: 200, max: 399 }
    }
}

/// Knobs for an `HttpProber`.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub timeout: Duration,
    pub success: SuccessRange,
    pub user_agent: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            success: SuccessRange::default(),
            user_agent: concat!("status-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Something that can check one target and report its status.
///
/// Implementations must never fail: every outcome is encoded in the record.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, target: &Target) -> BoxFuture<'static, StatusRecord>;
}

/// HTTP GET prober backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    settings: ProbeSettings,
}

impl HttpProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self { client, settings })
    }
}

impl Probe for HttpProber {
    fn probe(&self, target: &Target) -> BoxFuture<'static, StatusRecord> {
        let client = self.client.clone();
        let settings = self.settings.clone();
        let target = target.clone();

        Box::pin(async move {
            let record = check(&client, &settings, &target).await;
            metrics::record_probe(&record);
            record
        })
    }
}

async fn check(client: &reqwest::Client, settings: &ProbeSettings, target: &Target) -> StatusRecord {
    let start = Instant::now();
    let response_future = client.get(target.as_str()).send();

    match time::timeout(settings.timeout, response_future).await {
        Ok(Ok(response)) => {
            let code = response.status().as_u16();
            let latency_ms = latency_within(start.elapsed(), settings.timeout);
            let reachable = settings.success.contains(code);

            if reachable {
                tracing::debug!(url = %target, status = code, latency_ms, "Probe succeeded");
            } else {
                tracing::warn!(url = %target, status = code, latency_ms, "Probe failed: non-success status");
            }

            StatusRecord::responded(target.as_str(), reachable, code, latency_ms)
        }
        Ok(Err(e)) => {
            tracing::warn!(url = %target, error = %e, "Probe failed: transport error");
            StatusRecord::unreachable(target.as_str())
        }
        Err(_) => {
            tracing::warn!(
                url = %target,
                timeout_ms = settings.timeout.as_millis() as u64,
                "Probe failed: timeout"
            );
            StatusRecord::unreachable(target.as_str())
        }
    }
}

/// Elapsed milliseconds, capped at the deadline.
fn latency_within(elapsed: Duration, timeout: Duration) -> u64 {
    elapsed.min(timeout).as_millis() as u64
}
