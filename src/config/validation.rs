//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval and timeout > 0, non-empty success range)
//! - Flag targets that are unlikely to be HTTP endpoints
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Odd-looking target addresses only warn; probing them reports DOWN

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::MonitorConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no targets configured")]
    NoTargets,

    #[error("check.interval_ms must be greater than 0")]
    ZeroInterval,

    #[error("check.timeout_ms must be greater than 0")]
    ZeroTimeout,

    #[error("success range {min}-{max} is empty")]
    EmptySuccessRange { min: u16, max: u16 },

    #[error("invalid log level directive {0:?}")]
    InvalidLogLevel(String),

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),
}

pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let registry = config.registry();
    if registry.is_empty() {
        errors.push(ValidationError::NoTargets);
    }
    for target in registry.iter() {
        match Url::parse(target.as_str()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => tracing::warn!(url = %target, "Target is not an http(s) URL; it will report DOWN"),
        }
    }

    if config.check.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.check.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.check.success_min > config.check.success_max {
        errors.push(ValidationError::EmptySuccessRange {
            min: config.check.success_min,
            max: config.check.success_max,
        });
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
