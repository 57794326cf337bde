//! Configuration loading from a TOML file and environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Optional path to a TOML configuration file.
pub const ENV_CONFIG_PATH: &str = "MONITOR_CONFIG";
/// Comma-separated list of target addresses.
pub const ENV_TARGETS: &str = "MONITOR_URLS";
/// Check interval in milliseconds.
pub const ENV_INTERVAL: &str = "CHECK_INTERVAL";
/// Probe timeout in milliseconds.
pub const ENV_TIMEOUT: &str = "CHECK_TIMEOUT";
/// Dashboard port.
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let config = read_file(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<MonitorConfig, ConfigError> {
    load(|key| std::env::var(key).ok())
}

/// Build configuration from an optional file plus variable overrides, then
/// validate it. `lookup` resolves variable names to values.
pub fn load<F>(lookup: F) -> Result<MonitorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(ENV_CONFIG_PATH) {
        Some(path) if !path.trim().is_empty() => read_file(Path::new(path.trim()))?,
        _ => MonitorConfig::default(),
    };

    apply_overrides(&mut config, &lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply variable overrides on top of an existing configuration.
pub fn apply_overrides<F>(config: &mut MonitorConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // A variable set to an empty string counts as unset.
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(list) = lookup(ENV_TARGETS) {
        config.targets = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(value) = lookup(ENV_INTERVAL) {
        config.check.interval_ms = parse_var(ENV_INTERVAL, &value, "milliseconds")?;
    }
    if let Some(value) = lookup(ENV_TIMEOUT) {
        config.check.timeout_ms = parse_var(ENV_TIMEOUT, &value, "milliseconds")?;
    }
    if let Some(value) = lookup(ENV_PORT) {
        config.listener.port = parse_var(ENV_PORT, &value, "a port number (0-65535)")?;
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
        expected,
    })
}
