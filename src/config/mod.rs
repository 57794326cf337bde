//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (MONITOR_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (MONITOR_URLS, CHECK_INTERVAL, CHECK_TIMEOUT, PORT)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, load, load_config, ConfigError};
pub use schema::{CheckConfig, ListenerConfig, LogFormat, MonitorConfig, ObservabilityConfig};
pub use validation::ValidationError;
