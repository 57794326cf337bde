//! HTTP endpoint status monitor library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod monitor;
pub mod observability;

pub use config::MonitorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use monitor::{Scheduler, StatusRecord, StatusStore, TargetRegistry};
