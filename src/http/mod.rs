//! Presentation layer.
//!
//! # Data Flow
//! ```text
//! GET /api/status → server.rs → StatusStore::snapshot → JSON array
//! GET /healthz    → "ok"
//! GET (anything)  → dashboard.rs page, which polls /api/status
//! ```

pub mod dashboard;
pub mod server;

pub use server::{build_router, AppState, HttpServer};
