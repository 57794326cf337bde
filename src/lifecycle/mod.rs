//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Listener → Registry → Store → Prober → Scheduler → Server
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → probe tasks exit → server drains → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Probes start right before the server so the first snapshot is
//!   populated as early as possible
//! - In-flight probes are dropped on shutdown, not drained

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
