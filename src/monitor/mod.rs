//! Monitoring core.
//!
//! # Data Flow
//! ```text
//! target.rs (registry, built once from config)
//!     → scheduler.rs (one task per target, immediate + every interval)
//!     → prober.rs (GET with deadline, never fails)
//!     → store.rs (latest record per target)
//!     ← http layer reads snapshots on demand
//! ```
//!
//! # Design Decisions
//! - Targets are independent; no task waits on another
//! - At most one in-flight probe per target (ticks are skipped while busy)
//! - The store is an explicit handle, not process-global state

pub mod prober;
pub mod record;
pub mod scheduler;
pub mod store;
pub mod target;

pub use prober::{HttpProber, Probe, ProbeSettings, SuccessRange};
pub use record::StatusRecord;
pub use scheduler::{Scheduler, SchedulerHandle};
pub use store::StatusStore;
pub use target::{Target, TargetRegistry};
