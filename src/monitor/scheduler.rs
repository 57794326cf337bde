//! Periodic probe scheduling.
//!
//! # Responsibilities
//! - Run one independent task per target: probe now, then every interval
//! - Publish each completed probe into the status store
//! - Stop every task when shutdown is signalled
//!
//! # Design Decisions
//! - A task multiplexes its ticker, the shutdown signal and at most one
//!   in-flight probe, so the timer never waits on a slow probe
//! - Overlap policy is skip: a tick that arrives while the previous probe for
//!   the same target is still running is dropped. Targets that never answer
//!   therefore cost one outstanding request each, never an unbounded pile
//! - The store reflects the most recently completed probe

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};

use super::prober::Probe;
use super::record::StatusRecord;
use super::store::StatusStore;
use super::target::{Target, TargetRegistry};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Drives periodic probes for every registered target.
pub struct Scheduler {
    prober: Arc<dyn Probe>,
    store: StatusStore,
    interval: Duration,
}

impl Scheduler {
    pub fn new(prober: Arc<dyn Probe>, store: StatusStore, interval: Duration) -> Self {
        // tokio intervals reject a zero period
        let interval = interval.max(Duration::from_millis(1));
        Self {
            prober,
            store,
            interval,
        }
    }

    /// Spawn one task per target. Tasks run until `shutdown` is triggered
    /// (or dropped).
    pub fn start(&self, registry: &TargetRegistry, shutdown: &Shutdown) -> SchedulerHandle {
        let mut tasks = JoinSet::new();

        for target in registry.iter() {
            let worker = TargetWorker {
                target: target.clone(),
                prober: Arc::clone(&self.prober),
                store: self.store.clone(),
                interval: self.interval,
            };
            tasks.spawn(worker.run(shutdown.subscribe()));
        }

        tracing::info!(
            targets = registry.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Scheduler started"
        );

        SchedulerHandle { tasks }
    }
}

/// Owner of the per-target tasks.
pub struct SchedulerHandle {
    tasks: JoinSet<()>,
}

impl SchedulerHandle {
    /// Number of tasks still owned by the handle.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every task to exit. Call after triggering shutdown.
    pub async fn join(mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                if e.is_panic() {
                    tracing::error!(error = %e, "Scheduler task panicked");
                }
            }
        }
        tracing::info!("Scheduler stopped");
    }

    /// Stop all tasks without waiting for a shutdown signal.
    pub fn abort(&mut self) {
        self.tasks.abort_all();
    }
}

struct TargetWorker {
    target: Target,
    prober: Arc<dyn Probe>,
    store: StatusStore,
    interval: Duration,
}

impl TargetWorker {
    async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        // The first tick completes immediately.
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut in_flight: Option<BoxFuture<'static, StatusRecord>> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if in_flight.is_some() {
                        tracing::debug!(url = %self.target, "Previous probe still running, skipping tick");
                        metrics::record_skipped_tick(self.target.as_str());
                    } else {
                        in_flight = Some(self.prober.probe(&self.target));
                    }
                }
                record = poll_in_flight(&mut in_flight) => {
                    in_flight = None;
                    self.store.upsert(record);
                }
                _ = shutdown.recv() => {
                    tracing::debug!(url = %self.target, "Probe task received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

async fn poll_in_flight(slot: &mut Option<BoxFuture<'static, StatusRecord>>) -> StatusRecord {
    match slot {
        Some(probe) => probe.await,
        None => std::future::pending().await,
    }
}
