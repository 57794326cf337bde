//! Status store.
//!
//! # Responsibilities
//! - Hold the latest `StatusRecord` per target
//! - Serve point-in-time snapshots in registry order
//!
//! # Design Decisions
//! - Records live in a `DashMap`; a write replaces the whole value under the
//!   shard lock, so readers never see a half-written record
//! - Ordering is a separate short-lived `RwLock<Vec<_>>`, copied out before
//!   any map access so the two locks are never held together
//! - Cloning the store clones the handle, not the data

use std::sync::{Arc, RwLock};

use dashmap::DashMap;

use super::record::StatusRecord;
use super::target::TargetRegistry;

#[derive(Debug, Default)]
struct StoreInner {
    records: DashMap<String, StatusRecord>,
    order: RwLock<Vec<String>>,
}

/// Shared handle to the per-target status map.
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    inner: Arc<StoreInner>,
}

impl StatusStore {
    /// Create a store whose snapshot order follows the registry.
    pub fn new(registry: &TargetRegistry) -> Self {
        let order = registry.iter().map(|t| t.as_str().to_string()).collect();
        Self {
            inner: Arc::new(StoreInner {
                records: DashMap::new(),
                order: RwLock::new(order),
            }),
        }
    }

    /// Replace the record for `record.target`, inserting unknown targets.
    pub fn upsert(&self, record: StatusRecord) {
        let key = record.target.clone();
        if self.inner.records.insert(key.clone(), record).is_some() {
            return;
        }

        let mut order = match self.inner.order.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !order.contains(&key) {
            order.push(key);
        }
    }

    /// Current records in registry order. Targets that have not completed a
    /// probe yet are omitted.
    pub fn snapshot(&self) -> Vec<StatusRecord> {
        let order = match self.inner.order.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        order
            .iter()
            .filter_map(|key| self.inner.records.get(key).map(|r| r.value().clone()))
            .collect()
    }

    pub fn get(&self, target: &str) -> Option<StatusRecord> {
        self.inner.records.get(target).map(|r| r.value().clone())
    }

    /// Number of targets with a record.
    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }
}
