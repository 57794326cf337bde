//! Target registry.
//!
//! # Responsibilities
//! - Parse the configured target list (trimmed, empties dropped)
//! - Hold the immutable, ordered set of endpoints for the whole run
//!
//! # Design Decisions
//! - Identity is the address string itself
//! - Duplicates collapse to their first occurrence
//! - Addresses are not rejected for being unparseable URLs; the prober
//!   reports them as unreachable instead

use std::fmt;
use std::sync::Arc;

/// A single monitored endpoint address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(Arc<str>);

impl Target {
    /// Build a target from a raw address, trimming whitespace.
    /// Returns `None` for empty input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Target {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable, ordered list of targets derived once at startup.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: Arc<[Target]>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self {
            targets: Arc::from(Vec::new()),
        }
    }
}

impl TargetRegistry {
    /// Build a registry from already separated addresses.
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets: Vec<Target> = Vec::new();
        for target in addresses.into_iter().filter_map(|a| Target::parse(a.as_ref())) {
            if targets.contains(&target) {
                tracing::warn!(url = %target, "Duplicate target ignored");
                continue;
            }
            targets.push(target);
        }

        Self {
            targets: targets.into(),
        }
    }

    /// Build a registry from a comma-separated list.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
