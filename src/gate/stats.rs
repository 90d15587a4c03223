//! Counters for version gate checks.

use super::GateOutcome;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Success, failure and total tallies of gate checks.
///
/// Constructed by the caller and handed to whatever loop runs the checks,
/// usually behind a shared reference or an `Arc`. Increments are atomic, so
/// one instance can be shared across threads.
#[derive(Debug, Default)]
pub struct GateStats {
    success: AtomicUsize,
    failure: AtomicUsize,
    total: AtomicUsize,
}

impl GateStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one check by whether its outcome is allowed.
    pub fn record(&self, outcome: &GateOutcome) {
        if outcome.is_allowed() {
            self.success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failure.fetch_add(1, Ordering::Relaxed);
        }
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> GateStatsSnapshot {
        GateStatsSnapshot {
            success: self.success.load(Ordering::Relaxed),
            failure: self.failure.load(Ordering::Relaxed),
            total: self.total.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.success.store(0, Ordering::Relaxed);
        self.failure.store(0, Ordering::Relaxed);
        self.total.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time copy of [`GateStats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStatsSnapshot {
    /// Checks whose outcome allowed the tool
    pub success: usize,
    /// Checks whose outcome rejected the tool
    pub failure: usize,
    /// All checks
    pub total: usize,
}

impl GateStatsSnapshot {
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failure > 0
    }

    /// Log a summary of the checks
    pub fn log_summary(&self) {
        tracing::info!(
            "Version checks complete: {} passed, {} failed, {} total",
            self.success,
            self.failure,
            self.total
        );
    }
}
