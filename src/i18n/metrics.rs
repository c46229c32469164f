//! Lookup metrics for a locale registry.
//!
//! Counts how often lookups were served from registered data and how often
//! they fell back (to the default locale, or to an empty tooltip). Each
//! registry owns its own counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters. Atomic so that read-only lookups can still record.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of `resolve` calls that found the requested code
    resolve_hits: AtomicUsize,

    /// Number of `resolve` calls that fell back to the default record
    resolve_fallbacks: AtomicUsize,

    /// Number of tooltip lookups that found a string
    tooltip_hits: AtomicUsize,

    /// Number of tooltip lookups that returned the empty string
    tooltip_misses: AtomicUsize,
}

impl LookupMetrics {
    /// Create a fresh set of counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolve that found the requested code.
    pub fn record_resolve_hit(&self) {
        self.resolve_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolve that fell back to the default record.
    pub fn record_resolve_fallback(&self) {
        self.resolve_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a tooltip lookup that found a string.
    pub fn record_tooltip_hit(&self) {
        self.tooltip_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a tooltip lookup that returned the empty string.
    pub fn record_tooltip_miss(&self) {
        self.tooltip_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolve_hits(&self) -> usize {
        self.resolve_hits.load(Ordering::Relaxed)
    }

    pub fn resolve_fallbacks(&self) -> usize {
        self.resolve_fallbacks.load(Ordering::Relaxed)
    }

    pub fn tooltip_hits(&self) -> usize {
        self.tooltip_hits.load(Ordering::Relaxed)
    }

    pub fn tooltip_misses(&self) -> usize {
        self.tooltip_misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolve_hits = self.resolve_hits();
        let resolve_fallbacks = self.resolve_fallbacks();
        let tooltip_hits = self.tooltip_hits();
        let tooltip_misses = self.tooltip_misses();

        MetricsReport {
            resolve_hits,
            resolve_fallbacks,
            resolve_hit_rate: percentage(resolve_hits, resolve_hits + resolve_fallbacks),
            tooltip_hits,
            tooltip_misses,
            tooltip_hit_rate: percentage(tooltip_hits, tooltip_hits + tooltip_misses),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.resolve_hits.store(0, Ordering::Relaxed);
        self.resolve_fallbacks.store(0, Ordering::Relaxed);
        self.tooltip_hits.store(0, Ordering::Relaxed);
        self.tooltip_misses.store(0, Ordering::Relaxed);
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Resolves served by the requested code
    pub resolve_hits: usize,

    /// Resolves served by the default record
    pub resolve_fallbacks: usize,

    /// Resolve hit rate as a percentage (0-100)
    pub resolve_hit_rate: f64,

    /// Tooltip lookups that found a string
    pub tooltip_hits: usize,

    /// Tooltip lookups that returned ""
    pub tooltip_misses: usize,

    /// Tooltip hit rate as a percentage (0-100)
    pub tooltip_hit_rate: f64,
}
