//! Translation lookup observability.
//!
//! Counters for catalog resolution outcomes. Observability only: the
//! resolution logic never consults these.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups resolved from the catalog
    hits: AtomicUsize,

    /// Lookups for keys absent from the catalog entirely
    unknown_keys: AtomicUsize,

    /// Lookups where the key exists but the active locale has no text
    locale_gaps: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            hits: AtomicUsize::new(0),
            unknown_keys: AtomicUsize::new(0),
            locale_gaps: AtomicUsize::new(0),
        })
    }

    /// Record a lookup resolved from the catalog.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for a key the catalog doesn't contain.
    pub fn record_unknown_key(&self) {
        self.unknown_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that found the key but not the active locale.
    pub fn record_locale_gap(&self) {
        self.locale_gaps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn unknown_keys(&self) -> usize {
        self.unknown_keys.load(Ordering::Relaxed)
    }

    pub fn locale_gaps(&self) -> usize {
        self.locale_gaps.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let unknown_keys = self.unknown_keys();
        let locale_gaps = self.locale_gaps();

        let total = hits + unknown_keys + locale_gaps;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            unknown_keys,
            locale_gaps,
            hit_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.unknown_keys.store(0, Ordering::Relaxed);
        self.locale_gaps.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub unknown_keys: usize,
    pub locale_gaps: usize,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_counters_accumulate() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        metrics.record_hit();
        metrics.record_hit();
        metrics.record_unknown_key();
        metrics.record_locale_gap();

        assert_eq!(metrics.hits(), 2);
        assert_eq!(metrics.unknown_keys(), 1);
        assert_eq!(metrics.locale_gaps(), 1);
    }

    #[test]
    #[serial]
    fn test_report_hit_rate() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_unknown_key();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.unknown_keys, 1);
        assert!((report.hit_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_report_with_no_lookups() {
        let metrics = TranslationMetrics::global();
        metrics.reset();

        let report = metrics.report();
        assert_eq!(report.hits, 0);
        assert_eq!(report.hit_rate, 0.0);
    }
}
