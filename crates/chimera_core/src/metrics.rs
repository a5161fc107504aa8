//! Performance metrics collection for the engine.
//!
//! Provides structured logging and counters for monitoring batch throughput
//! and prediction cache health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector shared by the batch and interactive paths.
pub struct Metrics {
    tick_count: AtomicU64,
    records_processed: AtomicU64,
    predictions: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    analyses: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// Creates a new metrics collector logging every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            records_processed: AtomicU64::new(0),
            predictions: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            analyses: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed batch tick with its duration.
    pub fn record_tick(&self, duration: Duration, records: usize) {
        self.records_processed
            .fetch_add(records as u64, Ordering::Relaxed);
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;

        if tick % self.log_interval == 0 {
            tracing::info!(
                tick = tick,
                records = records,
                duration_us = duration.as_micros() as u64,
                "Genetics tick"
            );
        }
    }

    /// Records a pair prediction request and whether the cache served it.
    pub fn record_prediction(&self, cache_hit: bool) {
        self.predictions.fetch_add(1, Ordering::Relaxed);
        if cache_hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_analysis(&self) {
        self.analyses.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn records_processed(&self) -> u64 {
        self.records_processed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn predictions(&self) -> u64 {
        self.predictions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn analyses(&self) -> u64 {
        self.analyses.load(Ordering::Relaxed)
    }

    /// Fraction of predictions served from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f32 {
        let hits = self.cache_hits.load(Ordering::Relaxed);
        let misses = self.cache_misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f32 / total as f32
        }
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
