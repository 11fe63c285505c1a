//! Basic metrics instrumentation for the form server.
//!
//! Provides counters and duration tracking for HTTP requests and validation passes.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by every connection.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests served
    requests_total: Arc<AtomicU64>,

    /// Total number of non-2xx responses
    errors_total: Arc<AtomicU64>,

    /// Total duration of all requests in milliseconds
    request_duration_total_ms: Arc<AtomicU64>,

    /// Number of validation passes run
    submissions_total: Arc<AtomicU64>,

    /// Number of fields that failed validation
    rejected_fields_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            errors_total: Arc::new(AtomicU64::new(0)),
            request_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_total: Arc::new(AtomicU64::new(0)),
            rejected_fields_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a served request with its duration.
    pub fn record_request(&self, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.request_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a non-2xx response.
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one validation pass and how many fields it rejected.
    pub fn record_submission(&self, rejected_fields: usize) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
        self.rejected_fields_total
            .fetch_add(rejected_fields as u64, Ordering::Relaxed);
    }

    /// Get total requests.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Get total non-2xx responses.
    pub fn errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    /// Get total request duration in milliseconds.
    pub fn request_duration_total_ms(&self) -> u64 {
        self.request_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average request duration in milliseconds.
    pub fn request_duration_avg_ms(&self) -> f64 {
        let total = self.request_duration_total_ms.load(Ordering::Relaxed);
        let count = self.requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total validation passes.
    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    /// Get total rejected fields.
    pub fn rejected_fields_total(&self) -> u64 {
        self.rejected_fields_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total(),
            errors_total: self.errors_total(),
            request_duration_total_ms: self.request_duration_total_ms(),
            request_duration_avg_ms: self.request_duration_avg_ms(),
            submissions_total: self.submissions_total(),
            rejected_fields_total: self.rejected_fields_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub errors_total: u64,
    pub request_duration_total_ms: u64,
    pub request_duration_avg_ms: f64,
    pub submissions_total: u64,
    pub rejected_fields_total: u64,
}

/// Helper for timing a request.
pub struct RequestTimer {
    start: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    /// Start timing a request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Time elapsed since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_request(self.start.elapsed());
        self.metrics.record_error();
    }
}
