// Standard library
use std::sync::Arc;
use std::time::Instant;

// 3rd party crates
use tokio::sync::RwLock;

/// Counters for document submissions
#[derive(Debug, Default, Clone)]
pub struct SubmissionMetrics {
    /// Total number of submissions that reached an outcome
    pub attempts: u64,
    /// Submissions answered with a 2xx status
    pub successes: u64,
    /// Submissions answered with a non-2xx status
    pub rejections: u64,
    /// Submissions whose transport call failed
    pub transport_failures: u64,
    /// Documents that could not be encoded
    pub serialization_failures: u64,
    /// Submissions refused by a closed gate
    pub gate_failures: u64,
    /// Submissions abandoned by the caller
    pub cancellations: u64,
    /// Status code of the most recent answered submission
    pub last_status: Option<u16>,
    /// Last successful submission time
    pub last_success: Option<Instant>,
    /// Last failure time
    pub last_failure: Option<Instant>,
}

impl SubmissionMetrics {
    pub fn failures(&self) -> u64 {
        self.rejections
            + self.transport_failures
            + self.serialization_failures
            + self.gate_failures
            + self.cancellations
    }
}

/// Thread-safe metrics manager
#[derive(Debug, Default)]
pub struct MetricsManager {
    metrics: Arc<RwLock<SubmissionMetrics>>,
}

impl MetricsManager {
    /// Creates a new MetricsManager
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(SubmissionMetrics::default())),
        }
    }

    /// Records an accepted submission
    pub async fn record_success(&self, status: u16) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.successes += 1;
        metrics.last_status = Some(status);
        metrics.last_success = Some(Instant::now());
    }

    /// Records a submission the endpoint answered with a non-success status
    pub async fn record_rejection(&self, status: u16) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.rejections += 1;
        metrics.last_status = Some(status);
        metrics.last_failure = Some(Instant::now());
    }

    pub async fn record_transport_failure(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.transport_failures += 1;
        metrics.last_failure = Some(Instant::now());
    }

    pub async fn record_serialization_failure(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.serialization_failures += 1;
        metrics.last_failure = Some(Instant::now());
    }

    pub async fn record_gate_failure(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.gate_failures += 1;
        metrics.last_failure = Some(Instant::now());
    }

    pub async fn record_cancellation(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.attempts += 1;
        metrics.cancellations += 1;
    }

    /// Gets a snapshot of the current metrics
    pub async fn get_snapshot(&self) -> SubmissionMetrics {
        (*self.metrics.read().await).clone()
    }
}
