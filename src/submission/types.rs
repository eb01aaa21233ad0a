// Standard library
use std::sync::Arc;

// Project imports
use crate::gate::AdmissionGate;
use crate::metrics::MetricsManager;

// Current module imports
use super::errors::SubmissionError;
use super::traits::{Serializer, Transport};

/// Successful submission, carrying the status code the endpoint answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
}

pub type SubmissionOutcome = Result<SubmissionReceipt, SubmissionError>;

/// Submits documents through a shared [`AdmissionGate`].
pub struct SubmissionService<D> {
    pub(super) gate: Arc<AdmissionGate>,
    pub(super) serializer: Arc<dyn Serializer<D>>,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) metrics: Arc<MetricsManager>,
}
