// Standard library
use std::sync::Arc;

// 3rd party crates
use tokio::sync::broadcast;
use tracing::{debug, warn};

// Project imports
use crate::gate::AdmissionGate;
use crate::metrics::MetricsManager;

// Current module imports
use super::errors::SubmissionError;
use super::traits::{Serializer, Transport};
use super::types::{SubmissionOutcome, SubmissionReceipt, SubmissionService};

impl<D> SubmissionService<D> {
    pub fn new(
        gate: Arc<AdmissionGate>,
        serializer: Arc<dyn Serializer<D>>,
        transport: Arc<dyn Transport>,
        metrics: Arc<MetricsManager>,
    ) -> Self {
        Self {
            gate,
            serializer,
            transport,
            metrics,
        }
    }

    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }

    /// Submits one document.
    ///
    /// The document is encoded before a slot is taken, so an encoding failure
    /// costs nothing. Once taken, the slot is held by a permit for the length
    /// of the transport call and released on every path out of it, including
    /// this future being dropped.
    pub async fn submit(&self, document: &D, signature: &str) -> SubmissionOutcome {
        let payload = match self.serializer.encode(document) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Document serialization failed");
                self.metrics.record_serialization_failure().await;
                return Err(e.into());
            }
        };

        let permit = match self.gate.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                warn!(error = %e, "Document not admitted");
                self.metrics.record_gate_failure().await;
                return Err(e.into());
            }
        };

        debug!(bytes = payload.len(), "Sending document");
        let result = self.transport.send(payload, signature).await;
        drop(permit);

        match result {
            Ok(status) if (200..300).contains(&status) => {
                debug!(status, "Document accepted");
                self.metrics.record_success(status).await;
                Ok(SubmissionReceipt { status })
            }
            Ok(status) => {
                warn!(status, "Document rejected by the API");
                self.metrics.record_rejection(status).await;
                Err(SubmissionError::Rejected { status })
            }
            Err(e) => {
                warn!(error = %e, "Document transport failed");
                self.metrics.record_transport_failure().await;
                Err(e.into())
            }
        }
    }

    /// Like [`submit`](Self::submit), abandoning the submission when `cancel`
    /// fires, whether it is still waiting for a slot or already in flight.
    pub async fn submit_or_cancel(
        &self,
        document: &D,
        signature: &str,
        cancel: &mut broadcast::Receiver<()>,
    ) -> SubmissionOutcome {
        tokio::select! {
            biased;

            outcome = self.submit(document, signature) => outcome,

            Ok(_) = cancel.recv() => self.abandon().await,
        }
    }

    /// Records a submission that was cancelled before it could finish.
    pub async fn abandon(&self) -> SubmissionOutcome {
        debug!("Submission cancelled");
        self.metrics.record_cancellation().await;
        Err(SubmissionError::Cancelled)
    }
}
