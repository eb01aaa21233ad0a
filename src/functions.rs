// Standard library
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use futures::{stream::FuturesUnordered, StreamExt};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{error, info, warn};

// Project imports
use crate::documents::{DocumentError, ProductDocument};
use crate::gate::{AdmissionGate, GateConfig};
use crate::metrics::{MetricsManager, SubmissionMetrics};
use crate::providers::{HttpTransport, JsonSerializer};
use crate::settings::Settings;
use crate::submission::{Serializer, SubmissionOutcome, SubmissionService, Transport};

/// Main application flow.
///
/// This function:
/// - Builds the admission gate from the configured rate limit
/// - Loads the document to submit
/// - Submits the configured number of copies concurrently
/// - Stops waiting submissions when the shutdown signal fires
/// - Shuts the gate down and reports the totals
pub async fn run(
    settings: &Settings,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<SubmissionMetrics, Box<dyn Error>> {
    let gate_config: GateConfig = settings.rate_limit.gate_config();
    let gate = Arc::new(AdmissionGate::new(gate_config)?);
    info!(
        "🕰️ Admitting up to {} documents every {:?}",
        gate.capacity(),
        gate.period()
    );

    let serializer: Arc<dyn Serializer<ProductDocument>> = Arc::new(JsonSerializer);
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
        &settings.api.url,
        Duration::from_secs(settings.api.timeout_secs),
    )?);
    let metrics = Arc::new(MetricsManager::new());

    let service = SubmissionService::new(
        Arc::clone(&gate),
        Arc::clone(&serializer),
        transport,
        Arc::clone(&metrics),
    );

    let document = load_document(
        settings.submission.document_path.as_deref(),
        serializer.as_ref(),
    )?;

    submit_copies(
        &service,
        &document,
        &settings.submission.signature,
        settings.submission.copies,
        &mut shutdown_rx,
    )
    .await;

    gate.shutdown().await;

    let snapshot = metrics.get_snapshot().await;
    info!(
        successes = snapshot.successes,
        failures = snapshot.failures(),
        "Submission run finished"
    );

    Ok(snapshot)
}

/// Reads the configured document, or falls back to an empty one.
fn load_document(
    path: Option<&Path>,
    serializer: &dyn Serializer<ProductDocument>,
) -> Result<ProductDocument, DocumentError> {
    match path {
        Some(path) => {
            info!("📄 Loading document from {:?}", path);
            ProductDocument::from_file(path, serializer)
        }
        None => {
            info!("📄 No document path configured, submitting an empty document");
            Ok(ProductDocument::default())
        }
    }
}

/// Submits `copies` copies of `document` concurrently, logging each outcome.
///
/// Every copy listens on its own subscription to `shutdown_rx`, so a shutdown
/// signal abandons the copies that are still waiting or in flight. A signal
/// already queued on `shutdown_rx` cancels every copy without sending any.
pub async fn submit_copies<D>(
    service: &SubmissionService<D>,
    document: &D,
    signature: &str,
    copies: u32,
    shutdown_rx: &mut broadcast::Receiver<()>,
) -> Vec<SubmissionOutcome> {
    // Subscriptions only see later signals, so take them before looking at
    // what is already queued on the original receiver.
    let receivers: Vec<broadcast::Receiver<()>> =
        (0..copies).map(|_| shutdown_rx.resubscribe()).collect();
    let shutdown_pending = matches!(
        shutdown_rx.try_recv(),
        Ok(()) | Err(TryRecvError::Lagged(_))
    );
    if shutdown_pending {
        warn!("Shutdown requested before submitting, cancelling {} copies", copies);
    }

    // Create a FuturesUnordered to hold our concurrent submissions.
    let mut futures = FuturesUnordered::new();

    for (copy, mut cancel) in (1..=copies).zip(receivers) {
        futures.push(async move {
            let outcome = if shutdown_pending {
                service.abandon().await
            } else {
                service
                    .submit_or_cancel(document, signature, &mut cancel)
                    .await
            };
            (copy, outcome)
        });
    }

    // Collect all results, processing them as they complete.
    let mut outcomes: Vec<SubmissionOutcome> = Vec::with_capacity(copies as usize);
    while let Some((copy, outcome)) = futures.next().await {
        match &outcome {
            Ok(receipt) => {
                info!(copy, status = receipt.status, "✅ Document submitted");
            }
            Err(e) => {
                error!(copy, "Document submission failed: {}", e);
            }
        }
        outcomes.push(outcome);
    }

    outcomes
}
