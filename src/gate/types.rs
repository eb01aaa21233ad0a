// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use parking_lot::Mutex;
use tokio::sync::{broadcast, Notify};
use tokio::task::JoinHandle;

/// Construction parameters for an [`AdmissionGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Maximum number of admissions per period
    pub capacity: u32,
    /// Time between two replenishments
    pub period: Duration,
}

/// Mutable part of the gate, only touched under `GateShared::state`.
#[derive(Debug)]
pub(super) struct GateState {
    pub(super) available: u32,
    pub(super) closed: bool,
}

/// State shared between the gate handle, its permits and the replenishment task.
#[derive(Debug)]
pub(super) struct GateShared {
    pub(super) capacity: u32,
    pub(super) period: Duration,
    pub(super) state: Mutex<GateState>,
    pub(super) notify: Notify,
}

/// Periodically replenished admission gate.
///
/// Must be created inside a Tokio runtime, the replenishment task is spawned
/// on construction and stops on [`AdmissionGate::shutdown`] or when the gate
/// is dropped.
#[derive(Debug)]
pub struct AdmissionGate {
    pub(super) shared: Arc<GateShared>,
    pub(super) shutdown_tx: broadcast::Sender<()>,
    pub(super) replenisher: Mutex<Option<JoinHandle<()>>>,
}

/// A taken admission slot. The slot goes back to the gate when the permit is
/// dropped.
#[derive(Debug)]
#[must_use = "dropping the permit releases the slot immediately"]
pub struct GatePermit {
    pub(super) shared: Arc<GateShared>,
}
