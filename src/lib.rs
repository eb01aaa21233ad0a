//! Rate-limited client for the CRPT document-submission API.
//!
//! Outbound submissions go through a shared [`gate::AdmissionGate`] that admits
//! a fixed number of requests per period, whatever the number of concurrent
//! callers.

pub mod documents;
pub mod functions;
pub mod gate;
pub mod metrics;
pub mod providers;
pub mod settings;
pub mod submission;
