//! Rate-limited document submission.
//!
//! [`SubmissionService`] couples a [`Serializer`], a [`Transport`] and the
//! shared [`AdmissionGate`](crate::gate::AdmissionGate): a document is encoded
//! first, then a slot is taken, the transport is called, and the slot goes
//! back no matter how the call ended.

pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::{SerializationError, SubmissionError, TransportError};
pub use traits::{Serializer, Transport};
pub use types::{SubmissionOutcome, SubmissionReceipt, SubmissionService};
