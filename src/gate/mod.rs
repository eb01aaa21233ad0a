//! Admission Gate Module
//!
//! A bounded pool of admission slots shared by every caller that talks to the
//! document API. Callers take a slot before sending a request and give it back
//! afterwards. A background task resets the pool to full capacity at the start
//! of every period, so at most `capacity` requests are admitted in a burst at
//! each period boundary.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use crpt_client::gate::{AdmissionGate, GateConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gate = AdmissionGate::new(GateConfig::new(10, Duration::from_secs(1)))?;
//!
//! let permit = gate.acquire().await?;
//! // ... perform the request ...
//! drop(permit);
//!
//! gate.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod impls;
pub mod types;

pub use errors::GateError;
pub use types::{AdmissionGate, GateConfig, GatePermit};
