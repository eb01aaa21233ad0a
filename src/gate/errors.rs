// Standard library
use std::time::Duration;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Invalid gate capacity {0}: must be greater than 0")]
    InvalidCapacity(u32),

    #[error("Invalid replenishment period: must be greater than 0")]
    InvalidPeriod,

    #[error("Admission gate is closed")]
    Closed,

    #[error("Timed out after {0:?} waiting for an admission slot")]
    TimedOut(Duration),

    #[error("Wait for an admission slot was cancelled")]
    Cancelled,
}
