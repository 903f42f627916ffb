//! Error types for the simulation
//!
//! Every failure here is a logic or configuration error, never a transient
//! condition, so nothing is retried: errors propagate straight to the
//! caller of the integration entry point

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid construction parameters, caught before any stepping
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Force evaluation at (or numerically at) the origin, where the
    /// inverse-square law is singular. The run halts at the offending
    /// iteration; records already emitted remain valid
    #[error("force evaluation at the origin singularity (r = {r:e})")]
    Singularity { r: f64 },

    /// The state sink failed to accept a record
    #[error("failed to write state record: {0}")]
    Report(#[from] io::Error),
}
