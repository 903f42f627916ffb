//! State sink trait for observing simulation progress.
//!
//! The integrator emits [`StateRecord`]s through a [`StateSink`] at its
//! configured cadence; what happens to them (stdout table, buffer, nothing)
//! is the sink's concern, not the integrator's.

use crate::simulation::error::SimError;
use crate::simulation::states::NVec;

/// One reported snapshot of the particle, as of the start of a step.
#[derive(Debug, Clone)]
pub struct StateRecord<const D: usize> {
    pub t: f64,         // simulation clock at the start of the step
    pub x: NVec<D>,     // position
    pub v: NVec<D>,     // velocity, derived from momentum
    pub kinetic: f64,   // kinetic energy T
    pub potential: f64, // potential energy V
}

impl<const D: usize> StateRecord<D> {
    /// Total mechanical energy T + V. Bounded oscillation of this value
    /// over a long run is the scheme's correctness witness.
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Trait for consumers of state records.
///
/// Implement this to monitor a run (plotting output, diagnostics, test
/// capture). Sinks may fail; failures surface as [`SimError::Report`] and
/// halt the run.
pub trait StateSink<const D: usize> {
    fn emit(&mut self, rec: &StateRecord<D>) -> Result<(), SimError>;
}

/// A sink that discards every record. Use for headless runs.
pub struct NoOpSink;

impl<const D: usize> StateSink<D> for NoOpSink {
    fn emit(&mut self, _rec: &StateRecord<D>) -> Result<(), SimError> {
        Ok(())
    }
}
