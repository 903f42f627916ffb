//! Force laws for the central-force engine
//!
//! Defines the [`ForceLaw`] trait and the inverse-square attractive law
//! used for the planet-around-a-fixed-sun problem

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec, Particle};

/// Radii at or below this are treated as the origin singularity
pub const R_MIN: f64 = 1e-12;

/// Result of evaluating a force law at one position:
/// force vector, potential energy, and distance from the origin
#[derive(Debug, Clone)]
pub struct ForceEval<const D: usize> {
    pub f: NVec<D>,
    pub v_pot: f64,
    pub r: f64,
}

/// Trait for force sources acting on a single [`Particle`]
/// Implementations are pure functions of the particle's position and its
/// coupling constants; no hidden state
pub trait ForceLaw<const D: usize> {
    fn eval(&self, a: &Particle<D>) -> Result<ForceEval<D>, SimError>;
}

/// Central inverse-square attraction toward a fixed mass at the origin
///
/// F_i = -GMm * x_i / r^3, V = -GMm / r, with GMm read from the particle
/// There is no softening: the origin is a genuine domain boundary, so a
/// position within [`R_MIN`] of it is a [`SimError::Singularity`] rather
/// than a smoothed-over close encounter
pub struct InverseSquare;

impl<const D: usize> ForceLaw<D> for InverseSquare {
    fn eval(&self, a: &Particle<D>) -> Result<ForceEval<D>, SimError> {
        // Squared distance from the force center |x|^2
        let r2 = a.x.dot(&a.x);
        let r = r2.sqrt();
        if r <= R_MIN {
            return Err(SimError::Singularity { r });
        }

        // coef = -GMm / r^3, written as -GMm / (r * r^2)
        let coef = -a.gmm / (r * r2);

        Ok(ForceEval {
            f: coef * a.x,
            v_pot: -a.gmm / r,
            r,
        })
    }
}
