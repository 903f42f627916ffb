//! Core state types for the central-force simulation.
//!
//! Defines the single persistent entity, [`Particle`], generic over the
//! spatial dimension `D` via nalgebra's statically-sized vectors:
//! - `NVec<D>` with the common aliases `NVec2` (2d) and `NVec3` (3d)
//!
//! The particle carries position and canonical momentum as independent
//! state; velocity and kinetic energy are derived from momentum on demand
//! and never stored.

use nalgebra::SVector;

use crate::simulation::error::SimError;
use crate::simulation::forces::ForceLaw;

pub type NVec<const D: usize> = SVector<f64, D>;
pub type NVec2 = NVec<2>;
pub type NVec3 = NVec<3>;

/// One point mass orbiting a fixed force center at the origin.
///
/// `f`, `v_pot`, and `r` cache the most recent force evaluation: they are
/// valid only immediately after [`Particle::apply_force`] and go stale the
/// instant `x` changes.
#[derive(Debug, Clone)]
pub struct Particle<const D: usize> {
    pub x: NVec<D>, // position relative to the force center
    pub p: NVec<D>, // canonical momentum
    pub f: NVec<D>, // force at the last evaluated position
    pub im: f64,    // inverse mass, > 0
    pub gmm: f64,   // gravitational parameter GMm, > 0
    pub v_pot: f64, // potential energy at the last evaluated position
    pub r: f64,     // distance from origin at the last evaluated position
}

impl<const D: usize> Particle<D> {
    /// Build a particle from velocity-specified initial conditions.
    ///
    /// Seeds the momentum from `v` (p = v / im) and rejects non-positive
    /// or non-finite `im`/`gmm` before any stepping can happen.
    pub fn new(x: NVec<D>, v: NVec<D>, im: f64, gmm: f64) -> Result<Self, SimError> {
        if !im.is_finite() || im <= 0.0 {
            return Err(SimError::Configuration(format!(
                "inverse mass must be positive and finite, got {im}"
            )));
        }
        if !gmm.is_finite() || gmm <= 0.0 {
            return Err(SimError::Configuration(format!(
                "gravitational parameter must be positive and finite, got {gmm}"
            )));
        }
        Ok(Self {
            x,
            p: v / im, // v2p: seed momentum from the velocity initial condition
            f: NVec::zeros(),
            im,
            gmm,
            v_pot: 0.0,
            r: 0.0,
        })
    }

    /// Current velocity, recomputed from momentum (v = p * im).
    pub fn velocity(&self) -> NVec<D> {
        self.p * self.im
    }

    /// Kinetic energy, 0.5 * v . p, recomputed on every call.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity().dot(&self.p)
    }

    /// Evaluate `law` at the current position and refresh the cached
    /// `f`, `v_pot`, and `r` fields.
    pub fn apply_force(&mut self, law: &impl ForceLaw<D>) -> Result<(), SimError> {
        let eval = law.eval(self)?;
        self.f = eval.f;
        self.v_pot = eval.v_pot;
        self.r = eval.r;
        Ok(())
    }
}
