//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - the particle at t = 0 (`Particle<2>`)
//! - the active force law (`InverseSquare`)
//!
//! All configuration validation happens here, before any stepping: invalid
//! parameters fail fast with `SimError::Configuration`, never get clamped

use crate::configuration::config::ScenarioConfig;
use crate::reporting::sink::StateSink;
use crate::simulation::error::SimError;
use crate::simulation::forces::InverseSquare;
use crate::simulation::integrator::leapfrog_dynamics;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

/// A fully-initialized 2D scenario: parameters, particle state at t = 0,
/// and the force law, ready to run
pub struct Scenario {
    pub parameters: Parameters,
    pub particle: Particle<2>,
    pub force: InverseSquare,
    pub t: f64, // simulation clock
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        if !p_cfg.dt.is_finite() || p_cfg.dt == 0.0 {
            return Err(SimError::Configuration(format!(
                "step size must be finite and non-zero, got {}",
                p_cfg.dt
            )));
        }

        // Particle: map ParticleConfig -> runtime Particle using nalgebra
        // vectors; the binary's scenario format is 2D
        let a_cfg = &cfg.particle;
        if a_cfg.x.len() != 2 || a_cfg.v.len() != 2 {
            return Err(SimError::Configuration(format!(
                "expected 2 components for x and v, got {} and {}",
                a_cfg.x.len(),
                a_cfg.v.len()
            )));
        }
        let particle = Particle::new(
            NVec2::new(a_cfg.x[0], a_cfg.x[1]),
            NVec2::new(a_cfg.v[0], a_cfg.v[1]),
            a_cfg.inverse_mass,
            a_cfg.gmm,
        )?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            dt: p_cfg.dt,
            n_steps: p_cfg.n_steps,
            report_every: p_cfg.report_every,
        };

        Ok(Self {
            parameters,
            particle,
            force: InverseSquare,
            t: 0.0,
        })
    }

    /// Run the scenario to completion, emitting records to `sink`
    pub fn run(&mut self, sink: &mut impl StateSink<2>) -> Result<(), SimError> {
        leapfrog_dynamics(
            &mut self.particle,
            &self.force,
            &self.parameters,
            &mut self.t,
            sink,
        )
    }
}
