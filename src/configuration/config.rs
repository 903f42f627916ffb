//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters (step size, step count, cadence)
//! - [`ParticleConfig`]   – initial state for the particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types (a near-circular orbit):
//!
//! ```yaml
//! parameters:
//!   dt: 0.001             # fixed step size
//!   n_steps: 500000       # number of leapfrog steps
//!   report_every: 5       # emit a record every 5 steps (0 disables)
//!
//! particle:
//!   x: [ 9.0, 0.0 ]       # initial position relative to the force center
//!   v: [ 0.0, 0.33333333333333333 ]
//!   inverse_mass: 1.0     # 1/m, must be > 0
//!   gmm: 1.0              # gravitational parameter GMm, must be > 0
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! representation via `Scenario::build_scenario`, which is also where all
//! validation happens.

use serde::Deserialize;

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,           // time step size
    pub n_steps: u64,      // number of steps to take
    pub report_every: u64, // reporting cadence, 0 disables reporting
}

/// Configuration for the particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: Vec<f64>,       // initial position vector in simulation units
    pub v: Vec<f64>,       // initial velocity vector in simulation units per time unit
    pub inverse_mass: f64, // reciprocal of the particle's mass
    pub gmm: f64,          // gravitational parameter GMm of this particle
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // numerical parameters
    pub particle: ParticleConfig,     // initial state of the particle
}
