pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;

pub use simulation::states::{Particle, NVec, NVec2, NVec3};
pub use simulation::forces::{ForceLaw, ForceEval, InverseSquare, R_MIN};
pub use simulation::integrator::{leapfrog_step, leapfrog_dynamics};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::error::SimError;

pub use configuration::config::{ScenarioConfig, ParametersConfig, ParticleConfig};

pub use reporting::sink::{StateSink, StateRecord, NoOpSink};
pub use reporting::table::TableWriter;

pub use benchmark::benchmark::bench_leapfrog;
