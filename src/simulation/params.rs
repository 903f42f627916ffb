//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - total step count,
//! - reporting cadence

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,           // fixed step size (negative integrates backward)
    pub n_steps: u64,      // number of leapfrog steps
    pub report_every: u64, // emit a record every this many steps, 0 = never
}
