//! Fixed-step leapfrog (Störmer–Verlet) integrator
//!
//! Provides the single-step primitive [`leapfrog_step`] and the N-step
//! driver [`leapfrog_dynamics`], both driven by a [`ForceLaw`] and
//! `Parameters`. One force evaluation per step, at the half-stepped
//! position — the staggering that makes the scheme symplectic and keeps
//! the long-term energy error bounded instead of drifting

use crate::simulation::error::SimError;
use crate::simulation::forces::ForceLaw;
use crate::simulation::params::Parameters;
use crate::simulation::states::Particle;
use crate::reporting::sink::{StateRecord, StateSink};

/// Advance the particle by one step of size `dt`, updating position,
/// momentum, and the clock `t` in place.
///
/// The update order is load-bearing: drift half, refresh the force at the
/// half-stepped position, kick full, drift half. The clock advances by
/// `dt/2` twice so that the force evaluation sits at the step's midpoint
/// in time as well as in position.
pub fn leapfrog_step<const D: usize>(
    a: &mut Particle<D>,
    law: &impl ForceLaw<D>,
    dt: f64,
    t: &mut f64,
) -> Result<(), SimError> {
    let half_dt = 0.5 * dt; // half step dt/2

    // Drift: x_half = x_n + (dt/2) * p_n * im
    a.x += (half_dt * a.im) * a.p;

    // advance half time (t_n + dt/2)
    *t += half_dt;

    // Refresh the force at x_half. Reusing a stale force here would break
    // the symplectic property
    a.apply_force(law)?;

    // Kick: p_n+1 = p_n + dt * F(x_half)
    a.p += dt * a.f;

    // Second drift: x_n+1 = x_half + (dt/2) * p_n+1 * im
    a.x += (half_dt * a.im) * a.p;

    // finish advancing time: t_n+1 = t_n + dt
    *t += half_dt;

    Ok(())
}

/// Advance the particle through `params.n_steps` steps of size
/// `params.dt`, emitting a state record to `sink` every
/// `params.report_every` iterations (0 disables reporting).
///
/// Records describe the state as of the *start* of their iteration, before
/// that iteration's drift, so the first record (cadence permitting) is the
/// initial condition at `t`. On a singularity the run halts at the
/// offending iteration; records already emitted stand.
pub fn leapfrog_dynamics<const D: usize>(
    a: &mut Particle<D>,
    law: &impl ForceLaw<D>,
    params: &Parameters,
    t: &mut f64,
    sink: &mut impl StateSink<D>,
) -> Result<(), SimError> {
    for i in 0..params.n_steps {
        if params.report_every > 0 && i % params.report_every == 0 {
            // this iteration we report: refresh V and r at the current
            // (pre-step) position, derive velocity and kinetic energy
            a.apply_force(law)?;
            sink.emit(&StateRecord {
                t: *t,
                x: a.x,
                v: a.velocity(),
                kinetic: a.kinetic_energy(),
                potential: a.v_pot,
            })?;
        }
        leapfrog_step(a, law, params.dt, t)?;
    }
    Ok(())
}
