use std::time::Instant;

use crate::reporting::sink::NoOpSink;
use crate::simulation::forces::InverseSquare;
use crate::simulation::integrator::leapfrog_dynamics;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};

/// Wall-clock timing of the leapfrog loop over increasing step counts.
/// Deterministic initial conditions (the near-circular reference orbit),
/// no reporting, so this times the hot loop alone.
pub fn bench_leapfrog() {
    // Different run lengths to test
    let ns: [u64; 5] = [10_000, 50_000, 100_000, 500_000, 1_000_000];

    for n in ns {
        let mut a = Particle::new(
            NVec2::new(9.0, 0.0),
            NVec2::new(0.0, 1.0 / 3.0),
            1.0,
            1.0,
        )
        .expect("reference orbit parameters are valid");

        let parameters = Parameters {
            dt: 0.001,
            n_steps: n,
            report_every: 0,
        };

        let mut t = 0.0;
        let mut sink = NoOpSink;

        // Warm up with a short run on a clone
        let mut warm = a.clone();
        let mut t_warm = 0.0;
        let warm_params = Parameters {
            n_steps: 1_000,
            ..parameters.clone()
        };
        leapfrog_dynamics(&mut warm, &InverseSquare, &warm_params, &mut t_warm, &mut sink)
            .expect("warmup run failed");

        // Time the full run
        let t0 = Instant::now();
        leapfrog_dynamics(&mut a, &InverseSquare, &parameters, &mut t, &mut sink)
            .expect("benchmark run failed");
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, total = {elapsed:8.6} s, per step = {:.3e} s",
            elapsed / n as f64
        );
    }
}
