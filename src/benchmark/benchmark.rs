use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, ConstantAcceleration, STANDARD_GRAVITY};
use crate::simulation::integrator::{simulate_with, StageRule};
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;

/// Time raw sample throughput of the stream for both stage rules
pub fn bench_stream() {
    // Different stream lengths to test
    let ns = [10_000, 100_000, 1_000_000];

    for n in ns {
        for rule in [StageRule::Legacy, StageRule::Canonical] {
            let forces = AccelSet::new().with(ConstantAcceleration::gravity());
            let v0 = NVec3::new(60.0, 20.0, 1.0);

            let t0 = Instant::now();
            let last = simulate_with(forces, 0.001, Some(v0), None, rule)
                .take(n)
                .last();
            let dt = t0.elapsed().as_secs_f64();

            // keep the result alive so the loop is not optimized out
            let y = last.map_or(0.0, |s| s.x.y);
            println!("N = {n:8}, {rule:?} = {:8.6} s, final y = {y:.3}", dt);
        }
    }
}

/// Carry error against the vacuum closed form as the step shrinks
pub fn bench_delta_curve() {
    let deltas = [0.1, 0.05, 0.01, 0.005, 0.001, 0.0005];

    // 45 degree launch at 50 m/s lands at v^2 / g
    let speed: f64 = 50.0;
    let la = 45.0_f64.to_radians();
    let v0 = NVec3::new(speed * la.cos(), speed * la.sin(), 0.0);
    let exact = speed * speed / STANDARD_GRAVITY;

    let engine = Engine::default();

    for delta in deltas {
        let params = Parameters { delta, t_end: 60.0 };

        let t0 = Instant::now();
        let flight = match engine.flight(ConstantAcceleration::gravity(), &params, v0, NVec3::zeros()) {
            Ok(flight) => flight,
            Err(e) => {
                println!("delta = {delta:8.5}: {e}");
                continue;
            }
        };
        let dt = t0.elapsed().as_secs_f64();

        let carry = flight.carry().unwrap_or(f64::NAN);
        println!(
            "delta = {delta:8.5}, samples = {:6}, carry error = {:10.3e} m, {:8.6} s",
            flight.samples().len(),
            (carry - exact).abs(),
            dt
        );
    }
}
