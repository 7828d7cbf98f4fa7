use std::time::Instant;

use crate::configuration::config::SweepConfig;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::kernel::{KernelModel, PointVortexKernel, VelocityField};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, VortexParticle, VortexSystem};

/// Helper to build a manual VortexSystem of size `n`
fn make_system(n: usize) -> VortexSystem {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            1.0 + (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
        );
        let gamma = if i % 2 == 0 { 0.87 } else { -0.87 };
        particles.push(VortexParticle::new(x, gamma));
    }

    VortexSystem { particles, t: 0.0 }
}

/// Time one full kernel sweep and one integrator step per sweep order for growing N.
/// Cost per step grows as N^2
pub fn bench_kernel_sweep() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let kernel = PointVortexKernel::new(KernelModel::Smoothed { core_radius: 0.05 });
    let dt = 0.1;

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        if let Err(e) = kernel.sweep(&sys, &mut out) {
            println!("N = {n:5}, sweep failed: {}", e);
            continue;
        }

        // Time kernel sweep
        let t0 = Instant::now();
        let _ = kernel.sweep(&sys, &mut out);
        let dt_sweep = t0.elapsed().as_secs_f64();

        // Time snapshot step
        let mut sys_snap = sys.clone();
        let t1 = Instant::now();
        let _ = euler_integrator(&mut sys_snap, &kernel, dt, SweepConfig::Snapshot, None);
        let dt_snap = t1.elapsed().as_secs_f64();

        // Time interleaved step
        let mut sys_inter = sys.clone();
        let t2 = Instant::now();
        let _ = euler_integrator(&mut sys_inter, &kernel, dt, SweepConfig::Interleaved, None);
        let dt_inter = t2.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, sweep = {:8.6} s, snapshot step = {:8.6} s, interleaved step = {:8.6} s",
            dt_sweep, dt_snap, dt_inter
        );
    }
}

/// Whole runs with the particle count growing from shedding.
/// Paste output directly into a spreadsheet to graph
pub fn bench_run_growth() {
    println!("t_end,particles,steps,ms");

    for t_end in [10.0, 20.0, 40.0, 80.0, 160.0] {
        let params = Parameters {
            t_end,
            ..Parameters::default()
        };
        let engine = Engine {
            freestream_convection: true,
            ..Engine::default()
        };

        let mut scenario = match Scenario::new(engine, params) {
            Ok(s) => s,
            Err(e) => {
                println!("{},error: {}", t_end, e);
                continue;
            }
        };

        let t0 = Instant::now();
        match scenario.run() {
            Ok(report) => {
                let ms = t0.elapsed().as_secs_f64() * 1000.0; // ms total
                println!("{},{},{},{:.3}", t_end, report.particle_count, scenario.steps(), ms);
            }
            Err(e) => println!("{},error: {}", t_end, e),
        }
    }
}
