//! Fixed-step time integrator for the vortex system
//!
//! Forward Euler on the induced velocity: `v += u dt`, then `x += v dt`.
//! Two sweep orders are provided: the in-place interleaved sweep and a
//! snapshot sweep that reads every particle from the start-of-step state

use super::states::{NVec2, VortexParticle, VortexSystem};
use super::kernel::VelocityField;
use super::error::SimError;
use crate::configuration::config::SweepConfig;

/// Apply one Euler update to a single particle
/// - `drift` is an extra convection velocity for the position update only
#[inline]
fn advance(p: &mut VortexParticle, u: NVec2, dt: f64, drift: Option<NVec2>) {
    p.v += u * dt;
    match drift {
        Some(d) => p.x += (p.v + d) * dt,
        None => p.x += p.v * dt,
    }
}

/// Advance every particle by one step in place.
/// Particle `i` is evaluated and moved before particle `i + 1` is evaluated,
/// so later particles see their predecessors already updated
pub fn interleaved_sweep(sys: &mut VortexSystem, kernel: &dyn VelocityField, dt: f64, drift: Option<NVec2>) -> Result<(), SimError> {
    for i in 0..sys.particles.len() {
        let query = sys.particles[i].x;
        let u = kernel.induced_velocity(query, Some(i), &*sys)?;
        advance(&mut sys.particles[i], u, dt, drift);
    }
    Ok(())
}

/// Advance every particle by one step from a consistent snapshot.
/// All induced velocities are computed first, then all updates are applied
pub fn snapshot_sweep(sys: &mut VortexSystem, kernel: &dyn VelocityField, dt: f64, drift: Option<NVec2>) -> Result<(), SimError> {
    let n = sys.particles.len();
    if n == 0 { // no particles, return
        return Ok(());
    }

    // u[i] holds the velocity induced on particle i by the start-of-step state
    let mut u = vec![NVec2::zeros(); n];
    kernel.sweep(&*sys, &mut u)?;

    for (p, ui) in sys.particles.iter_mut().zip(u.iter()) {
        advance(p, *ui, dt, drift);
    }
    Ok(())
}

/// One integrator step with the selected sweep order. Does not touch `sys.t`
pub fn euler_integrator(sys: &mut VortexSystem, kernel: &dyn VelocityField, dt: f64, sweep: SweepConfig, drift: Option<NVec2>) -> Result<(), SimError> {
    match sweep {
        SweepConfig::Interleaved => interleaved_sweep(sys, kernel, dt, drift),
        SweepConfig::Snapshot => snapshot_sweep(sys, kernel, dt, drift),
    }
}
