//! Post-run force integration
//!
//! Splits the final particle set into bound and wake copies by their
//! x position relative to the chord, then sums circulation-weighted
//! terms over the bound set into lift and drag. Nothing here mutates the
//! simulation state.

use std::fmt;

use super::states::{NVec2, VortexParticle, VortexSystem};

/// Read-only copies of the particle set, both in creation order
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub bound: Vec<VortexParticle>, // x <= chord
    pub wake: Vec<VortexParticle>, // x > chord
}

/// `x > chord` goes to the wake, everything else is bound.
/// A NaN position fails the comparison and is therefore bound
pub fn partition(sys: &VortexSystem, chord: f64) -> Partition {
    let (wake, bound): (Vec<VortexParticle>, Vec<VortexParticle>) =
        sys.particles.iter().cloned().partition(|p| p.x.x > chord);
    Partition { bound, wake }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub lift: f64, // N
    pub drag: f64, // N
}

/// lift = rho * sum(gamma * V_inf), drag = rho * sum(gamma * v_y), over `bound`
pub fn integrate_forces(bound: &[VortexParticle], vinf: f64, rho: f64) -> Forces {
    let mut lift = 0.0;
    let mut drag = 0.0;
    for p in bound {
        lift += p.gamma() * vinf;
        drag += p.gamma() * p.v.y;
    }
    Forces {
        lift: lift * rho,
        drag: drag * rho,
    }
}

/// Final output of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub forces: Forces,
    pub wake_positions: Vec<NVec2>, // creation order
    pub bound_count: usize,
    pub particle_count: usize,
    pub t: f64, // time at which the loop stopped
}

impl Report {
    pub fn from_system(sys: &VortexSystem, chord: f64, vinf: f64, rho: f64) -> Self {
        let parts = partition(sys, chord);
        let forces = integrate_forces(&parts.bound, vinf, rho);
        Self {
            forces,
            wake_positions: parts.wake.iter().map(|p| p.x).collect(),
            bound_count: parts.bound.len(),
            particle_count: sys.len(),
            t: sys.t,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lift force: {} N", self.forces.lift)?;
        writeln!(f, "Drag force: {} N", self.forces.drag)?;
        writeln!(f, "Wake particle positions:")?;
        for x in &self.wake_positions {
            writeln!(f, "x = {}, y = {}", x.x, x.y)?;
        }
        Ok(())
    }
}
