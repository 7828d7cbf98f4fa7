//! Core state types for the vortex-particle simulation.
//!
//! - `VortexParticle` - a point vortex shed from the trailing edge
//! - `VortexSystem`   - the creation-ordered particle collection and the current time `t`
//!
//! Positions and velocities use `NVec2` (nalgebra `Vector2<f64>`).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct VortexParticle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, accumulated every step
    gamma: f64, // circulation, fixed at creation
}

impl VortexParticle {
    /// New particle at rest at `x` carrying circulation `gamma`
    pub fn new(x: NVec2, gamma: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            gamma,
        }
    }

    /// Circulation strength. Read-only once the particle exists.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

#[derive(Debug, Clone, Default)]
pub struct VortexSystem {
    pub particles: Vec<VortexParticle>, // every particle ever created, in creation order
    pub t: f64, // elapsed time
}

impl VortexSystem {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// True once any particle carries a non-finite position or velocity
    pub fn has_non_finite(&self) -> bool {
        self.particles
            .iter()
            .any(|p| !(p.x.x.is_finite() && p.x.y.is_finite() && p.v.x.is_finite() && p.v.y.is_finite()))
    }
}
