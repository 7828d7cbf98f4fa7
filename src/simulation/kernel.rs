//! Induced-velocity kernel for the vortex-particle engine
//!
//! Defines the [`VelocityField`] trait and the 2D point-vortex
//! (Biot–Savart) kernel with a selectable self-interaction policy

use std::f64::consts::PI;

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec2, VortexSystem};

const TWO_PI: f64 = 2.0 * PI;

/// How the kernel treats zero separation between a query point and a vortex
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelModel {
    /// Literal law over every particle, self term included.
    /// r^2 = 0 yields inf/NaN with no error.
    Singular,
    /// The querying particle is left out of its own sum.
    /// Any other zero separation is reported as [`SimError::NumericalSingularity`].
    ExcludeSelf,
    /// Vortex blob: r^2 + core_radius^2 in the denominator, so the self term is exactly zero.
    Smoothed { core_radius: f64 },
}

/// Velocity sources operating on a [`VortexSystem`]
pub trait VelocityField {
    /// Velocity induced at `query` by every particle in `sys`
    /// - `owner` is the index of the particle sitting at `query`, if any
    fn induced_velocity(&self, query: NVec2, owner: Option<usize>, sys: &VortexSystem) -> Result<NVec2, SimError>;

    /// Fill `out[i]` with the velocity induced on particle `i`, all read from the current state
    fn sweep(&self, sys: &VortexSystem, out: &mut [NVec2]) -> Result<(), SimError> {
        for (i, p) in sys.particles.iter().enumerate() {
            out[i] = self.induced_velocity(p.x, Some(i), sys)?;
        }
        Ok(())
    }
}

/// 2D point-vortex kernel
/// u = sum_p gamma_p / (2 pi r^2) * (-dy, dx), with (dx, dy) = query - x_p
/// No cutoff radius: O(N) per query, O(N^2) per sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVortexKernel {
    pub model: KernelModel,
}

impl PointVortexKernel {
    pub fn new(model: KernelModel) -> Self {
        Self { model }
    }
}

impl VelocityField for PointVortexKernel {
    fn induced_velocity(&self, query: NVec2, owner: Option<usize>, sys: &VortexSystem) -> Result<NVec2, SimError> {
        let mut u = 0.0;
        let mut v = 0.0;

        // squared core radius added to every denominator (zero unless smoothed)
        let core2 = match self.model {
            KernelModel::Smoothed { core_radius } => core_radius * core_radius,
            _ => 0.0,
        };
        let checked = !matches!(self.model, KernelModel::Singular);

        for (j, p) in sys.particles.iter().enumerate() {
            if self.model == KernelModel::ExcludeSelf && owner == Some(j) {
                continue;
            }
            let gamma = p.gamma();
            // a zero-strength vortex contributes nothing and cannot be singular
            if checked && gamma == 0.0 {
                continue;
            }

            let dx = query.x - p.x.x;
            let dy = query.y - p.x.y;
            let r2 = if checked && core2 > 0.0 {
                dx * dx + dy * dy + core2
            } else {
                dx * dx + dy * dy
            };

            if checked && r2 == 0.0 {
                return Err(SimError::NumericalSingularity {
                    query,
                    source: j,
                    t: sys.t,
                });
            }

            let factor = gamma / (TWO_PI * r2);
            u += factor * (-dy);
            v += factor * dx;
        }

        Ok(NVec2::new(u, v))
    }
}
