//! Physical and numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - airfoil section and inflow (`chord`, `alpha`, `vinf`),
//! - fixed step size and end time (`h0`, `t_end`),
//! - fluid properties (`rho`, `nu`),
//! - shedding cadence and the optional particle cap

use crate::simulation::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub chord: f64, // chord length, trailing edge sits at (chord, 0)
    pub alpha: f64, // angle of attack in degrees
    pub vinf: f64, // freestream velocity
    pub h0: f64, // step size
    pub t_end: f64, // time end
    pub rho: f64, // air density
    pub nu: f64, // kinematic viscosity, no formula consumes it
    pub shed_period: f64, // shedding period length
    pub shed_cycle: u32, // shed while floor(t / period) is a multiple of this
    pub max_particles: Option<usize>, // shedding stops at this count
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            chord: 1.0,
            alpha: 5.0,
            vinf: 10.0,
            h0: 0.1,
            t_end: 10.0,
            rho: 1.225,
            nu: 1.48e-5,
            shed_period: 1.0,
            shed_cycle: 10,
            max_particles: None,
        }
    }
}

impl Parameters {
    /// Thin-airfoil lift coefficient, `alpha` in degrees
    pub fn lift_coefficient(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.alpha / 180.0
    }

    /// Circulation given to every shed particle: 0.5 * V_inf * Cl * chord
    pub fn shed_circulation(&self) -> f64 {
        0.5 * self.vinf * self.lift_coefficient() * self.chord
    }

    /// Reject non-physical settings before any particle is created
    pub fn validate(&self) -> Result<(), SimError> {
        let finite = [
            ("chord", self.chord),
            ("alpha", self.alpha),
            ("vinf", self.vinf),
            ("h0", self.h0),
            ("t_end", self.t_end),
            ("rho", self.rho),
            ("nu", self.nu),
            ("shed_period", self.shed_period),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::domain(name, value, "must be finite"));
            }
        }

        if self.chord <= 0.0 {
            return Err(SimError::domain("chord", self.chord, "must be positive"));
        }
        if self.h0 <= 0.0 {
            return Err(SimError::domain("h0", self.h0, "time step must be positive"));
        }
        if self.t_end < 0.0 {
            return Err(SimError::domain("t_end", self.t_end, "end time cannot be negative"));
        }
        if self.rho <= 0.0 {
            return Err(SimError::domain("rho", self.rho, "density must be positive"));
        }
        if self.shed_period <= 0.0 {
            return Err(SimError::domain("shed_period", self.shed_period, "must be positive"));
        }
        if self.shed_cycle == 0 {
            return Err(SimError::domain("shed_cycle", 0.0, "must be at least 1"));
        }
        Ok(())
    }
}
