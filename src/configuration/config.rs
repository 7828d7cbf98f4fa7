//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – numerical model choices (kernel, sweep order, shedding rule)
//! - [`ParametersConfig`] – airfoil, inflow, fluid and time-stepping constants
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty file (or a missing section) runs the
//! built-in case: chord 1 m, 5 degrees, 10 m/s, dt 0.1 s, 10 s.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   kernel: "smoothed"          # "singular", "exclude_self" or "smoothed"
//!   core_radius: 0.05           # only read by "smoothed"
//!   sweep: "snapshot"           # or "interleaved"
//!   shedding: "every_step"      # or "once_per_period"
//!   freestream_convection: false
//!
//! parameters:
//!   chord: 1.0                  # chord length (m)
//!   alpha: 5.0                  # angle of attack (deg)
//!   vinf: 10.0                  # freestream velocity (m/s)
//!   h0: 0.1                     # fixed step size (s)
//!   t_end: 10.0                 # total simulation time (s)
//!   rho: 1.225                  # air density (kg/m^3)
//!   nu: 1.48e-5                 # kinematic viscosity (m^2/s)
//!   shed_period: 1.0
//!   shed_cycle: 10
//!   max_particles: 5000         # optional cap on the particle count
//! ```

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Self-interaction policy of the induced-velocity kernel
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelConfig {
    #[serde(rename = "singular")] // literal point-vortex law, self term included (NaN at r = 0)
    Singular,

    #[serde(rename = "exclude_self")] // skip the querying particle, other coincidences are errors
    ExcludeSelf,

    #[serde(rename = "smoothed")] // vortex blob, r^2 + core_radius^2 in the denominator
    Smoothed,
}

/// Order in which one integrator sweep reads and writes particles
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepConfig {
    #[serde(rename = "interleaved")] // legacy in-place update, later particles see moved neighbours
    Interleaved,

    #[serde(rename = "snapshot")] // all velocities from the start-of-step state, then apply
    Snapshot,
}

/// When the trailing edge emits a new particle
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheddingConfig {
    #[serde(rename = "every_step")] // every step while floor(t / period) % cycle == 0
    EveryStep,

    #[serde(rename = "once_per_period")] // first step of each qualifying period only
    OncePerPeriod,
}

/// Numerical model selection
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub kernel: KernelConfig, // kernel self-interaction policy
    pub core_radius: Option<f64>, // smoothing radius for `smoothed`
    pub sweep: SweepConfig, // integrator sweep order
    pub shedding: SheddingConfig, // shedding trigger rule
    pub freestream_convection: bool, // carry particles with V_inf as well as their induced velocity
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kernel: KernelConfig::Smoothed,
            core_radius: None,
            sweep: SweepConfig::Snapshot,
            shedding: SheddingConfig::EveryStep,
            freestream_convection: false,
        }
    }
}

impl EngineConfig {
    /// Literal reference behaviour: singular kernel, in-place sweep, literal shedding
    pub fn legacy() -> Self {
        Self {
            kernel: KernelConfig::Singular,
            core_radius: None,
            sweep: SweepConfig::Interleaved,
            shedding: SheddingConfig::EveryStep,
            freestream_convection: false,
        }
    }
}

/// Physical and numerical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub chord: f64,
    pub alpha: f64, // degrees
    pub vinf: f64,
    pub h0: f64, // time step size
    pub t_end: f64, // time end
    pub rho: f64,
    pub nu: f64, // carried for reporting only
    pub shed_period: f64,
    pub shed_cycle: u32,
    pub max_particles: Option<usize>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            chord: p.chord,
            alpha: p.alpha,
            vinf: p.vinf,
            h0: p.h0,
            t_end: p.t_end,
            rho: p.rho,
            nu: p.nu,
            shed_period: p.shed_period,
            shed_cycle: p.shed_cycle,
            max_particles: p.max_particles,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // model choices
    pub parameters: ParametersConfig, // constants
}
