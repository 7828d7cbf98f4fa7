//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - physical and numerical parameters (`Parameters`)
//! - system state (`VortexSystem` with the seed particle at t = 0)
//! - the induced-velocity kernel and the trailing-edge shedder
//!
//! The scenario drives the time loop. It is also a Bevy `Resource` so the
//! viewer can step it once per frame.

use bevy::prelude::Resource;
use log::{debug, info, warn};

use crate::configuration::config::{ParametersConfig, ScenarioConfig};
use crate::simulation::aggregate::Report;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::kernel::PointVortexKernel;
use crate::simulation::params::Parameters;
use crate::simulation::shedding::Shedder;
use crate::simulation::states::{NVec2, VortexSystem};

/// Runtime bundle for one airfoil-section run
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: VortexSystem,
    pub kernel: PointVortexKernel,
    pub shedder: Shedder,
    steps: u64,
    nan_reported: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let engine = Engine::from_config(&cfg.engine)?;
        let parameters = parameters_from_config(cfg.parameters);
        Self::new(engine, parameters)
    }

    /// Validate `parameters` and place the seed particle at the trailing edge
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;

        let shedder = Shedder::new(&parameters, engine.shedding);

        // Initial system state: seed particle at t = 0
        let system = VortexSystem {
            particles: vec![shedder.particle()],
            t: 0.0,
        };

        info!(
            "scenario: chord = {} m, alpha = {} deg, V_inf = {} m/s, Cl = {:.5}, gamma = {:.6}",
            parameters.chord,
            parameters.alpha,
            parameters.vinf,
            parameters.lift_coefficient(),
            shedder.gamma()
        );
        info!(
            "engine: kernel = {:?}, sweep = {:?}, shedding = {:?}, convection = {}",
            engine.kernel, engine.sweep, engine.shedding, engine.freestream_convection
        );
        debug!("kinematic viscosity nu = {} is carried but not used by any formula", parameters.nu);

        Ok(Self {
            kernel: PointVortexKernel::new(engine.kernel),
            engine,
            parameters,
            system,
            shedder,
            steps: 0,
            nan_reported: false,
        })
    }

    /// True while the accumulated time is still below `t_end`
    pub fn is_running(&self) -> bool {
        self.system.t < self.parameters.t_end
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// One loop iteration: integrator sweep, shedding check at the step's
    /// start time, then `t += dt`. Returns false once the run has finished
    pub fn step(&mut self) -> Result<bool, SimError> {
        if !self.is_running() {
            return Ok(false);
        }

        let dt = self.parameters.h0;
        let drift = self
            .engine
            .freestream_convection
            .then(|| NVec2::new(self.parameters.vinf, 0.0));

        euler_integrator(&mut self.system, &self.kernel, dt, self.engine.sweep, drift)?;

        if !self.nan_reported && self.system.has_non_finite() {
            warn!("non-finite particle state at t = {:.3} (kernel {:?})", self.system.t, self.engine.kernel);
            self.nan_reported = true;
        }

        self.shedder.shed(&mut self.system);

        self.system.t += dt;
        self.steps += 1;
        Ok(true)
    }

    /// Run the loop to completion and aggregate the result
    pub fn run(&mut self) -> Result<Report, SimError> {
        while self.step()? {}

        let report = self.report();
        info!(
            "finished after {} steps at t = {:.3}: {} particles, {} bound, {} in wake",
            self.steps,
            report.t,
            report.particle_count,
            report.bound_count,
            report.wake_positions.len()
        );
        Ok(report)
    }

    /// Partition and integrate forces for the current state
    pub fn report(&self) -> Report {
        let p = &self.parameters;
        Report::from_system(&self.system, p.chord, p.vinf, p.rho)
    }
}

fn parameters_from_config(p_cfg: ParametersConfig) -> Parameters {
    Parameters {
        chord: p_cfg.chord,
        alpha: p_cfg.alpha,
        vinf: p_cfg.vinf,
        h0: p_cfg.h0,
        t_end: p_cfg.t_end,
        rho: p_cfg.rho,
        nu: p_cfg.nu,
        shed_period: p_cfg.shed_period,
        shed_cycle: p_cfg.shed_cycle,
        max_particles: p_cfg.max_particles,
    }
}
