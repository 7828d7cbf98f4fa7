//! Trailing-edge shedding policy
//!
//! Once per step the shedder looks at the elapsed time, takes
//! `k = floor(t / period)` and emits a particle at `(chord, 0)` when
//! `k % cycle == 0`. With [`SheddingConfig::EveryStep`] that fires on every
//! step of a qualifying period; [`SheddingConfig::OncePerPeriod`] fires on its
//! first step only.

use log::{debug, warn};

use crate::configuration::config::SheddingConfig;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, VortexParticle, VortexSystem};

#[derive(Debug, Clone)]
pub struct Shedder {
    rule: SheddingConfig,
    period: f64,
    cycle: i64,
    gamma: f64, // fixed at construction, shared by every shed particle
    origin: NVec2, // trailing edge
    cap: Option<usize>,
    last_period: Option<i64>, // last period index that produced a particle
    cap_reached: bool,
}

impl Shedder {
    pub fn new(params: &Parameters, rule: SheddingConfig) -> Self {
        Self {
            rule,
            period: params.shed_period,
            cycle: i64::from(params.shed_cycle),
            gamma: params.shed_circulation(),
            origin: NVec2::new(params.chord, 0.0),
            cap: params.max_particles,
            last_period: None,
            cap_reached: false,
        }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// A fresh particle at the trailing edge
    pub fn particle(&self) -> VortexParticle {
        VortexParticle::new(self.origin, self.gamma)
    }

    /// Period index `floor(t / period)`, truncated toward zero
    pub fn period_index(&self, t: f64) -> i64 {
        (t / self.period) as i64
    }

    /// Whether the rule fires at time `t`. Updates the once-per-period bookkeeping
    pub fn should_shed(&mut self, t: f64) -> bool {
        let k = self.period_index(t);
        if k % self.cycle != 0 {
            return false;
        }
        match self.rule {
            SheddingConfig::EveryStep => true,
            SheddingConfig::OncePerPeriod => {
                if self.last_period == Some(k) {
                    false
                } else {
                    self.last_period = Some(k);
                    true
                }
            }
        }
    }

    /// Evaluate the rule at `sys.t` and append a particle if it fires.
    /// Returns true when a particle was added
    pub fn shed(&mut self, sys: &mut VortexSystem) -> bool {
        if !self.should_shed(sys.t) {
            return false;
        }

        if let Some(cap) = self.cap {
            if sys.len() >= cap {
                if !self.cap_reached {
                    warn!("particle cap of {} reached at t = {:.3}, shedding stopped", cap, sys.t);
                    self.cap_reached = true;
                }
                return false;
            }
        }

        sys.particles.push(self.particle());
        debug!("shed particle {} at t = {:.3}", sys.len() - 1, sys.t);
        true
    }
}
