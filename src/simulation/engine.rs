//! High-level runtime engine settings
//!
//! Selects the kernel model, sweep order, shedding rule and whether particles
//! are convected by the freestream, used when building and running a `Scenario`

use crate::configuration::config::{EngineConfig, KernelConfig, SheddingConfig, SweepConfig};
use crate::simulation::error::SimError;
use crate::simulation::kernel::KernelModel;

/// Core radius used by the smoothed kernel when the config leaves it out
pub const DEFAULT_CORE_RADIUS: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    pub kernel: KernelModel, // self-interaction policy
    pub sweep: SweepConfig, // interleaved or snapshot
    pub shedding: SheddingConfig, // every step or once per period
    pub freestream_convection: bool, // add (V_inf, 0) to the drift velocity
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Result<Self, SimError> {
        let kernel = match cfg.kernel {
            KernelConfig::Singular => KernelModel::Singular,
            KernelConfig::ExcludeSelf => KernelModel::ExcludeSelf,
            KernelConfig::Smoothed => {
                let core_radius = cfg.core_radius.unwrap_or(DEFAULT_CORE_RADIUS);
                if !core_radius.is_finite() || core_radius < 0.0 {
                    return Err(SimError::domain("core_radius", core_radius, "must be finite and non-negative"));
                }
                KernelModel::Smoothed { core_radius }
            }
        };

        Ok(Self {
            kernel,
            sweep: cfg.sweep,
            shedding: cfg.shedding,
            freestream_convection: cfg.freestream_convection,
        })
    }

    /// Bit-for-bit reproduction of the reference loop
    pub fn legacy() -> Self {
        Self {
            kernel: KernelModel::Singular,
            sweep: SweepConfig::Interleaved,
            shedding: SheddingConfig::EveryStep,
            freestream_convection: false,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            kernel: KernelModel::Smoothed { core_radius: DEFAULT_CORE_RADIUS },
            sweep: SweepConfig::Snapshot,
            shedding: SheddingConfig::EveryStep,
            freestream_convection: false,
        }
    }
}
