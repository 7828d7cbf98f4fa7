//! Error type for the simulation core

use std::fmt;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A parameter outside its physical range
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Zero separation between a query point and a vortex under a checked kernel
    NumericalSingularity {
        query: NVec2,
        source: usize, // index of the offending particle
        t: f64,
    },
}

impl SimError {
    pub fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::Domain { parameter, value, reason }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Domain { parameter, value, reason } => {
                write!(f, "invalid parameter `{}` = {}: {}", parameter, value, reason)
            }
            SimError::NumericalSingularity { query, source, t } => write!(
                f,
                "singular kernel at t = {}: query ({}, {}) coincides with particle {}",
                t, query.x, query.y, source
            ),
        }
    }
}

impl std::error::Error for SimError {}
