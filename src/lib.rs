pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{VortexParticle, VortexSystem, NVec2};
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::engine::Engine;
pub use simulation::kernel::{VelocityField, PointVortexKernel, KernelModel};
pub use simulation::integrator::{euler_integrator, interleaved_sweep, snapshot_sweep};
pub use simulation::shedding::Shedder;
pub use simulation::aggregate::{partition, integrate_forces, Partition, Forces, Report};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig, KernelConfig, SweepConfig, SheddingConfig};

pub use visualization::wake_vis2d::run_2d;

pub use benchmark::benchmark::{bench_kernel_sweep, bench_run_growth};
