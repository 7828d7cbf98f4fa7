pub mod states;
pub mod params;
pub mod error;
pub mod engine;
pub mod kernel;
pub mod integrator;
pub mod shedding;
pub mod aggregate;
pub mod scenario;
