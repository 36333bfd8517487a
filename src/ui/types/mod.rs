pub mod build;
mod parameters;
pub mod schema;

pub use parameters::ExperimentParameters;
