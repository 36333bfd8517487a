mod cross_validation;
mod experiment;

pub use cross_validation::{
    CrossValidationError, CrossValidationMode, leave_one_out, literal_leave_one_out,
    retrained_leave_one_out,
};
pub use experiment::{Experiment, ExperimentOutcome};
