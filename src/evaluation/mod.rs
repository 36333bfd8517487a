mod accuracy;
mod estimators;
mod evaluators;
mod measurement;
mod report;

pub use accuracy::{accuracy, evaluate};
pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{ClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use report::{LeaveOneOutEntry, LeaveOneOutReport, ReportFormat};
