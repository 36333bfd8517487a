use crate::classifiers::decision_tree::TreeError;
use crate::core::records::RecordError;
use thiserror::Error;

/// Failure turning [`ExperimentParameters`](crate::ui::types::ExperimentParameters)
/// into runtime objects.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("malformed dataset: {0}")]
    Records(#[from] RecordError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}
