use crate::classifiers::decision_tree::NodeId;
use crate::core::attributes::TernaryValue;
use thiserror::Error;

/// Failures raised while inducing, walking, or scoring a tree.
///
/// All of them are local to one node or one record; callers decide whether
/// the surrounding run continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("accuracy is undefined over an empty record set")]
    EmptyEvaluationSet,

    #[error("node {node}: no branch for value `{value}` of attribute {attribute}")]
    UnmatchedBranch {
        node: NodeId,
        attribute: usize,
        value: TernaryValue,
    },

    #[error("node {node}: no ancestor holds a majority label to fall back on")]
    DegenerateMajority { node: NodeId },

    #[error("node {node}: leaf has no predicted label")]
    UnlabeledLeaf { node: NodeId },

    #[error("attribute {attribute} is out of range for records of width {width}")]
    AttributeOutOfRange { attribute: usize, width: usize },

    #[error("record `{id}` has width {found}, the tree expects {expected}")]
    SchemaMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
}
