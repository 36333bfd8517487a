//! ID3-style induction over ternary attributes, with reduced-error pruning.

mod decision_tree;
mod error;
pub mod gain;
mod inducer;
mod majority_policy;
mod nodes;
pub mod pruning;
mod rendering;
pub mod split_criteria;

pub use decision_tree::DecisionTree;
pub use error::TreeError;
pub use inducer::TreeInducer;
pub use majority_policy::{DegenerateMajorityKind, DegenerateMajorityPolicy};
pub use nodes::{NodeId, TreeNode};
pub use rendering::{NodeContent, TreeDump, TreeLine};
pub use split_test::TernarySplitTest;
