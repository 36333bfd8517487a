pub mod classifier;
mod conditional_tests;
pub mod decision_tree;

pub use classifier::Classifier;
pub use conditional_tests::AttributeSplitSuggestion;
