use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::{NodeId, TreeError};
use crate::core::attributes::Category;
use crate::core::records::Record;

/// Predicts the same label for every record, or fails on every record.
pub struct ConstantClassifier {
    label: Option<Category>,
}

impl ConstantClassifier {
    pub fn new(label: Category) -> Self {
        Self { label: Some(label) }
    }

    /// Fails with `TreeError::UnlabeledLeaf` at the root.
    pub fn failing() -> Self {
        Self { label: None }
    }
}

impl Classifier for ConstantClassifier {
    fn classify(&self, _record: &Record) -> Result<Category, TreeError> {
        self.label
            .ok_or(TreeError::UnlabeledLeaf { node: NodeId::ROOT })
    }
}
