use crate::classifiers::decision_tree::{NodeId, TernarySplitTest};
use crate::core::attributes::{Category, NUMBER_OF_BRANCHES, TernaryValue};

/// One node of a [`DecisionTree`](crate::classifiers::decision_tree::DecisionTree).
///
/// A node is either a leaf or a decision node with exactly three children.
/// Both sets of fields live side by side so pruning can flip a decision node
/// to a leaf and back without losing its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    is_leaf: bool,
    split_test: Option<TernarySplitTest>,
    incoming_branch_value: Option<TernaryValue>,
    predicted_label: Option<Category>,
    majority_label: Option<Category>,
    observed_class_distribution: Vec<f64>,
}

impl TreeNode {
    pub(crate) fn new(parent: Option<NodeId>, incoming_branch_value: Option<TernaryValue>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            is_leaf: false,
            split_test: None,
            incoming_branch_value,
            predicted_label: None,
            majority_label: None,
            observed_class_distribution: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    pub fn split_test(&self) -> Option<TernarySplitTest> {
        self.split_test
    }

    pub fn split_attribute(&self) -> Option<usize> {
        self.split_test.map(|t| t.attribute_index())
    }

    pub fn incoming_branch_value(&self) -> Option<TernaryValue> {
        self.incoming_branch_value
    }

    pub fn predicted_label(&self) -> Option<Category> {
        self.predicted_label
    }

    pub fn majority_label(&self) -> Option<Category> {
        self.majority_label
    }

    pub fn get_observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }

    pub(crate) fn set_observed(&mut self, distribution: Vec<f64>, majority: Option<Category>) {
        self.observed_class_distribution = distribution;
        self.majority_label = majority;
    }

    /// Turns a freshly grown node into a leaf.
    pub(crate) fn make_leaf(&mut self, label: Category) {
        debug_assert!(self.children.is_empty(), "leaf created over existing children");
        self.is_leaf = true;
        self.predicted_label = Some(label);
    }

    /// Turns a freshly grown node into a decision node over `children`,
    /// given in `Plus`, `Minus`, `Dot` order.
    pub(crate) fn make_internal(&mut self, split_test: TernarySplitTest, children: Vec<NodeId>) {
        debug_assert_eq!(children.len(), NUMBER_OF_BRANCHES);
        self.is_leaf = false;
        self.split_test = Some(split_test);
        self.children = children;
        self.predicted_label = None;
    }

    /// Tentatively treats a decision node as a leaf, keeping its subtree.
    #[allow(clippy::wrong_self_convention)]
    pub(crate) fn to_leaf(&mut self, label: Category) {
        debug_assert_eq!(self.children.len(), NUMBER_OF_BRANCHES);
        self.is_leaf = true;
        self.predicted_label = Some(label);
    }

    /// Reverts [`to_leaf`](Self::to_leaf).
    #[allow(clippy::wrong_self_convention)]
    pub(crate) fn to_internal(&mut self) {
        debug_assert_eq!(self.children.len(), NUMBER_OF_BRANCHES);
        debug_assert!(self.split_test.is_some());
        self.is_leaf = false;
        self.predicted_label = None;
    }

    /// Permanently replaces the subtree with a leaf. Returns the detached children.
    pub(crate) fn collapse(&mut self, label: Category) -> Vec<NodeId> {
        self.is_leaf = true;
        self.predicted_label = Some(label);
        self.split_test = None;
        std::mem::take(&mut self.children)
    }

    /// Rewrites parent and child ids after the arena drops nodes.
    pub(crate) fn remap(&mut self, remap: &[Option<NodeId>]) {
        self.parent = self.parent.and_then(|p| remap[p.0]);
        self.children = self.children.iter().filter_map(|c| remap[c.0]).collect();
    }

    #[cfg(test)]
    pub(crate) fn children_mut_for_tests(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }

    /// Leaf XOR exactly three children, and leaves always carry a label.
    pub fn is_well_formed(&self) -> bool {
        if self.is_leaf {
            self.children.is_empty() && self.predicted_label.is_some()
        } else {
            self.children.len() == NUMBER_OF_BRANCHES && self.split_test.is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal() -> TreeNode {
        let mut n = TreeNode::new(None, None);
        n.set_observed(vec![3.0, 1.0], Some(Category::Democrat));
        n.make_internal(
            TernarySplitTest::new(2),
            vec![NodeId(1), NodeId(2), NodeId(3)],
        );
        n
    }

    #[test]
    fn tentative_leaf_round_trips_exactly() {
        let mut n = internal();
        let before = n.clone();
        n.to_leaf(Category::Democrat);
        assert!(n.is_leaf());
        assert_eq!(n.predicted_label(), Some(Category::Democrat));
        assert_eq!(n.children().len(), 3);
        n.to_internal();
        assert_eq!(n, before);
        assert!(n.is_well_formed());
    }

    #[test]
    fn collapse_detaches_children() {
        let mut n = internal();
        let detached = n.collapse(Category::Republican);
        assert_eq!(detached, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!(n.is_leaf());
        assert!(n.children().is_empty());
        assert_eq!(n.split_attribute(), None);
        assert_eq!(n.majority_label(), Some(Category::Democrat));
        assert!(n.is_well_formed());
    }

    #[test]
    fn fresh_node_is_not_well_formed() {
        let n = TreeNode::new(Some(NodeId(0)), Some(TernaryValue::Dot));
        assert!(!n.is_well_formed());
        assert_eq!(n.incoming_branch_value(), Some(TernaryValue::Dot));
        assert_eq!(n.parent(), Some(NodeId(0)));
    }
}
