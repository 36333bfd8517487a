use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::{NodeId, TernarySplitTest, TreeError, TreeNode};
use crate::core::attributes::{Category, TernaryValue};
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use std::collections::VecDeque;
use std::sync::Arc;

/// A ternary decision tree stored as an arena of [`TreeNode`]s.
///
/// Children are owned through the arena indices listed on their parent;
/// the `parent` index on each node is only read for majority fallbacks.
/// Collapsing a subtree drops its nodes from the arena, renumbering the
/// nodes stored after them. The collapsed node keeps its id.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    header: Arc<RecordHeader>,
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub(crate) fn with_root(header: Arc<RecordHeader>) -> Self {
        Self {
            header,
            nodes: vec![TreeNode::new(None, None)],
        }
    }

    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<RecordHeader> {
        Arc::clone(&self.header)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, branch: TernaryValue) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(Some(parent), Some(branch)));
        id
    }

    pub(crate) fn split(&mut self, id: NodeId, split_test: TernarySplitTest) -> Vec<NodeId> {
        let children: Vec<NodeId> = TernaryValue::ALL
            .iter()
            .map(|&branch| self.add_child(id, branch))
            .collect();
        self.node_mut(id).make_internal(split_test, children.clone());
        children
    }

    /// Permanently turns `id` into a leaf labelled `label`.
    pub(crate) fn collapse(&mut self, id: NodeId, label: Category) {
        let detached = self.node_mut(id).collapse(label);
        tracing::trace!(node = %id, detached = detached.len(), "collapsed subtree");
        self.compact();
    }

    /// Drops unreachable nodes, keeping the arena order of the rest.
    fn compact(&mut self) {
        let mut live = vec![false; self.nodes.len()];
        for id in self.node_ids_breadth_first() {
            live[id.0] = true;
        }
        if live.iter().all(|&reachable| reachable) {
            return;
        }

        let mut remap = vec![None; self.nodes.len()];
        let mut next = 0;
        for (old, &reachable) in live.iter().enumerate() {
            if reachable {
                remap[old] = Some(NodeId(next));
                next += 1;
            }
        }

        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = nodes
            .into_iter()
            .zip(live)
            .filter(|(_, reachable)| *reachable)
            .map(|(mut node, _)| {
                node.remap(&remap);
                node
            })
            .collect();
    }

    /// Majority label of the closest proper ancestor that has one.
    pub fn ancestor_majority(&self, id: NodeId) -> Option<Category> {
        let mut current = self.node(id).parent();
        while let Some(ancestor) = current {
            let node = self.node(ancestor);
            if let Some(label) = node.majority_label() {
                return Some(label);
            }
            current = node.parent();
        }
        None
    }

    pub fn child_for_value(&self, id: NodeId, value: TernaryValue) -> Option<NodeId> {
        self.node(id)
            .children()
            .iter()
            .copied()
            .find(|&child| self.node(child).incoming_branch_value() == Some(value))
    }

    /// Walks from the root to a leaf following the record's attribute values.
    pub fn classify(&self, record: &Record) -> Result<Category, TreeError> {
        let mut current = self.root();
        loop {
            let node = self.node(current);
            if node.is_leaf() {
                return node
                    .predicted_label()
                    .ok_or(TreeError::UnlabeledLeaf { node: current });
            }
            let test = node
                .split_test()
                .ok_or(TreeError::UnlabeledLeaf { node: current })?;
            let value = test
                .branch_for_record(record)
                .ok_or(TreeError::AttributeOutOfRange {
                    attribute: test.attribute_index(),
                    width: record.width(),
                })?;
            current = self
                .child_for_value(current, value)
                .ok_or(TreeError::UnmatchedBranch {
                    node: current,
                    attribute: test.attribute_index(),
                    value,
                })?;
        }
    }

    /// Reachable nodes, root first, then level by level.
    pub fn node_ids_breadth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.root()]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            let node = self.node(id);
            if !node.is_leaf() {
                queue.extend(node.children().iter().copied());
            }
        }
        order
    }

    pub fn node_count(&self) -> usize {
        self.node_ids_breadth_first().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.node_ids_breadth_first()
            .into_iter()
            .filter(|&id| self.node(id).is_leaf())
            .count()
    }

    pub fn internal_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.depth_below(self.root())
    }

    fn depth_below(&self, id: NodeId) -> usize {
        let node = self.node(id);
        if node.is_leaf() {
            return 0;
        }
        1 + node
            .children()
            .iter()
            .map(|&child| self.depth_below(child))
            .max()
            .unwrap_or(0)
    }

    /// Every reachable node is well formed and points back at its parent.
    pub fn is_well_formed(&self) -> bool {
        self.node_ids_breadth_first().into_iter().all(|id| {
            let node = self.node(id);
            node.is_well_formed()
                && node
                    .children()
                    .iter()
                    .all(|&child| self.node(child).parent() == Some(id))
        })
    }
}

impl Classifier for DecisionTree {
    fn classify(&self, record: &Record) -> Result<Category, TreeError> {
        DecisionTree::classify(self, record)
    }
}
