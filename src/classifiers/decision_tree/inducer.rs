use crate::classifiers::decision_tree::gain::{best_split_by, class_distribution, majority_label};
use crate::classifiers::decision_tree::split_criteria::InfoGainSplitCriterion;
use crate::classifiers::decision_tree::{DecisionTree, DegenerateMajorityPolicy, NodeId, TreeError};
use crate::core::attributes::{Category, NUMBER_OF_BRANCHES};
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use std::borrow::Borrow;
use std::sync::Arc;
use tracing::debug;

/// Top-down ID3 induction over ternary attributes.
///
/// At each node, in order:
/// 1. the majority label of the records reaching it is stored on the node;
/// 2. an empty or tied record set takes the closest ancestor majority as
///    its leaf label (a non-empty tie with no such ancestor keeps growing);
/// 3. if the best information gain is zero the node takes the closest
///    ancestor majority as its leaf label, when one exists;
/// 4. a single-class set becomes a leaf with that class;
/// 5. a set whose records agree on every attribute, or whose best gain is
///    zero with no ancestor majority, becomes a leaf with its own majority;
/// 6. otherwise the node splits on the best attribute into `+`, `-`, `.`
///    children, and each bucket is grown, empty ones included.
///
/// Whenever a leaf is required and no label can be resolved, the
/// [`DegenerateMajorityPolicy`] decides.
#[derive(Debug, Clone, Default)]
pub struct TreeInducer {
    criterion: InfoGainSplitCriterion,
    policy: DegenerateMajorityPolicy,
}

impl TreeInducer {
    pub fn new(policy: DegenerateMajorityPolicy) -> Self {
        Self {
            criterion: InfoGainSplitCriterion::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DegenerateMajorityPolicy {
        self.policy
    }

    /// Builds a fresh tree from `records`, all of which must match `header`'s width.
    pub fn induce<R: Borrow<Record>>(
        &self,
        records: &[R],
        header: Arc<RecordHeader>,
    ) -> Result<DecisionTree, TreeError> {
        let width = header.width();
        if let Some(bad) = records
            .iter()
            .map(Borrow::<Record>::borrow)
            .find(|r| r.width() != width)
        {
            return Err(TreeError::SchemaMismatch {
                id: bad.id().to_string(),
                expected: width,
                found: bad.width(),
            });
        }

        let mut tree = DecisionTree::with_root(header);
        let root = tree.root();
        let active: Vec<&Record> = records.iter().map(Borrow::<Record>::borrow).collect();
        self.grow(&mut tree, root, &active, width)?;

        debug!(
            records = records.len(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            "induced decision tree"
        );
        Ok(tree)
    }

    fn grow(
        &self,
        tree: &mut DecisionTree,
        node: NodeId,
        records: &[&Record],
        width: usize,
    ) -> Result<(), TreeError> {
        let distribution = class_distribution(records);
        let majority = majority_label(&distribution);
        tree.node_mut(node).set_observed(distribution, majority);

        if records.is_empty() || majority.is_none() {
            if let Some(label) = tree.ancestor_majority(node) {
                debug!(node = %node, %label, records = records.len(), "empty or tied, ancestor majority");
                tree.node_mut(node).make_leaf(label);
                return Ok(());
            }
            if records.is_empty() {
                return self.degenerate(tree, node);
            }
        }

        let Some(suggestion) = best_split_by(&self.criterion, records, width) else {
            return self.degenerate(tree, node);
        };
        let zero_gain = suggestion.get_merit() <= 0.0;
        if zero_gain {
            if let Some(label) = tree.ancestor_majority(node) {
                debug!(node = %node, %label, "zero information gain, ancestor majority");
                tree.node_mut(node).make_leaf(label);
                return Ok(());
            }
        }

        if let Some(label) = uniform_label(records) {
            debug!(node = %node, %label, "single class");
            tree.node_mut(node).make_leaf(label);
            return Ok(());
        }

        if zero_gain || attributes_identical(records) {
            debug!(node = %node, zero_gain, "no useful split");
            return match majority {
                Some(label) => {
                    tree.node_mut(node).make_leaf(label);
                    Ok(())
                }
                None => self.degenerate(tree, node),
            };
        }

        let split_test = suggestion.get_split_test();
        debug!(
            node = %node,
            attribute = split_test.attribute_index(),
            gain = suggestion.get_merit(),
            "split"
        );

        let mut buckets: Vec<Vec<&Record>> = vec![Vec::new(); NUMBER_OF_BRANCHES];
        for &record in records {
            if let Some(value) = split_test.branch_for_record(record) {
                buckets[value.index()].push(record);
            }
        }

        let children = tree.split(node, split_test);
        for (child, bucket) in children.into_iter().zip(buckets) {
            self.grow(tree, child, &bucket, width)?;
        }
        Ok(())
    }

    fn degenerate(&self, tree: &mut DecisionTree, node: NodeId) -> Result<(), TreeError> {
        match self.policy {
            DegenerateMajorityPolicy::Error => Err(TreeError::DegenerateMajority { node }),
            DegenerateMajorityPolicy::DefaultLabel(label) => {
                debug!(node = %node, %label, "no resolvable majority, default label");
                tree.node_mut(node).make_leaf(label);
                Ok(())
            }
        }
    }
}

fn uniform_label(records: &[&Record]) -> Option<Category> {
    let (first, rest) = records.split_first()?;
    let label = first.label();
    rest.iter().all(|r| r.label() == label).then_some(label)
}

fn attributes_identical(records: &[&Record]) -> bool {
    match records.split_first() {
        Some((first, rest)) => rest.iter().all(|r| r.attributes() == first.attributes()),
        None => true,
    }
}
