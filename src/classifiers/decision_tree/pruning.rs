//! Reduced-error pruning driven by a validation set.

use crate::classifiers::decision_tree::{DecisionTree, NodeId, TreeError};
use crate::core::records::Record;
use crate::evaluation::accuracy;
use std::borrow::Borrow;
use tracing::{debug, info};

/// Decision node collapsed by one pruning pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassOutcome {
    pub node: NodeId,
    pub accuracy: f64,
}

/// What [`prune_to_fixed_point`] did to a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneSummary {
    pub passes: usize,
    pub initial_accuracy: f64,
    pub final_accuracy: f64,
    pub nodes_before: usize,
    pub nodes_after: usize,
}

/// Decision nodes in breadth-first order, root first.
pub fn list_internal_nodes(tree: &DecisionTree) -> Vec<NodeId> {
    tree.node_ids_breadth_first()
        .into_iter()
        .filter(|&id| !tree.node(id).is_leaf())
        .collect()
}

/// Collapses the single decision node whose removal scores best on `validation`.
///
/// Each candidate is turned into a leaf labelled with its majority, the
/// whole tree is scored, and the candidate is restored. The first candidate
/// reaching a strictly higher accuracy than every earlier one (starting
/// from `0.0`) wins and is collapsed for good. Candidates without a majority
/// label are skipped. Returns `None`, leaving the tree untouched, when no
/// candidate scores above zero.
pub fn prune_one_pass<R: Borrow<Record>>(
    tree: &mut DecisionTree,
    validation: &[R],
) -> Result<Option<PassOutcome>, TreeError> {
    let mut max_accuracy = 0.0;
    let mut best: Option<NodeId> = None;

    for id in list_internal_nodes(tree) {
        let Some(label) = tree.node(id).majority_label() else {
            continue;
        };
        tree.node_mut(id).to_leaf(label);
        let scored = accuracy(&*tree, validation);
        tree.node_mut(id).to_internal();

        let candidate_accuracy = scored?;
        debug!(node = %id, accuracy = candidate_accuracy, "pruning candidate");
        if candidate_accuracy > max_accuracy {
            max_accuracy = candidate_accuracy;
            best = Some(id);
        }
    }

    let Some(node) = best else {
        return Ok(None);
    };
    if let Some(label) = tree.node(node).majority_label() {
        tree.collapse(node, label);
    }
    Ok(Some(PassOutcome {
        node,
        accuracy: max_accuracy,
    }))
}

/// Runs [`prune_one_pass`] until a pass no longer strictly improves
/// validation accuracy.
///
/// The baseline is the accuracy of the unpruned tree. A pass that fails to
/// beat the best accuracy so far is undone, so the tree is left as of the
/// last improving pass and its validation accuracy never decreases.
pub fn prune_to_fixed_point<R: Borrow<Record>>(
    tree: &mut DecisionTree,
    validation: &[R],
) -> Result<PruneSummary, TreeError> {
    let initial_accuracy = accuracy(&*tree, validation)?;
    let nodes_before = tree.node_count();
    let mut best_accuracy = initial_accuracy;
    let mut passes = 0;

    loop {
        let snapshot = tree.clone();
        let Some(outcome) = prune_one_pass(tree, validation)? else {
            break;
        };
        let current = accuracy(&*tree, validation)?;
        if current <= best_accuracy {
            *tree = snapshot;
            break;
        }
        best_accuracy = current;
        passes += 1;
        info!(
            pass = passes,
            node = %outcome.node,
            accuracy = current,
            nodes = tree.node_count(),
            "pruned decision node"
        );
    }

    Ok(PruneSummary {
        passes,
        initial_accuracy,
        final_accuracy: best_accuracy,
        nodes_before,
        nodes_after: tree.node_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::TreeInducer;
    use crate::core::attributes::{Category, TernaryValue};
    use crate::testing::dummies::{header_with_width, parse_records};

    /// Attribute 0 splits the Democrat root; its `+` branch leans Republican
    /// and splits again on attribute 1, so every leaf below it predicts R.
    fn overfit_tree() -> DecisionTree {
        let training = parse_records(&[
            ("a", "R", "+-"),
            ("b", "R", "+-"),
            ("c", "D", "+."),
            ("d", "D", "--"),
            ("e", "D", "--"),
            ("f", "D", "--"),
        ]);
        TreeInducer::default()
            .induce(&training, header_with_width(2))
            .unwrap()
    }

    #[test]
    fn internal_nodes_are_listed_root_first() {
        let tree = overfit_tree();
        let internal = list_internal_nodes(&tree);
        assert_eq!(internal.len(), 2);
        assert_eq!(internal[0], tree.root());
        let plus = tree.child_for_value(tree.root(), TernaryValue::Plus).unwrap();
        assert_eq!(internal[1], plus);
        assert_eq!(tree.node(plus).split_attribute(), Some(1));
    }

    #[test]
    fn one_pass_collapses_the_best_node_and_restores_the_rest() {
        let mut tree = overfit_tree();
        let validation = parse_records(&[("v1", "R", "+-"), ("v2", "D", "--"), ("v3", "R", "++")]);
        let plus = tree.child_for_value(tree.root(), TernaryValue::Plus).unwrap();

        let outcome = prune_one_pass(&mut tree, &validation).unwrap().unwrap();
        assert_eq!(outcome.node, plus);
        assert_eq!(outcome.accuracy, 1.0);
        assert!(tree.node(plus).is_leaf());
        assert_eq!(tree.node(plus).predicted_label(), Some(Category::Republican));
        assert!(!tree.node(tree.root()).is_leaf());
        assert_eq!(tree.node_count(), 4);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn fixed_point_never_loses_validation_accuracy_or_grows() {
        let mut tree = overfit_tree();
        let validation = parse_records(&[("v1", "D", "+-"), ("v2", "D", "--"), ("v3", "D", "++")]);
        let internal_before = tree.internal_count();

        let summary = prune_to_fixed_point(&mut tree, &validation).unwrap();
        assert!(summary.final_accuracy >= summary.initial_accuracy);
        assert!(summary.nodes_after <= summary.nodes_before);
        assert!(summary.passes <= internal_before);
        assert_eq!(summary.passes, 1);
        assert_eq!(summary.nodes_after, 1);
        assert_eq!(summary.final_accuracy, 1.0);
        assert_eq!(accuracy(&tree, &validation).unwrap(), summary.final_accuracy);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn non_improving_pass_is_rolled_back() {
        let mut tree = overfit_tree();
        let untouched = tree.clone();
        // The full tree already classifies these perfectly.
        let validation = parse_records(&[("v1", "R", "+-"), ("v2", "D", "--"), ("v3", "R", "++")]);

        let summary = prune_to_fixed_point(&mut tree, &validation).unwrap();
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.initial_accuracy, 1.0);
        assert_eq!(tree, untouched);
    }

    #[test]
    fn leaf_only_tree_is_left_unchanged() {
        let training = parse_records(&[("a", "D", "+"), ("b", "D", "-")]);
        let mut tree = TreeInducer::default()
            .induce(&training, header_with_width(1))
            .unwrap();
        assert!(list_internal_nodes(&tree).is_empty());
        assert_eq!(prune_one_pass(&mut tree, &training).unwrap(), None);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn decision_nodes_without_a_majority_are_not_collapsed() {
        let training = parse_records(&[("a", "D", "+"), ("b", "R", "-")]);
        let mut tree = TreeInducer::default()
            .induce(&training, header_with_width(1))
            .unwrap();
        let untouched = tree.clone();
        assert_eq!(list_internal_nodes(&tree), vec![tree.root()]);
        assert_eq!(tree.node(tree.root()).majority_label(), None);

        let validation = parse_records(&[("v1", "R", "+"), ("v2", "R", "-")]);
        assert_eq!(prune_one_pass(&mut tree, &validation).unwrap(), None);
        assert_eq!(tree, untouched);

        let summary = prune_to_fixed_point(&mut tree, &validation).unwrap();
        assert_eq!(summary.passes, 0);
        assert_eq!(summary.initial_accuracy, 0.5);
        assert_eq!(tree, untouched);
    }

    #[test]
    fn empty_validation_set_is_an_error() {
        let mut tree = overfit_tree();
        let empty: Vec<Record> = Vec::new();
        assert_eq!(
            prune_to_fixed_point(&mut tree, &empty).unwrap_err(),
            TreeError::EmptyEvaluationSet
        );
    }
}
