//! Entropy and information-gain statistics over record sets.
//!
//! Every function re-scans the records it is given; nothing is cached
//! between calls.

use crate::classifiers::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::TernarySplitTest;
use crate::classifiers::decision_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::attributes::{Category, NUMBER_OF_BRANCHES, NUMBER_OF_CATEGORIES};
use crate::core::records::Record;
use crate::utils::math::entropy;
use std::borrow::Borrow;

/// Number of records per [`Category`], indexed by [`Category::index`].
pub fn class_distribution<R: Borrow<Record>>(records: &[R]) -> Vec<f64> {
    let mut distribution = vec![0.0; NUMBER_OF_CATEGORIES];
    for record in records {
        distribution[record.borrow().label().index()] += 1.0;
    }
    distribution
}

/// Two-class Shannon entropy of the labels; `0.0` for empty or single-class sets.
pub fn class_entropy<R: Borrow<Record>>(records: &[R]) -> f64 {
    entropy(&class_distribution(records))
}

/// Label held by strictly more than half of the distribution.
///
/// `None` for an empty distribution or an exact tie.
pub fn majority_label(distribution: &[f64]) -> Option<Category> {
    let total: f64 = distribution.iter().sum();
    if total <= 0.0 {
        return None;
    }
    distribution
        .iter()
        .position(|&count| count * 2.0 > total)
        .and_then(Category::from_index)
}

/// Class distributions of the `+`, `-` and `.` buckets of `attribute_index`.
pub fn branch_distributions<R: Borrow<Record>>(records: &[R], attribute_index: usize) -> Vec<Vec<f64>> {
    let mut branches = vec![vec![0.0; NUMBER_OF_CATEGORIES]; NUMBER_OF_BRANCHES];
    for record in records {
        let record = record.borrow();
        if let Some(value) = record.value_at_index(attribute_index) {
            branches[value.index()][record.label().index()] += 1.0;
        }
    }
    branches
}

/// Information gain of splitting `records` on `attribute_index`.
pub fn attribute_gain<R: Borrow<Record>>(records: &[R], attribute_index: usize) -> f64 {
    let criterion = InfoGainSplitCriterion::new();
    criterion.get_merit_of_split(
        &class_distribution(records),
        &branch_distributions(records, attribute_index),
    )
}

/// Best attribute among `0..width` by information gain.
///
/// Attributes are scanned in index order and only a strictly larger gain
/// replaces the current best, so ties keep the lowest index. When no
/// attribute has a positive gain the suggestion is attribute `0` with merit
/// `0.0`, which callers treat as a stop condition. `None` only when `width` is 0.
pub fn best_split<R: Borrow<Record>>(records: &[R], width: usize) -> Option<AttributeSplitSuggestion> {
    best_split_by(&InfoGainSplitCriterion::new(), records, width)
}

pub fn best_split_by<C, R>(criterion: &C, records: &[R], width: usize) -> Option<AttributeSplitSuggestion>
where
    C: SplitCriterion,
    R: Borrow<Record>,
{
    if width == 0 {
        return None;
    }
    let pre_split = class_distribution(records);

    let mut best_index = 0;
    let mut best_merit = 0.0;
    let mut best_branches = branch_distributions(records, 0);
    for attribute_index in 0..width {
        let branches = branch_distributions(records, attribute_index);
        let merit = criterion.get_merit_of_split(&pre_split, &branches);
        if merit > best_merit {
            best_index = attribute_index;
            best_merit = merit;
            best_branches = branches;
        }
    }

    Some(AttributeSplitSuggestion::new(
        TernarySplitTest::new(best_index),
        best_branches,
        best_merit,
    ))
}
