use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::{DecisionTree, TreeError, TreeInducer};
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use crate::evaluation::{LeaveOneOutEntry, LeaveOneOutReport, accuracy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;
use tracing::{info, warn};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CrossValidationMode {
    /// Re-induce on the full training set; only the scored set loses a record.
    #[default]
    Literal,
    /// Induce on every record but one and classify the one left out.
    Retrained,
}

#[derive(Debug, Error)]
pub enum CrossValidationError {
    #[error("cannot omit record {index}: only {len} representatives")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Rebuilds `tree` from `training` and scores it on `representatives`
/// without the record at `index`.
///
/// Induction always sees the whole training set; the omitted record only
/// leaves the scored set. It is put back at `index` before returning, on
/// failure too, so `representatives` keeps its order.
pub fn leave_one_out(
    tree: &mut DecisionTree,
    inducer: &TreeInducer,
    training: &[Record],
    representatives: &mut Vec<Record>,
    index: usize,
) -> Result<LeaveOneOutEntry, CrossValidationError> {
    if index >= representatives.len() {
        return Err(CrossValidationError::IndexOutOfRange {
            index,
            len: representatives.len(),
        });
    }

    let omitted = representatives.remove(index);
    let scored = inducer
        .induce(training, tree.shared_header())
        .and_then(|fresh| {
            *tree = fresh;
            accuracy(&*tree, representatives.as_slice())
        });
    let omitted_id = omitted.id().to_string();
    representatives.insert(index, omitted);

    let acc = scored?;
    info!(omitted = %omitted_id, accuracy = acc, "left out representative");
    Ok(LeaveOneOutEntry::scored(omitted_id, acc))
}

/// Calls [`leave_one_out`] for every index in `0..rounds`, recording
/// per-record failures instead of stopping.
pub fn literal_leave_one_out(
    tree: &mut DecisionTree,
    inducer: &TreeInducer,
    training: &[Record],
    representatives: &mut Vec<Record>,
    rounds: usize,
) -> LeaveOneOutReport {
    let mut report = LeaveOneOutReport::default();
    for index in 0..rounds {
        let omitted_id = representatives
            .get(index)
            .map(|r| r.id().to_string())
            .unwrap_or_else(|| format!("#{index}"));
        match leave_one_out(tree, inducer, training, representatives, index) {
            Ok(entry) => report.push(entry),
            Err(e) => {
                warn!(omitted = %omitted_id, error = %e, "leave-one-out round failed");
                report.push(LeaveOneOutEntry::failed(omitted_id, e));
            }
        }
    }
    report
}

/// Leave-one-out with retraining: each record is classified by a tree
/// induced on all the other records. Entry accuracy is 1.0 for a correct
/// prediction and 0.0 otherwise, so the report mean is the overall accuracy.
pub fn retrained_leave_one_out(
    inducer: &TreeInducer,
    records: &[Record],
    header: Arc<RecordHeader>,
) -> LeaveOneOutReport {
    let mut report = LeaveOneOutReport::default();
    for (index, held_out) in records.iter().enumerate() {
        let others: Vec<&Record> = records
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, r)| r)
            .collect();

        let outcome = inducer
            .induce(&others, Arc::clone(&header))
            .and_then(|tree| tree.classify(held_out));
        match outcome {
            Ok(predicted) => {
                let hit = if predicted == held_out.label() { 1.0 } else { 0.0 };
                info!(omitted = held_out.id(), predicted = %predicted, "held out record classified");
                report.push(LeaveOneOutEntry::scored(held_out.id(), hit));
            }
            Err(e) => {
                warn!(omitted = held_out.id(), error = %e, "leave-one-out round failed");
                report.push(LeaveOneOutEntry::failed(held_out.id(), e));
            }
        }
    }
    report
}
