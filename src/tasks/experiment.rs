use crate::classifiers::decision_tree::pruning::{PruneSummary, prune_to_fixed_point};
use crate::classifiers::decision_tree::{DecisionTree, TreeDump, TreeError, TreeInducer};
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use crate::evaluation::{LeaveOneOutReport, Measurement, PerformanceEvaluator, accuracy, evaluate};
use crate::streams::Partition;
use crate::tasks::{CrossValidationMode, literal_leave_one_out, retrained_leave_one_out};
use crate::ui::types::ExperimentParameters;
use crate::ui::types::build::{BuildError, build_header, build_inducer, build_partition};
use std::sync::Arc;
use tracing::{info, warn};

/// One configured run: induce on training, prune on tuning, score, cross-validate.
pub struct Experiment {
    header: Arc<RecordHeader>,
    partition: Partition<Record>,
    inducer: TreeInducer,
    prune: bool,
    cross_validation: CrossValidationMode,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub tree: DecisionTree,
    pub unpruned: TreeDump,
    pub pruned: Option<TreeDump>,
    pub prune_summary: Option<PruneSummary>,
    pub training_accuracy: Option<f64>,
    pub tuning_accuracy: Option<f64>,
    pub testing_accuracy: Option<f64>,
    /// Accuracy, kappa and per-class recall; empty when the set is empty.
    pub tuning_metrics: Vec<Measurement>,
    pub testing_metrics: Vec<Measurement>,
    pub cross_validation: LeaveOneOutReport,
}

impl Experiment {
    pub fn new(
        header: Arc<RecordHeader>,
        partition: Partition<Record>,
        inducer: TreeInducer,
        prune: bool,
        cross_validation: CrossValidationMode,
    ) -> Self {
        Self {
            header,
            partition,
            inducer,
            prune,
            cross_validation,
        }
    }

    /// Loads and partitions the dataset named by `params`.
    pub fn from_parameters(params: &ExperimentParameters) -> Result<Self, BuildError> {
        let header = build_header(params)?;
        let partition = build_partition(params, Arc::clone(&header))?;
        Ok(Self::new(
            header,
            partition,
            build_inducer(params),
            params.prune,
            params.cross_validation,
        ))
    }

    pub fn partition(&self) -> &Partition<Record> {
        &self.partition
    }

    pub fn run(&self) -> Result<ExperimentOutcome, TreeError> {
        let training = &self.partition.training;
        let tuning = &self.partition.tuning;
        let testing = &self.partition.testing;

        info!(records = training.len(), "inducing tree");
        let mut tree = self.inducer.induce(training, Arc::clone(&self.header))?;
        let unpruned = tree.dump();
        let training_accuracy = optional_accuracy(&tree, training)?;

        let prune_summary = match (self.prune, tuning.is_empty()) {
            (true, false) => {
                info!(records = tuning.len(), "pruning on tuning set");
                Some(prune_to_fixed_point(&mut tree, tuning)?)
            }
            (true, true) => {
                warn!("tuning set is empty, skipping pruning");
                None
            }
            (false, _) => None,
        };
        let pruned = prune_summary.map(|_| tree.dump());

        let tuning_accuracy = optional_accuracy(&tree, tuning)?;
        let testing_accuracy = optional_accuracy(&tree, testing)?;
        let tuning_metrics = metrics(&tree, tuning)?;
        let testing_metrics = metrics(&tree, testing)?;

        info!(mode = %self.cross_validation, "running leave-one-out");
        let cross_validation = match self.cross_validation {
            CrossValidationMode::Literal => {
                let mut scratch = tree.clone();
                let mut representatives = training.clone();
                let rounds = tuning.len().min(representatives.len());
                literal_leave_one_out(
                    &mut scratch,
                    &self.inducer,
                    training,
                    &mut representatives,
                    rounds,
                )
            }
            CrossValidationMode::Retrained => {
                retrained_leave_one_out(&self.inducer, training, Arc::clone(&self.header))
            }
        };

        info!(
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            training_accuracy,
            tuning_accuracy,
            testing_accuracy,
            "experiment finished"
        );
        Ok(ExperimentOutcome {
            tree,
            unpruned,
            pruned,
            prune_summary,
            training_accuracy,
            tuning_accuracy,
            testing_accuracy,
            tuning_metrics,
            testing_metrics,
            cross_validation,
        })
    }
}

fn optional_accuracy(tree: &DecisionTree, records: &[Record]) -> Result<Option<f64>, TreeError> {
    if records.is_empty() {
        return Ok(None);
    }
    accuracy(tree, records).map(Some)
}

fn metrics(tree: &DecisionTree, records: &[Record]) -> Result<Vec<Measurement>, TreeError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }
    Ok(evaluate(tree, records, true)?.performance())
}
