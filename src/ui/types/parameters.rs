use crate::classifiers::decision_tree::DegenerateMajorityPolicy;
use crate::evaluation::ReportFormat;
use crate::streams::PartitionScheme;
use crate::tasks::CrossValidationMode;
use crate::ui::types::build::BuildError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_ATTRIBUTE_COUNT: usize = 10;
fn default_attribute_count() -> usize {
    DEFAULT_ATTRIBUTE_COUNT
}

fn default_prune() -> bool {
    true
}

/// Everything one run of the experiment needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExperimentParameters {
    #[schemars(
        with = "String",
        title = "Dataset Path",
        description = "Tab-separated file of id, party and vote string rows"
    )]
    pub dataset_path: PathBuf,

    #[serde(default = "default_attribute_count")]
    #[schemars(
        title = "Attribute Count",
        description = "Number of votes per record",
        range(min = 1)
    )]
    pub attribute_count: usize,

    #[serde(default)]
    #[schemars(
        title = "Partition Scheme",
        description = "How dataset lines are dealt into training, tuning and testing"
    )]
    pub partition: PartitionScheme,

    #[serde(default = "default_prune")]
    #[schemars(title = "Prune", description = "Run reduced-error pruning on the tuning set?")]
    pub prune: bool,

    #[serde(default)]
    #[schemars(
        title = "Degenerate Majority",
        description = "Leaf label used when no majority can be resolved"
    )]
    pub degenerate_majority: DegenerateMajorityPolicy,

    #[serde(default)]
    #[schemars(
        title = "Cross Validation",
        description = "Leave-one-out flavour run after pruning"
    )]
    pub cross_validation: CrossValidationMode,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Report Path",
        description = "Where to export the leave-one-out report"
    )]
    pub report_path: Option<PathBuf>,

    #[serde(default)]
    #[schemars(title = "Report Format", description = "Format of the exported report")]
    pub report_format: ReportFormat,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Partition Output Directory",
        description = "Directory receiving training.txt, tuning.txt and testing.txt"
    )]
    pub partition_output_dir: Option<PathBuf>,
}

impl ExperimentParameters {
    pub fn for_dataset<P: Into<PathBuf>>(dataset_path: P) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            ..Self::default()
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("voting-data.tsv"),
            attribute_count: DEFAULT_ATTRIBUTE_COUNT,
            partition: PartitionScheme::default(),
            prune: true,
            degenerate_majority: DegenerateMajorityPolicy::default(),
            cross_validation: CrossValidationMode::default(),
            report_path: None,
            report_format: ReportFormat::default(),
            partition_output_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn minimal_json_takes_defaults() {
        let p: ExperimentParameters =
            serde_json::from_str(r#"{"dataset_path": "votes.tsv"}"#).unwrap();
        assert_eq!(p, ExperimentParameters::for_dataset("votes.tsv"));
        assert_eq!(p.attribute_count, 10);
        assert_eq!(p.partition, PartitionScheme::EveryFourth);
        assert!(p.prune);
        assert_eq!(
            p.degenerate_majority,
            DegenerateMajorityPolicy::DefaultLabel(Category::Democrat)
        );
    }

    #[test]
    fn full_json_round_trips_through_a_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(
            tf,
            r#"{{
                "dataset_path": "votes.tsv",
                "attribute_count": 4,
                "partition": "holdout",
                "prune": false,
                "degenerate_majority": {{"type": "error"}},
                "cross_validation": "retrained",
                "report_path": "out.json",
                "report_format": "json",
                "partition_output_dir": "parts"
            }}"#
        )
        .unwrap();

        let p = ExperimentParameters::from_json_file(tf.path()).unwrap();
        assert_eq!(p.attribute_count, 4);
        assert_eq!(p.partition, PartitionScheme::Holdout);
        assert!(!p.prune);
        assert_eq!(p.degenerate_majority, DegenerateMajorityPolicy::Error);
        assert_eq!(p.cross_validation, CrossValidationMode::Retrained);
        assert_eq!(p.report_path, Some(PathBuf::from("out.json")));
        assert_eq!(p.report_format, ReportFormat::Json);
        assert_eq!(p.partition_output_dir, Some(PathBuf::from("parts")));
    }

    #[test]
    fn unknown_fields_and_missing_dataset_are_rejected() {
        assert!(serde_json::from_str::<ExperimentParameters>(r#"{"dataset": "x"}"#).is_err());
        assert!(serde_json::from_str::<ExperimentParameters>("{}").is_err());
        assert!(matches!(
            ExperimentParameters::from_json_file("/definitely/not/here.json"),
            Err(BuildError::Io(_))
        ));
    }
}
