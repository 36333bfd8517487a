mod error;

pub use error::BuildError;

use crate::classifiers::decision_tree::TreeInducer;
use crate::core::record_header::RecordHeader;
use crate::core::records::Record;
use crate::streams::{Partition, read_records, write_partition};
use crate::ui::types::ExperimentParameters;
use std::sync::Arc;
use tracing::{info, warn};

pub fn build_header(p: &ExperimentParameters) -> Result<Arc<RecordHeader>, BuildError> {
    if p.attribute_count == 0 {
        return Err(BuildError::InvalidParameter(
            "attribute_count must be at least 1".into(),
        ));
    }
    let relation = p
        .dataset_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "votes".into());
    Ok(Arc::new(RecordHeader::with_issue_letters(
        relation,
        p.attribute_count,
    )))
}

pub fn build_inducer(p: &ExperimentParameters) -> TreeInducer {
    TreeInducer::new(p.degenerate_majority)
}

/// Loads the dataset and deals it into subsets, writing them out when
/// `partition_output_dir` is set.
pub fn build_partition(
    p: &ExperimentParameters,
    header: Arc<RecordHeader>,
) -> Result<Partition<Record>, BuildError> {
    let records = read_records(&p.dataset_path, header)?;
    let partition = Partition::new(records, p.partition);
    if partition.training.is_empty() {
        warn!(
            dataset = %p.dataset_path.display(),
            scheme = %p.partition,
            "partition leaves no training records"
        );
    }

    if let Some(dir) = &p.partition_output_dir {
        write_partition(dir, &partition)?;
        info!(dir = %dir.display(), "wrote partition files");
    }
    info!(
        training = partition.training.len(),
        tuning = partition.tuning.len(),
        testing = partition.testing.len(),
        scheme = %p.partition,
        "partitioned dataset"
    );
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::DegenerateMajorityPolicy;
    use crate::streams::PartitionScheme;
    use std::fs;

    #[test]
    fn header_is_named_after_the_dataset() {
        let p = ExperimentParameters::for_dataset("data/house-votes.tsv");
        let h = build_header(&p).unwrap();
        assert_eq!(h.relation_name(), "house-votes");
        assert_eq!(h.width(), 10);
    }

    #[test]
    fn zero_width_is_rejected() {
        let p = ExperimentParameters {
            attribute_count: 0,
            ..ExperimentParameters::default()
        };
        assert!(matches!(build_header(&p), Err(BuildError::InvalidParameter(_))));
    }

    #[test]
    fn inducer_uses_the_configured_policy() {
        let p = ExperimentParameters {
            degenerate_majority: DegenerateMajorityPolicy::Error,
            ..ExperimentParameters::default()
        };
        assert_eq!(build_inducer(&p).policy(), DegenerateMajorityPolicy::Error);
    }

    #[test]
    fn partition_is_loaded_and_written() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("votes.tsv");
        fs::write(&data, "a\tD\t+-\nb\tD\t+-\nc\tR\t--\nd\tR\t--\ne\tD\t+.\n").unwrap();

        let p = ExperimentParameters {
            attribute_count: 2,
            partition: PartitionScheme::Holdout,
            partition_output_dir: Some(dir.path().join("parts")),
            ..ExperimentParameters::for_dataset(&data)
        };
        let partition = build_partition(&p, build_header(&p).unwrap()).unwrap();
        // limit = floor(10 / 3) = 3
        assert_eq!(partition.tuning.len(), 1);
        assert_eq!(partition.training.len(), 2);
        assert_eq!(partition.testing.len(), 2);

        let tuning = fs::read_to_string(dir.path().join("parts/tuning.txt")).unwrap();
        assert_eq!(tuning, "a\tD\t+-\n");
        let testing = fs::read_to_string(dir.path().join("parts/testing.txt")).unwrap();
        assert_eq!(testing, "d\tR\t--\ne\tD\t+.\n");
    }

    #[test]
    fn malformed_dataset_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("votes.tsv");
        fs::write(&data, "a\tD\t+-\nb\tD\t+\n").unwrap();
        let p = ExperimentParameters {
            attribute_count: 2,
            ..ExperimentParameters::for_dataset(&data)
        };
        let err = build_partition(&p, build_header(&p).unwrap()).unwrap_err();
        assert!(matches!(err, BuildError::Records(_)));
    }

    #[test]
    fn a_single_record_leaves_nothing_to_train_on() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("votes.tsv");
        fs::write(&data, "a\tD\t+-\n").unwrap();
        let p = ExperimentParameters {
            attribute_count: 2,
            ..ExperimentParameters::for_dataset(&data)
        };
        let partition = build_partition(&p, build_header(&p).unwrap()).unwrap();
        assert!(partition.training.is_empty());
        assert_eq!(partition.tuning.len(), 1);
    }
}
