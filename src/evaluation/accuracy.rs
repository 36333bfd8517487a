use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::TreeError;
use crate::core::records::Record;
use crate::evaluation::{BasicEstimator, ClassificationEvaluator, Estimator, PerformanceEvaluator};
use std::borrow::Borrow;

/// Fraction of `records` the classifier labels correctly.
///
/// Zero records is an error rather than a division by zero; the first
/// classification failure is propagated.
pub fn accuracy<C, R>(classifier: &C, records: &[R]) -> Result<f64, TreeError>
where
    C: Classifier + ?Sized,
    R: Borrow<Record>,
{
    if records.is_empty() {
        return Err(TreeError::EmptyEvaluationSet);
    }
    let mut correct = BasicEstimator::default();
    for record in records {
        let record = record.borrow();
        let predicted = classifier.classify(record)?;
        correct.add(if predicted == record.label() { 1.0 } else { 0.0 });
    }
    Ok(correct.estimation())
}

/// Feeds every record of `records` through `classifier` into a fresh evaluator.
pub fn evaluate<C, R>(
    classifier: &C,
    records: &[R],
    show_recall_per_class: bool,
) -> Result<ClassificationEvaluator<BasicEstimator>, TreeError>
where
    C: Classifier + ?Sized,
    R: Borrow<Record>,
{
    if records.is_empty() {
        return Err(TreeError::EmptyEvaluationSet);
    }
    let mut evaluator = ClassificationEvaluator::new(show_recall_per_class);
    for record in records {
        let record = record.borrow();
        evaluator.add_result(record.label(), classifier.classify(record)?);
    }
    Ok(evaluator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::NodeId;
    use crate::core::attributes::Category;
    use crate::evaluation::PerformanceEvaluatorExt;
    use crate::testing::ConstantClassifier;
    use crate::testing::dummies::parse_records;

    #[test]
    fn counts_matching_labels() {
        let records = parse_records(&[("a", "D", "+"), ("b", "R", "+"), ("c", "D", "-"), ("d", "D", ".")]);
        let always_d = ConstantClassifier::new(Category::Democrat);
        assert_eq!(accuracy(&always_d, &records).unwrap(), 0.75);
        let always_r = ConstantClassifier::new(Category::Republican);
        assert_eq!(accuracy(&always_r, &records).unwrap(), 0.25);
    }

    #[test]
    fn empty_set_is_a_defined_error() {
        let empty: Vec<Record> = Vec::new();
        let c = ConstantClassifier::new(Category::Democrat);
        assert_eq!(accuracy(&c, &empty), Err(TreeError::EmptyEvaluationSet));
        assert!(evaluate(&c, &empty, false).is_err());
    }

    #[test]
    fn classification_errors_propagate() {
        let records = parse_records(&[("a", "D", "+")]);
        let failing = ConstantClassifier::failing();
        assert_eq!(
            accuracy(&failing, &records),
            Err(TreeError::UnlabeledLeaf { node: NodeId::ROOT })
        );
    }

    #[test]
    fn evaluate_reports_accuracy_and_kappa() {
        let records = parse_records(&[("a", "D", "+"), ("b", "R", "+")]);
        let ev = evaluate(&ConstantClassifier::new(Category::Democrat), &records, true).unwrap();
        assert_eq!(ev.metric("accuracy"), Some(0.5));
        assert_eq!(ev.metric("kappa"), Some(0.0));
        assert_eq!(ev.metric("recall_R"), Some(0.0));
    }
}
