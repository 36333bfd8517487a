use crate::core::attributes::{Category, NUMBER_OF_CATEGORIES};
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use strum::IntoEnumIterator;

/// Batch classification evaluator.
///
/// Tracks:
/// - overall accuracy;
/// - marginals of predicted (`row_kappa`) and true (`col_kappa`) labels for Cohen's kappa;
/// - per-class recall, reported as `recall_D` / `recall_R` when enabled.
pub struct ClassificationEvaluator<E: Estimator + Default> {
    weight_correct: E,
    row_kappa: Vec<E>,
    col_kappa: Vec<E>,
    recall: Vec<E>,
    show_recall_per_class: bool,
}

impl<E: Estimator + Default> ClassificationEvaluator<E> {
    pub fn new(show_recall_per_class: bool) -> Self {
        let make_vec = || (0..NUMBER_OF_CATEGORIES).map(|_| E::default()).collect::<Vec<_>>();
        Self {
            weight_correct: E::default(),
            row_kappa: make_vec(),
            col_kappa: make_vec(),
            recall: make_vec(),
            show_recall_per_class,
        }
    }

    pub fn new_with_default_flags() -> Self {
        Self::new(false)
    }

    pub fn results_seen(&self) -> usize {
        self.weight_correct.count()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for ClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.show_recall_per_class);
    }

    fn add_result(&mut self, truth: Category, predicted: Category) {
        let hit = if truth == predicted { 1.0 } else { 0.0 };
        self.weight_correct.add(hit);

        for (c, est) in self.row_kappa.iter_mut().enumerate() {
            est.add(if c == predicted.index() { 1.0 } else { 0.0 });
        }
        for (c, est) in self.col_kappa.iter_mut().enumerate() {
            est.add(if c == truth.index() { 1.0 } else { 0.0 });
        }
        for (c, est) in self.recall.iter_mut().enumerate() {
            est.add(if c == truth.index() { hit } else { f64::NAN });
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![Measurement::new("accuracy", self.weight_correct.estimation())];

        if self.weight_correct.count() == 0 {
            m.push(Measurement::new("kappa", 0.0));
            return m;
        }

        let p_o = self.weight_correct.estimation();
        let p_e: f64 = self
            .row_kappa
            .iter()
            .zip(&self.col_kappa)
            .map(|(pred, truth)| pred.estimation() * truth.estimation())
            .filter(|p| p.is_finite())
            .sum();
        let denom = 1.0 - p_e;
        let kappa = if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        };
        m.push(Measurement::new("kappa", kappa));

        if self.show_recall_per_class {
            for category in Category::iter() {
                m.push(Measurement::new(
                    format!("recall_{category}"),
                    self.recall[category.index()].estimation(),
                ));
            }
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};
    use Category::{Democrat as D, Republican as R};

    type Eval = ClassificationEvaluator<BasicEstimator>;

    #[test]
    fn accuracy_is_nan_and_kappa_zero_when_empty() {
        let ev = Eval::new_with_default_flags();
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert_eq!(ev.metric("kappa"), Some(0.0));
        assert_eq!(ev.metric("recall_D"), None);
    }

    #[test]
    fn perfect_predictions_have_unit_kappa() {
        let mut ev = Eval::new(true);
        for (t, p) in [(D, D), (R, R), (D, D), (R, R)] {
            ev.add_result(t, p);
        }
        assert_eq!(ev.metric("accuracy"), Some(1.0));
        assert!((ev.metric("kappa").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(ev.metric("recall_D"), Some(1.0));
        assert_eq!(ev.metric("recall_R"), Some(1.0));
    }

    #[test]
    fn recall_is_per_true_class() {
        let mut ev = Eval::new(true);
        ev.add_result(D, D);
        ev.add_result(D, R);
        ev.add_result(R, R);
        assert!((ev.metric("accuracy").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(ev.metric("recall_D"), Some(0.5));
        assert_eq!(ev.metric("recall_R"), Some(1.0));
        assert_eq!(ev.results_seen(), 3);

        ev.reset();
        assert_eq!(ev.results_seen(), 0);
    }
}
