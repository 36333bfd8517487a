use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use crate::utils::math::entropy;

/// Information gain: entropy before the split minus the weighted entropy of
/// the branches. Empty branches weigh nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_entropy(&self, distribution: &[f64]) -> f64 {
        entropy(distribution)
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_range_of_merit(&self, pre_split_distribution: &[f64]) -> f64 {
        let classes = pre_split_distribution.len().max(2) as f64;
        libm::log2(classes)
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = post_split_dists
            .iter()
            .map(|branch| {
                let weight = branch.iter().sum::<f64>() / total;
                weight * self.compute_entropy(branch)
            })
            .sum();
        self.compute_entropy(pre_split_distribution) - weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_split_recovers_all_entropy() {
        let c = InfoGainSplitCriterion::new();
        let merit = c.get_merit_of_split(
            &[2.0, 2.0],
            &[vec![2.0, 0.0], vec![0.0, 2.0], vec![0.0, 0.0]],
        );
        assert!((merit - 1.0).abs() < 1e-12);
    }

    #[test]
    fn useless_split_has_zero_merit() {
        let c = InfoGainSplitCriterion::new();
        let merit = c.get_merit_of_split(
            &[2.0, 2.0],
            &[vec![1.0, 1.0], vec![1.0, 1.0], vec![0.0, 0.0]],
        );
        assert!(merit.abs() < 1e-12);
        assert_eq!(c.get_merit_of_split(&[0.0, 0.0], &[]), 0.0);
    }

    #[test]
    fn range_is_one_bit_for_two_classes() {
        let c = InfoGainSplitCriterion::new();
        assert!((c.get_range_of_merit(&[1.0, 1.0]) - 1.0).abs() < 1e-12);
    }
}
