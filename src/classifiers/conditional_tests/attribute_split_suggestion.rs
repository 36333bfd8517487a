use crate::classifiers::decision_tree::TernarySplitTest;
use std::cmp::Ordering;

/// Candidate split of a record set on one attribute, scored by its merit
/// (information gain).
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    split_test: TernarySplitTest,
    resulting_class_distribution: Vec<Vec<f64>>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        split_test: TernarySplitTest,
        resulting_class_distribution: Vec<Vec<f64>>,
        merit: f64,
    ) -> Self {
        Self {
            split_test,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn get_split_test(&self) -> TernarySplitTest {
        self.split_test
    }

    pub fn attribute_index(&self) -> usize {
        self.split_test.attribute_index()
    }

    pub fn get_resulting_class_distribution(&self) -> &Vec<Vec<f64>> {
        &self.resulting_class_distribution
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> Option<&[f64]> {
        self.resulting_class_distribution
            .get(split_index)
            .map(Vec::as_slice)
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_merit() {
        let low = AttributeSplitSuggestion::new(TernarySplitTest::new(3), vec![], 0.1);
        let high = AttributeSplitSuggestion::new(TernarySplitTest::new(0), vec![], 0.7);
        assert!(high > low);
        assert_eq!(high.attribute_index(), 0);
    }

    #[test]
    fn exposes_branch_distributions() {
        let s = AttributeSplitSuggestion::new(
            TernarySplitTest::new(1),
            vec![vec![2.0, 0.0], vec![0.0, 2.0], vec![0.0, 0.0]],
            1.0,
        );
        assert_eq!(s.number_of_splits(), 3);
        assert_eq!(s.resulting_class_distribution_from_split(1), Some(&[0.0, 2.0][..]));
        assert_eq!(s.resulting_class_distribution_from_split(3), None);
    }
}
