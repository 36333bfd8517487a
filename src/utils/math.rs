/// Shannon entropy (base 2) of a class-count distribution.
///
/// Zero counts contribute nothing, so an empty or single-class
/// distribution has entropy `0.0`.
pub fn entropy(distribution: &[f64]) -> f64 {
    let total: f64 = distribution.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    distribution
        .iter()
        .filter(|&&count| count > 0.0)
        .map(|&count| {
            let p = count / total;
            -p * libm::log2(p)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_edges() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[0.0, 0.0]), 0.0);
        assert_eq!(entropy(&[5.0, 0.0]), 0.0);
        assert!((entropy(&[3.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_of_skewed_split() {
        // -(1/4 log2 1/4 + 3/4 log2 3/4)
        let expected = 0.811_278_124_459_132_9;
        assert!((entropy(&[1.0, 3.0]) - expected).abs() < 1e-12);
    }
}
