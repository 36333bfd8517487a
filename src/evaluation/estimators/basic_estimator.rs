use crate::evaluation::estimators::Estimator;

/// Running mean: `sum / len`. `NaN` observations are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: usize,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }
}
