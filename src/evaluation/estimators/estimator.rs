/// Incremental scalar estimator.
///
/// Observations arrive one at a time via [`add`](Estimator::add); the
/// current estimate is read with [`estimation`](Estimator::estimation).
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// `NaN` until at least one observation has been added.
    fn estimation(&self) -> f64;

    /// Number of observations counted so far.
    fn count(&self) -> usize;
}
