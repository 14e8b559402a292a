//! Chi-squared distribution.

use crate::random::UniformSource;
use crate::traits::FloatScalar;

use super::gamma::Gamma;
use super::{Family, QuantileSettings};

/// Chi-squared distribution with k degrees of freedom.
///
/// The Gamma distribution with shape k/2 and scale 2. Valid for finite k > 0;
/// k need not be an integer.
///
/// # Example
///
/// ```
/// use statis::stats::{ChiSquared, Distribution};
///
/// let c = ChiSquared::new(3.0_f64);
/// assert!((c.mean() - 3.0).abs() < 1e-14);
/// assert!((c.variance() - 6.0).abs() < 1e-14);
/// // 95th percentile of χ²(3)
/// assert!((c.quantile(0.95) - 7.814727903251178).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared<T> {
    dof: T,
}

impl<T: FloatScalar> ChiSquared<T> {
    /// Chi-squared distribution with `dof` degrees of freedom.
    pub fn new(dof: T) -> Self {
        Self { dof }
    }

    fn as_gamma(&self) -> Gamma<T> {
        let two = T::one() + T::one();
        Gamma::new(self.dof / two, two)
    }
}

impl<T: FloatScalar> Family<T> for ChiSquared<T> {
    fn params_valid(&self) -> bool {
        self.dof.is_finite() && self.dof > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        self.as_gamma().eval_density(x, log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        self.as_gamma().eval_distribution(x, log_form)
    }

    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T {
        self.as_gamma().eval_quantile(p, settings)
    }

    fn eval_random<R: UniformSource<T> + ?Sized>(&self, src: &mut R) -> T {
        self.as_gamma().eval_random(src)
    }

    fn eval_mean(&self) -> T {
        self.dof
    }

    fn eval_variance(&self) -> T {
        self.dof + self.dof
    }
}

family_api!(ChiSquared, dof: A);
