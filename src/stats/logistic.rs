//! Logistic distribution.

use crate::traits::{cst, FloatScalar};

use super::{exp_if, Family, QuantileSettings};

/// Logistic distribution with location μ and scale s.
///
/// F(x) = 1 / (1 + e^{−z}), z = (x − μ)/s. Valid for finite μ and finite
/// s > 0. The distribution function is evaluated in log space, so its log
/// form stays accurate far into both tails.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, Logistic};
///
/// let d = Logistic::new(0.0_f64, 1.0);
/// assert!((d.cdf(0.0) - 0.5).abs() < 1e-15);
/// // ln F(−800) = −800 − ln(1 + e^{−800})
/// assert!((d.distribution(-800.0, true) + 800.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic<T> {
    location: T,
    scale: T,
}

impl<T: FloatScalar> Logistic<T> {
    /// Logistic distribution with `location` μ and `scale` s.
    pub fn new(location: T, scale: T) -> Self {
        Self { location, scale }
    }
}

impl<T: FloatScalar> Family<T> for Logistic<T> {
    fn params_valid(&self) -> bool {
        self.location.is_finite() && self.scale.is_finite() && self.scale > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        let a = ((x - self.location) / self.scale).abs();
        let two = T::one() + T::one();
        exp_if(-a - self.scale.ln() - two * (-a).exp().ln_1p(), !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        let z = (x - self.location) / self.scale;
        let ln_f = if z < T::zero() {
            z - z.exp().ln_1p()
        } else {
            -(-z).exp().ln_1p()
        };
        exp_if(ln_f, !log_form)
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        self.location + self.scale * (p.ln() - (-p).ln_1p())
    }

    fn eval_mean(&self) -> T {
        self.location
    }

    fn eval_variance(&self) -> T {
        let pi2_3: T = cst(core::f64::consts::PI * core::f64::consts::PI / 3.0);
        self.scale * self.scale * pi2_3
    }
}

family_api!(Logistic, location: A, scale: B);
