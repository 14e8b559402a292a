//! Exponential distribution.

use crate::traits::{cst, FloatScalar};

use super::{exp_if, Family, QuantileSettings};

/// Exponential distribution with rate λ.
///
/// f(x) = λ e^{−λx} for x ≥ 0. Valid for finite λ > 0.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, Exponential};
///
/// let e = Exponential::new(2.0_f64);
/// assert!((e.pdf(0.0) - 2.0).abs() < 1e-15);
/// assert!((e.mean() - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T> {
    rate: T,
}

impl<T: FloatScalar> Exponential<T> {
    /// Exponential distribution with `rate` λ.
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Rate λ.
    pub fn rate(&self) -> T {
        self.rate
    }
}

/// ln(1 − e^{−t}) for t > 0, without cancellation at either end.
pub(crate) fn ln_one_minus_exp_neg<T: FloatScalar>(t: T) -> T {
    let ln_2: T = cst(core::f64::consts::LN_2);
    if t > ln_2 {
        (-(-t).exp()).ln_1p()
    } else {
        (-(-t).exp_m1()).ln()
    }
}

impl<T: FloatScalar> Family<T> for Exponential<T> {
    fn params_valid(&self) -> bool {
        self.rate.is_finite() && self.rate > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        exp_if(self.rate.ln() - self.rate * x, !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        let t = self.rate * x;
        if log_form {
            ln_one_minus_exp_neg(t)
        } else {
            -(-t).exp_m1()
        }
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        -(-p).ln_1p() / self.rate
    }

    fn eval_mean(&self) -> T {
        self.rate.recip()
    }

    fn eval_variance(&self) -> T {
        (self.rate * self.rate).recip()
    }
}

family_api!(Exponential, rate: A);
