//! Weibull distribution.

use crate::special::gamma;
use crate::traits::FloatScalar;

use super::exponential::ln_one_minus_exp_neg;
use super::{exp_if, log_if, Family, QuantileSettings};

/// Weibull distribution with shape k and scale λ.
///
/// f(x) = (k/λ)(x/λ)^{k−1} e^{−(x/λ)^k} for x ≥ 0. Valid for k > 0, λ > 0.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, Weibull};
///
/// let w = Weibull::new(2.0_f64, 3.0);
/// let direct = (2.0 / 3.0) * 0.6 * (-0.36_f64).exp();
/// assert!((w.pdf(1.8) - direct).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weibull<T> {
    shape: T,
    scale: T,
}

impl<T: FloatScalar> Weibull<T> {
    /// Weibull distribution with `shape` k and `scale` λ.
    pub fn new(shape: T, scale: T) -> Self {
        Self { shape, scale }
    }
}

impl<T: FloatScalar> Family<T> for Weibull<T> {
    fn params_valid(&self) -> bool {
        self.shape > T::zero() && self.scale > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        let one = T::one();
        let k = self.shape;
        if x == T::zero() {
            return if k < one {
                T::infinity()
            } else if k == one {
                log_if(self.scale.recip(), log_form)
            } else {
                log_if(T::zero(), log_form)
            };
        }
        let lz = (x / self.scale).ln();
        exp_if((k / self.scale).ln() + (k - one) * lz - (k * lz).exp(), !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        let t = (x / self.scale).powf(self.shape);
        if log_form {
            ln_one_minus_exp_neg(t)
        } else {
            -(-t).exp_m1()
        }
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        self.scale * (-(-p).ln_1p()).powf(self.shape.recip())
    }

    fn eval_mean(&self) -> T {
        self.scale * gamma(T::one() + self.shape.recip())
    }

    fn eval_variance(&self) -> T {
        let one = T::one();
        let g1 = gamma(one + self.shape.recip());
        let g2 = gamma(one + (one + one) / self.shape);
        self.scale * self.scale * (g2 - g1 * g1)
    }
}

family_api!(Weibull, shape: A, scale: B);
