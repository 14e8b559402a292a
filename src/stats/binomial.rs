//! Binomial distribution.

use crate::special::{betainc, lgamma};
use crate::traits::FloatScalar;

use super::root::invert_discrete_cdf;
use super::{exp_if, log_if, Family, QuantileSettings};

/// Binomial distribution: successes in n independent trials with success
/// probability p.
///
/// Valid for n a finite non-negative integer and 0 ≤ p ≤ 1. The trial count
/// is held as a float so it can take part in argument resolution and
/// broadcasting like any other parameter.
///
/// # Example
///
/// ```
/// use statis::stats::{Binomial, Distribution};
///
/// let b = Binomial::new(10.0_f64, 0.5);
/// assert!((b.pdf(5.0) - 252.0 / 1024.0).abs() < 1e-14);
/// assert_eq!(b.quantile(0.5), 5.0);
/// assert!(Binomial::new(2.5_f64, 0.5).pdf(1.0).is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial<T> {
    trials: T,
    prob: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// Binomial distribution with `trials` n and success probability `prob`.
    pub fn new(trials: T, prob: T) -> Self {
        Self { trials, prob }
    }
}

impl<T: FloatScalar> Family<T> for Binomial<T> {
    const DISCRETE: bool = true;

    fn params_valid(&self) -> bool {
        self.trials.is_finite()
            && self.trials >= T::zero()
            && self.trials == self.trials.floor()
            && self.prob >= T::zero()
            && self.prob <= T::one()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), self.trials)
    }

    fn eval_density(&self, k: T, log_form: bool) -> T {
        let zero = T::zero();
        let one = T::one();
        let n = self.trials;
        // Degenerate at one end; k·ln(0) would be NaN at k = 0.
        if self.prob == zero {
            return log_if(if k == zero { one } else { zero }, log_form);
        }
        if self.prob == one {
            return log_if(if k == n { one } else { zero }, log_form);
        }
        let ln_f = lgamma(n + one) - lgamma(k + one) - lgamma(n - k + one)
            + k * self.prob.ln()
            + (n - k) * (-self.prob).ln_1p();
        exp_if(ln_f, !log_form)
    }

    fn eval_distribution(&self, k: T, log_form: bool) -> T {
        // P(X ≤ k) = I_{1−p}(n − k, k + 1)
        let one = T::one();
        let f = betainc(self.trials - k, k + one, one - self.prob).unwrap_or(T::nan());
        log_if(f, log_form)
    }

    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T {
        invert_discrete_cdf(
            |k| {
                if k >= self.trials {
                    T::one()
                } else {
                    self.eval_distribution(k, false)
                }
            },
            p,
            self.trials * self.prob,
            T::zero(),
            self.trials,
            settings,
        )
    }

    fn eval_mean(&self) -> T {
        self.trials * self.prob
    }

    fn eval_variance(&self) -> T {
        self.trials * self.prob * (T::one() - self.prob)
    }
}

family_api!(Binomial, trials: A, prob: B);
