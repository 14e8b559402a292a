//! Beta distribution.

use crate::random::UniformSource;
use crate::special::{betainc, lbeta};
use crate::traits::FloatScalar;

use super::gamma::standard_gamma_draw;
use super::root::invert_cdf;
use super::{exp_if, log_if, Family, QuantileSettings};

/// Beta distribution with shapes α and β on [0, 1].
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β). Valid for finite α > 0 and finite
/// β > 0.
///
/// # Example
///
/// ```
/// use statis::stats::{Beta, Distribution};
///
/// let b = Beta::new(2.0_f64, 5.0);
/// assert!((b.mean() - 2.0 / 7.0).abs() < 1e-14);
/// // F(x) = 1 − (1 − x)^5 (1 + 5x) for Beta(2, 5)
/// let x = 0.3_f64;
/// let exact = 1.0 - (0.7_f64).powi(5) * (1.0 + 5.0 * x);
/// assert!((b.cdf(x) - exact).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
}

impl<T: FloatScalar> Beta<T> {
    /// Beta distribution with shapes `alpha` and `beta`.
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }

    /// Density at an end of [0, 1] where the shape on that side is `near`
    /// and the other shape is `far`.
    fn boundary_density(near: T, far: T, log_form: bool) -> T {
        let one = T::one();
        if near < one {
            T::infinity()
        } else if near == one {
            // f = 1 / B(1, far) = far
            log_if(far, log_form)
        } else {
            log_if(T::zero(), log_form)
        }
    }

    /// Starting point for root-finding: the lower- or upper-tail power
    /// approximation when it falls on its side of the mean.
    fn quantile_seed(&self, p: T) -> T {
        let one = T::one();
        let (a, b) = (self.alpha, self.beta);
        let mean = a / (a + b);
        let lb = lbeta(a, b);
        let lower = ((p.ln() + a.ln() + lb) / a).exp();
        if lower < mean {
            return lower;
        }
        let upper = one - (((one - p).ln() + b.ln() + lb) / b).exp();
        if upper > mean && upper < one {
            upper
        } else {
            mean
        }
    }
}

impl<T: FloatScalar> Family<T> for Beta<T> {
    fn params_valid(&self) -> bool {
        self.alpha.is_finite()
            && self.beta.is_finite()
            && self.alpha > T::zero()
            && self.beta > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::one())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        let one = T::one();
        if x == T::zero() {
            return Self::boundary_density(self.alpha, self.beta, log_form);
        }
        if x == one {
            return Self::boundary_density(self.beta, self.alpha, log_form);
        }
        let ln_f = (self.alpha - one) * x.ln() + (self.beta - one) * (-x).ln_1p()
            - lbeta(self.alpha, self.beta);
        exp_if(ln_f, !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        log_if(betainc(self.alpha, self.beta, x).unwrap_or(T::nan()), log_form)
    }

    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T {
        invert_cdf(
            |x| betainc(self.alpha, self.beta, x).unwrap_or(T::nan()),
            |x| self.eval_density(x, false),
            p,
            self.quantile_seed(p),
            T::zero(),
            T::one(),
            settings,
        )
    }

    fn eval_random<R: UniformSource<T> + ?Sized>(&self, src: &mut R) -> T {
        let x = standard_gamma_draw(self.alpha, src);
        let y = standard_gamma_draw(self.beta, src);
        let s = x + y;
        if s > T::zero() {
            return x / s;
        }
        // Both draws underflowed; only tiny shapes get here, where the mass
        // sits at the two ends in proportion α : β.
        if src.next_uniform() < self.alpha / (self.alpha + self.beta) {
            T::one()
        } else {
            T::zero()
        }
    }

    fn eval_mean(&self) -> T {
        self.alpha / (self.alpha + self.beta)
    }

    fn eval_variance(&self) -> T {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + T::one()))
    }
}

family_api!(Beta, alpha: A, beta: B);
