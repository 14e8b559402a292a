//! Student's t distribution.

use crate::random::UniformSource;
use crate::special::{betainc, lbeta, lgamma};
use crate::traits::{cst, FloatScalar};

use super::gamma::standard_gamma_draw;
use super::normal::{standard_normal_draw, standard_normal_quantile, Normal};
use super::root::invert_cdf;
use super::{exp_if, Family, QuantileSettings};

/// Student's t distribution with ν degrees of freedom.
///
/// f(x) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) · (1 + x²/ν)^{−(ν+1)/2}.
/// Valid for ν > 0; ν = +∞ is the standard normal.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, StudentT};
///
/// let t = StudentT::new(5.0_f64);
/// assert!((t.cdf(0.0) - 0.5).abs() < 1e-14);
/// assert!((t.quantile(0.975) - 2.570582).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT<T> {
    dof: T,
}

impl<T: FloatScalar> StudentT<T> {
    /// Student's t distribution with `dof` degrees of freedom.
    pub fn new(dof: T) -> Self {
        Self { dof }
    }

    fn standard_normal(&self) -> Option<Normal<T>> {
        if self.dof.is_infinite() {
            Some(Normal::new(T::zero(), T::one()))
        } else {
            None
        }
    }

    /// Whether ν/(ν + x²) is below machine epsilon, where x² may overflow.
    fn far_tail(&self, x: T) -> bool {
        x.abs() > (self.dof / T::epsilon()).sqrt()
    }

    /// ln(1 + x²/ν), without forming x² in the far tail.
    fn ln_1p_sq(&self, x: T) -> T {
        if self.far_tail(x) {
            let ax = x.abs();
            let two = T::one() + T::one();
            two * ax.ln() - self.dof.ln() + (self.dof / ax / ax).ln_1p()
        } else {
            (x * x / self.dof).ln_1p()
        }
    }

    /// P(X ≤ x) for x ≤ 0, or P(X ≥ −x) by symmetry.
    ///
    /// In the far tail I_t(ν/2, 1/2) is its leading term t^{ν/2} / ((ν/2) B(ν/2, 1/2)),
    /// evaluated through ln t so heavy tails stay representable.
    fn lower_tail(&self, x: T) -> T {
        let half: T = cst(0.5);
        let a = self.dof * half;
        if self.far_tail(x) {
            let ln_t = -self.ln_1p_sq(x);
            return half * (a * ln_t - a.ln() - lbeta(a, half)).exp();
        }
        let t = self.dof / (self.dof + x * x);
        half * betainc(a, half, t).unwrap_or(T::nan())
    }
}

impl<T: FloatScalar> Family<T> for StudentT<T> {
    fn params_valid(&self) -> bool {
        self.dof > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        if let Some(n) = self.standard_normal() {
            return n.eval_density(x, log_form);
        }
        let one = T::one();
        let half: T = cst(0.5);
        let ln_pi: T = cst(1.144_729_885_849_400_2);
        let v = self.dof;
        let ln_f = lgamma((v + one) * half)
            - lgamma(v * half)
            - half * (v.ln() + ln_pi)
            - (v + one) * half * self.ln_1p_sq(x);
        exp_if(ln_f, !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        if let Some(n) = self.standard_normal() {
            return n.eval_distribution(x, log_form);
        }
        let tail = self.lower_tail(x);
        match (x < T::zero(), log_form) {
            (true, false) => tail,
            (true, true) => tail.ln(),
            (false, false) => T::one() - tail,
            (false, true) => (-tail).ln_1p(),
        }
    }

    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T {
        let one = T::one();
        let half: T = cst(0.5);
        if let Some(n) = self.standard_normal() {
            return n.eval_quantile(p, settings);
        }
        if p > half {
            return -self.eval_quantile(one - p, settings);
        }
        if p == half {
            return T::zero();
        }
        let two = one + one;
        let z = standard_normal_quantile(p);
        let seed = if self.dof > two {
            z * (self.dof / (self.dof - two)).sqrt()
        } else {
            z
        };
        invert_cdf(
            |x| self.eval_distribution(x, false),
            |x| self.eval_density(x, false),
            p,
            seed,
            T::neg_infinity(),
            T::infinity(),
            settings,
        )
    }

    fn eval_random<R: UniformSource<T> + ?Sized>(&self, src: &mut R) -> T {
        let z: T = standard_normal_draw(src);
        if self.dof.is_infinite() {
            return z;
        }
        let half: T = cst(0.5);
        let two = T::one() + T::one();
        let chi2 = two * standard_gamma_draw(self.dof * half, src);
        z / (chi2 / self.dof).sqrt()
    }

    fn eval_mean(&self) -> T {
        if self.dof > T::one() {
            T::zero()
        } else {
            T::nan()
        }
    }

    fn eval_variance(&self) -> T {
        let one = T::one();
        let two = one + one;
        if self.dof.is_infinite() {
            one
        } else if self.dof > two {
            self.dof / (self.dof - two)
        } else if self.dof > one {
            T::infinity()
        } else {
            T::nan()
        }
    }
}

family_api!(StudentT, dof: A);
