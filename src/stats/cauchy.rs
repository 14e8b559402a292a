//! Cauchy distribution.

use crate::traits::{cst, FloatScalar};

use super::{exp_if, log_if, Family, QuantileSettings};

/// Cauchy distribution with location μ and scale σ.
///
/// f(x) = 1 / (πσ(1 + z²)), z = (x − μ)/σ. Valid for finite μ and finite
/// σ > 0. Mean and variance do not exist and are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy<T> {
    location: T,
    scale: T,
}

impl<T: FloatScalar> Cauchy<T> {
    /// Cauchy distribution with `location` μ and `scale` σ.
    pub fn new(location: T, scale: T) -> Self {
        Self { location, scale }
    }
}

impl<T: FloatScalar> Family<T> for Cauchy<T> {
    fn params_valid(&self) -> bool {
        self.location.is_finite() && self.scale.is_finite() && self.scale > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        let z = (x - self.location) / self.scale;
        let ln_pi: T = cst(1.144_729_885_849_400_2);
        exp_if(-ln_pi - self.scale.ln() - (z * z).ln_1p(), !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        let z = (x - self.location) / self.scale;
        let pi: T = cst(core::f64::consts::PI);
        let half: T = cst(0.5);
        // atan(-1/z)/π avoids cancelling against ½ in the lower tail.
        let f = if z < -T::one() {
            (-z.recip()).atan() / pi
        } else {
            half + z.atan() / pi
        };
        log_if(f, log_form)
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        let pi: T = cst(core::f64::consts::PI);
        let half: T = cst(0.5);
        // tan(π(p − ½)) = −1/tan(πp), with p kept away from the ½ offset.
        if p > half {
            self.location + self.scale / (pi * (T::one() - p)).tan()
        } else {
            self.location - self.scale / (pi * p).tan()
        }
    }

    fn eval_mean(&self) -> T {
        T::nan()
    }

    fn eval_variance(&self) -> T {
        T::nan()
    }
}

family_api!(Cauchy, location: A, scale: B);
