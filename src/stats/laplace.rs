//! Laplace (double exponential) distribution.

use crate::traits::{cst, FloatScalar};

use super::{exp_if, Family, QuantileSettings};

/// Laplace distribution with location μ and scale b.
///
/// f(x) = e^{−|x−μ|/b} / (2b). Valid for finite μ and finite b > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace<T> {
    location: T,
    scale: T,
}

impl<T: FloatScalar> Laplace<T> {
    /// Laplace distribution with `location` μ and `scale` b.
    pub fn new(location: T, scale: T) -> Self {
        Self { location, scale }
    }
}

impl<T: FloatScalar> Family<T> for Laplace<T> {
    fn params_valid(&self) -> bool {
        self.location.is_finite() && self.scale.is_finite() && self.scale > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        let z = (x - self.location).abs() / self.scale;
        exp_if(-z - (self.scale + self.scale).ln(), !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        let z = (x - self.location) / self.scale;
        let half: T = cst(0.5);
        let ln_2: T = cst(core::f64::consts::LN_2);
        if z < T::zero() {
            exp_if(z - ln_2, !log_form)
        } else if log_form {
            (-half * (-z).exp()).ln_1p()
        } else {
            T::one() - half * (-z).exp()
        }
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        let half: T = cst(0.5);
        let two = T::one() + T::one();
        if p < half {
            self.location + self.scale * (two * p).ln()
        } else {
            self.location - self.scale * (two * (T::one() - p)).ln()
        }
    }

    fn eval_mean(&self) -> T {
        self.location
    }

    fn eval_variance(&self) -> T {
        let two = T::one() + T::one();
        two * self.scale * self.scale
    }
}

family_api!(Laplace, location: A, scale: B);
