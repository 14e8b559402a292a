//! Conversions at the boundary between log-space and true-scale results.

use crate::traits::FloatScalar;

/// `ln(value)` when `want_log`, otherwise `value` unchanged.
///
/// ```
/// use statis::stats::log_if;
///
/// assert_eq!(log_if(1.0_f64, true), 0.0);
/// assert_eq!(log_if(0.0_f64, true), f64::NEG_INFINITY);
/// assert_eq!(log_if(0.25_f64, false), 0.25);
/// ```
#[inline]
pub fn log_if<T: FloatScalar>(value: T, want_log: bool) -> T {
    if want_log {
        value.ln()
    } else {
        value
    }
}

/// `exp(value)` when `want_true_scale`, otherwise `value` unchanged.
///
/// Formulas evaluated in log space finish with
/// `exp_if(log_value, !log_form)`.
///
/// ```
/// use statis::stats::exp_if;
///
/// assert_eq!(exp_if(0.0_f64, true), 1.0);
/// assert_eq!(exp_if(f64::NEG_INFINITY, true), 0.0);
/// assert_eq!(exp_if(-3.0_f64, false), -3.0);
/// ```
#[inline]
pub fn exp_if<T: FloatScalar>(value: T, want_true_scale: bool) -> T {
    if want_true_scale {
        value.exp()
    } else {
        value
    }
}
