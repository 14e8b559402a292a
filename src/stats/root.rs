//! Bounded inversion of distribution functions.
//!
//! Families without a closed-form quantile solve `F(x) = p` here. Both
//! solvers run for a fixed maximum number of steps and always return a value.

use crate::traits::{cst, FloatScalar};

/// Tolerances and budgets for quantile root-finding.
///
/// ```
/// use statis::stats::{Distribution, Gamma, QuantileSettings};
///
/// let g = Gamma::new(2.5_f64, 1.0);
/// let loose = QuantileSettings { f_tol: 1e-6, ..QuantileSettings::default() };
/// let x = g.quantile_with(0.9, &loose);
/// assert!((g.cdf(x) - 0.9).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileSettings<T> {
    /// Accept `x` once `|F(x) − p| ≤ f_tol · min(p, 1 − p)`.
    pub f_tol: T,
    /// Accept the bracket midpoint once the bracket's width is at most
    /// `x_tol` times its larger endpoint magnitude.
    pub x_tol: T,
    /// Maximum Newton/bisection steps.
    pub max_iter: usize,
    /// Maximum steps when bracketing an unbounded end of the support.
    pub max_expand: usize,
}

impl<T: FloatScalar> Default for QuantileSettings<T> {
    fn default() -> Self {
        Self {
            f_tol: T::epsilon() * cst(64.0),
            x_tol: T::epsilon() * cst(4.0),
            max_iter: 200,
            max_expand: 256,
        }
    }
}

/// Solve `cdf(x) = p` for a continuous distribution with support `[lo, hi]`.
///
/// Infinite ends are bracketed by stepping away from `x0`, with a growth
/// factor that doubles after every step. The bracket is then narrowed by
/// Newton steps on `cdf` with `pdf` as derivative. A step is replaced by a
/// bisection whenever it leaves the bracket, the density is zero or not
/// finite, or it is not at most half the previous step. `p` must lie in
/// (0, 1).
pub(crate) fn invert_cdf<T: FloatScalar>(
    cdf: impl Fn(T) -> T,
    pdf: impl Fn(T) -> T,
    p: T,
    x0: T,
    lo: T,
    hi: T,
    settings: &QuantileSettings<T>,
) -> T {
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let half: T = cst(0.5);

    let (mut lo, mut hi) = match bracket(&cdf, p, x0, lo, hi, settings) {
        Ok(b) => b,
        Err(end) => {
            tracing::debug!(p = ?p, x = ?end, "quantile bracket not closed");
            return end;
        }
    };

    let f_tol = settings.f_tol * p.min(one - p);
    let mut x = if x0 > lo && x0 < hi { x0 } else { split(lo, hi) };
    let mut last_step = hi - lo;

    for _ in 0..settings.max_iter {
        let f = cdf(x) - p;
        if f.is_nan() {
            return f;
        }
        if f.abs() <= f_tol {
            return x;
        }
        if f < zero {
            lo = x;
        } else {
            hi = x;
        }
        let scale = lo.abs().max(hi.abs()).max(T::min_positive_value());
        if hi - lo <= settings.x_tol * scale {
            return half * (lo + hi);
        }

        let d = pdf(x);
        let newton = x - f / d;
        let next = if d.is_finite()
            && d > zero
            && newton > lo
            && newton < hi
            && two * (newton - x).abs() <= last_step
        {
            newton
        } else {
            split(lo, hi)
        };
        last_step = (next - x).abs();
        x = next;
    }

    tracing::debug!(
        p = ?p,
        x = ?x,
        max_iter = settings.max_iter,
        "quantile inversion hit its iteration cap"
    );
    x
}

/// Bisection point of `[lo, hi]`: the geometric mean when both ends share a
/// sign and differ by more than a factor of four, the midpoint otherwise.
fn split<T: FloatScalar>(lo: T, hi: T) -> T {
    let four: T = cst(4.0);
    if lo > T::zero() && hi > four * lo {
        lo.sqrt() * hi.sqrt()
    } else if hi < T::zero() && lo < four * hi {
        -((-lo).sqrt() * (-hi).sqrt())
    } else {
        cst::<T>(0.5) * (lo + hi)
    }
}

/// [`invert_cdf`] for a distribution on [0, ∞), solved in `u = ln x`.
///
/// `log_pdf` is the log density in `x`. Working in `u` keeps Newton steps
/// well scaled when the quantile lies many decades away from the seed.
pub(crate) fn invert_cdf_log_scale<T: FloatScalar>(
    cdf: impl Fn(T) -> T,
    log_pdf: impl Fn(T) -> T,
    p: T,
    x0: T,
    settings: &QuantileSettings<T>,
) -> T {
    let seed = if x0 > T::zero() && x0.is_finite() {
        x0.ln()
    } else {
        T::zero()
    };
    invert_cdf(
        |u: T| cdf(u.exp()),
        |u: T| (log_pdf(u.exp()) + u).exp(),
        p,
        seed,
        T::neg_infinity(),
        T::infinity(),
        settings,
    )
    .exp()
}

/// Replace infinite ends of `[lo, hi]` with finite points whose CDF values
/// straddle `p`.
///
/// The distance from the starting point is multiplied by 2, 4, 8, ... so
/// every finite magnitude is reached within a few dozen steps. `Err` carries
/// the answer when no finite bracket exists: the infinite end itself when the
/// CDF has not crossed `p` at the largest finite value, otherwise the
/// furthest point reached before `max_expand` ran out.
fn bracket<T: FloatScalar>(
    cdf: &impl Fn(T) -> T,
    p: T,
    x0: T,
    mut lo: T,
    mut hi: T,
    settings: &QuantileSettings<T>,
) -> Result<(T, T), T> {
    let two = T::one() + T::one();
    let start = x0.abs().max(T::one());

    if hi.is_infinite() {
        let origin = if x0 > lo { x0 } else { lo };
        let mut dist = start;
        let mut growth = two;
        let mut b = if x0 > lo { x0 } else { lo + dist };
        let mut closed = false;
        for _ in 0..settings.max_expand {
            if cdf(b) >= p {
                hi = b;
                closed = true;
                break;
            }
            lo = b;
            if b >= T::max_value() {
                return Err(T::infinity());
            }
            dist = dist * growth;
            growth = growth * two;
            b = (origin + dist).min(T::max_value());
        }
        if !closed {
            return Err(b);
        }
    }

    if lo.is_infinite() {
        let origin = if x0 < hi { x0 } else { hi };
        let mut dist = start;
        let mut growth = two;
        let mut a = if x0 < hi { x0 } else { hi - dist };
        let mut closed = false;
        for _ in 0..settings.max_expand {
            if cdf(a) <= p {
                lo = a;
                closed = true;
                break;
            }
            hi = a;
            if a <= -T::max_value() {
                return Err(T::neg_infinity());
            }
            dist = dist * growth;
            growth = growth * two;
            a = (origin - dist).max(-T::max_value());
        }
        if !closed {
            return Err(a);
        }
    }

    Ok((lo, hi))
}

/// Smallest integer `k` in `[lo, hi]` with `cdf(k) ≥ p`, for a distribution
/// on the integers. `p` must lie in (0, 1) and `lo` must be finite.
///
/// The search starts at `seed`; an infinite `hi` is bracketed by doubling
/// steps.
pub(crate) fn invert_discrete_cdf<T: FloatScalar>(
    cdf: impl Fn(T) -> T,
    p: T,
    seed: T,
    lo: T,
    hi: T,
    settings: &QuantileSettings<T>,
) -> T {
    let one = T::one();
    let two = one + one;

    // Invariant: cdf(below) < p <= cdf(above).
    let mut below = lo - one;
    let mut above = hi;
    let k = if seed.is_finite() { seed.floor().max(lo).min(hi) } else { lo };

    if hi.is_infinite() {
        let mut k = k;
        let mut step = one;
        let mut found = false;
        for _ in 0..settings.max_expand {
            if cdf(k) >= p {
                above = k;
                found = true;
                break;
            }
            below = k;
            k = k + step;
            step = step * two;
        }
        if !found {
            tracing::debug!(p = ?p, "discrete quantile bracket expansion exhausted");
            return k;
        }
    } else if cdf(k) >= p {
        above = k;
    } else {
        below = k;
    }

    for _ in 0..settings.max_iter {
        if above - below <= one {
            return above;
        }
        let mid = ((below + above) / two).floor();
        if mid <= below || mid >= above {
            return above;
        }
        if cdf(mid) >= p {
            above = mid;
        } else {
            below = mid;
        }
    }

    tracing::debug!(p = ?p, k = ?above, "discrete quantile search hit its iteration cap");
    above
}
