use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs()
}

/// Counts how many uniforms a draw consumes.
struct Counting {
    inner: StdRng,
    draws: usize,
}

impl Counting {
    fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl UniformSource<f64> for Counting {
    fn next_uniform(&mut self) -> f64 {
        self.draws += 1;
        self.inner.next_uniform()
    }
}

/// Log forms agree with the true scale, the CDF is non-decreasing, and the
/// quantile undoes the CDF.
fn check_continuous<D: Distribution<f64> + core::fmt::Debug>(d: D, xs: &[f64]) {
    let mut prev = 0.0;
    for &x in xs {
        let f = d.density(x, false);
        let lf = d.density(x, true);
        assert!(approx_eq(lf, f.ln(), 1e-12 * lf.abs().max(1.0)), "{d:?} density at {x}");

        let c = d.distribution(x, false);
        let lc = d.distribution(x, true);
        assert!(approx_eq(lc, c.ln(), 1e-12 * lc.abs().max(1.0)), "{d:?} cdf at {x}");
        assert!(c >= prev, "{d:?} cdf decreases at {x}");
        prev = c;

        if c > 1e-12 && c < 1.0 - 1e-12 {
            let back = d.quantile(c);
            assert!(
                approx_eq(back, x, 1e-7 * x.abs().max(1.0)),
                "{d:?} quantile({c}) = {back}, expected {x}"
            );
        }
    }
}

/// The quantile at a tiny `p` is finite and maps back to `p` through the CDF.
fn check_deep_tail<D: Distribution<f64> + core::fmt::Debug>(d: D, p: f64) {
    let x = d.quantile(p);
    assert!(x.is_finite(), "{d:?} quantile({p}) = {x}");
    let back = d.cdf(x);
    assert!(rel_eq(back, p, 1e-8), "{d:?} quantile({p}) = {x}, cdf = {back}");
}

fn sample_mean<D: Distribution<f64>>(d: &D, n: usize, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let xs = d.random_n(n, &mut rng);
    xs.iter().sum::<f64>() / n as f64
}

// ======================== Engine ========================

#[test]
fn invalid_parameters_are_nan_everywhere() {
    let d = Normal::new(0.0_f64, -1.0);
    assert!(!d.is_valid());
    assert!(d.density(0.0, false).is_nan());
    assert!(d.density(0.0, true).is_nan());
    assert!(d.distribution(0.0, false).is_nan());
    assert!(d.distribution(0.0, true).is_nan());
    assert!(d.quantile(0.5).is_nan());
    assert!(d.mean().is_nan());
    assert!(d.variance().is_nan());
    assert_eq!(d.validated().unwrap_err(), StatsError::InvalidParameter);
    assert!(Normal::new(0.0_f64, 1.0).validated().is_ok());
}

#[test]
fn invalid_random_consumes_nothing() {
    let mut src = Counting::new(1);
    assert!(Gamma::new(-1.0_f64, 1.0).random(&mut src).is_nan());
    assert!(Poisson::new(f64::NAN).random(&mut src).is_nan());
    let xs = Beta::new(0.0_f64, 1.0).random_n(5, &mut src);
    assert!(xs.iter().all(|x| x.is_nan()));
    assert_eq!(src.draws, 0);

    let _ = Normal::new(0.0_f64, 1.0).random(&mut src);
    assert_eq!(src.draws, 1);
}

#[test]
fn nan_argument_is_nan() {
    let d = Exponential::new(1.0_f64);
    assert!(d.density(f64::NAN, false).is_nan());
    assert!(d.distribution(f64::NAN, true).is_nan());
    assert!(d.quantile(f64::NAN).is_nan());
}

#[test]
fn outside_support() {
    let d = Gamma::new(2.0_f64, 1.0);
    assert_eq!(d.density(-1.0, false), 0.0);
    assert_eq!(d.density(-1.0, true), f64::NEG_INFINITY);
    assert_eq!(d.distribution(-1.0, false), 0.0);
    assert_eq!(d.distribution(f64::INFINITY, false), 1.0);
    assert_eq!(d.distribution(f64::INFINITY, true), 0.0);

    let u = Uniform::new(1.0_f64, 3.0);
    assert_eq!(u.distribution(3.5, false), 1.0);
    assert_eq!(u.density(0.5, false), 0.0);
}

#[test]
fn quantile_ends_and_out_of_range() {
    let n = Normal::new(0.0_f64, 1.0);
    assert_eq!(n.quantile(0.0), f64::NEG_INFINITY);
    assert_eq!(n.quantile(1.0), f64::INFINITY);
    assert!(n.quantile(-0.1).is_nan());
    assert!(n.quantile(1.1).is_nan());

    let b = Beta::new(2.0_f64, 3.0);
    assert_eq!(b.quantile(0.0), 0.0);
    assert_eq!(b.quantile(1.0), 1.0);
    assert_eq!(Poisson::new(2.0_f64).quantile(1.0), f64::INFINITY);
}

// ======================== Normal ========================

#[test]
fn normal_distribution_value() {
    let n = Normal::new(1.0_f64, 2.0);
    assert!(approx_eq(n.distribution(2.0, false), 0.6914624612740131, 1e-7));
    assert!(approx_eq(Normal::new(0.0_f64, 1.0).quantile(0.975), 1.959964, 1e-6));
}

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0_f64, 1.0);
    let expected = 1.0 / (2.0 * core::f64::consts::PI).sqrt();
    assert!(approx_eq(n.pdf(0.0), expected, 1e-14));
    assert!(approx_eq(n.cdf(1.0), 0.8413447460685429, 1e-12));
    assert!(approx_eq(n.cdf(-1.0), 0.15865525393145702, 1e-12));
}

#[test]
fn normal_log_cdf_deep_tail() {
    // ln Φ(−37) ≈ −689.0305855768905
    let n = Normal::new(0.0_f64, 1.0);
    assert!(rel_eq(n.distribution(-37.0, true), -689.0305855768905, 1e-10));
}

#[test]
fn normal_properties() {
    check_continuous(Normal::new(3.0_f64, 2.0), &[-4.0, 0.0, 2.9, 3.0, 5.5, 11.0]);
    let n = Normal::new(3.0_f64, 2.0);
    assert_eq!(n.mean(), 3.0);
    assert_eq!(n.variance(), 4.0);
}

#[test]
fn normal_f32() {
    let n = Normal::new(0.0_f32, 1.0);
    assert!((n.cdf(0.0) - 0.5).abs() < 1e-6);
    assert!((n.quantile(0.975) - 1.959964).abs() < 1e-4);
}

#[test]
fn normal_free_functions_resolve_types() {
    let p = normal::distribution(2_i32, 1.0_f32, 2_u8, false);
    let q: f64 = p;
    assert!(approx_eq(q, 0.6914624612740131, 1e-7));

    let single: f32 = normal::density(0.0_f32, 0.0_f32, 1.0_f32, false);
    assert!((single - 0.398_942_3).abs() < 1e-6);

    assert!(normal::quantile(0.5_f64, 0_i32, 0_i32).is_nan());
}

// ======================== LogNormal ========================

#[test]
fn lognormal_values() {
    let d = LogNormal::new(0.0_f64, 1.0);
    assert_eq!(d.pdf(0.0), 0.0);
    assert!(approx_eq(d.cdf(1.0), 0.5, 1e-15));
    assert!(approx_eq(d.mean(), 0.5_f64.exp(), 1e-14));
    assert!(approx_eq(d.variance(), (1.0_f64.exp() - 1.0) * 1.0_f64.exp(), 1e-13));
    check_continuous(LogNormal::new(0.5_f64, 0.75), &[0.05, 0.5, 1.0, 2.0, 9.0]);
}

// ======================== Exponential ========================

#[test]
fn exponential_values() {
    let e = Exponential::new(2.0_f64);
    assert!(approx_eq(e.pdf(0.0), 2.0, 1e-15));
    assert!(approx_eq(e.cdf(1.0), 1.0 - (-2.0_f64).exp(), 1e-15));
    assert!(approx_eq(e.mean(), 0.5, 1e-15));
    assert!(approx_eq(e.variance(), 0.25, 1e-15));
    check_continuous(e, &[1e-6, 0.1, 1.0, 5.0]);
}

#[test]
fn exponential_log_cdf_near_one() {
    // ln(1 − e^{−50}) ≈ −e^{−50}
    let e = Exponential::new(1.0_f64);
    assert!(rel_eq(e.distribution(50.0, true), -(-50.0_f64).exp(), 1e-12));
}

// ======================== Weibull ========================

#[test]
fn weibull_density_value() {
    let w = Weibull::new(2.0_f64, 3.0);
    assert!(approx_eq(w.density(1.8, false), 0.279070, 1e-6));
    assert!(approx_eq(w.density(1.8, true), 0.279070_f64.ln(), 1e-5));
}

#[test]
fn weibull_zero_scale_is_nan() {
    assert!(Weibull::new(2.0_f64, 0.0).density(1.8, false).is_nan());
    assert!(weibull::density(1.8_f64, 2_i32, 0_i32, false).is_nan());
}

#[test]
fn weibull_density_at_zero_by_shape() {
    assert_eq!(Weibull::new(0.5_f64, 1.0).pdf(0.0), f64::INFINITY);
    assert!(approx_eq(Weibull::new(1.0_f64, 4.0).pdf(0.0), 0.25, 1e-15));
    assert_eq!(Weibull::new(2.0_f64, 1.0).pdf(0.0), 0.0);
}

#[test]
fn weibull_properties() {
    check_continuous(Weibull::new(1.5_f64, 2.0), &[0.01, 0.5, 2.0, 6.0]);
    let w = Weibull::new(1.0_f64, 2.0);
    // shape 1 is exponential with mean λ
    assert!(approx_eq(w.mean(), 2.0, 1e-13));
    assert!(approx_eq(w.variance(), 4.0, 1e-12));
}

// ======================== Gamma ========================

#[test]
fn gamma_cdf_value() {
    // P(2, 2) = 1 − 3e^{−2}
    let g = Gamma::new(2.0_f64, 1.0);
    assert!(approx_eq(g.cdf(2.0), 1.0 - 3.0 * (-2.0_f64).exp(), 1e-14));
}

#[test]
fn gamma_density_at_zero_by_shape() {
    assert_eq!(Gamma::new(0.5_f64, 1.0).pdf(0.0), f64::INFINITY);
    assert!(approx_eq(Gamma::new(1.0_f64, 2.0).pdf(0.0), 0.5, 1e-15));
    assert_eq!(Gamma::new(3.0_f64, 1.0).pdf(0.0), 0.0);
}

#[test]
fn gamma_quantile_roundtrip_across_shapes() {
    for &k in &[0.1, 0.5, 1.0, 2.5, 30.0, 1000.0] {
        let g = Gamma::new(k, 2.0_f64);
        for &p in &[1e-10, 0.01, 0.5, 0.99, 1.0 - 1e-10] {
            let x = g.quantile(p);
            assert!(x.is_finite() && x > 0.0, "k={k} p={p}: {x}");
            let back = g.cdf(x);
            let tol = 1e-9 * p.min(1.0 - p) + 1e-14;
            assert!((back - p).abs() <= tol, "k={k} p={p}: F({x}) = {back}");
        }
    }
}

#[test]
fn gamma_exponential_equivalence() {
    let g = Gamma::new(1.0_f64, 0.5);
    let e = Exponential::new(2.0_f64);
    for &x in &[0.1, 0.5, 1.0, 3.0] {
        assert!(approx_eq(g.pdf(x), e.pdf(x), 1e-14));
        assert!(approx_eq(g.cdf(x), e.cdf(x), 1e-14));
    }
}

#[test]
fn gamma_mean_variance() {
    let g = Gamma::new(3.0_f64, 2.0);
    assert!(approx_eq(g.mean(), 6.0, 1e-14));
    assert!(approx_eq(g.variance(), 12.0, 1e-14));
    assert!(!Gamma::new(f64::INFINITY, 1.0).is_valid());
}

// ======================== InverseGamma ========================

#[test]
fn inverse_gamma_matches_gamma_survival() {
    let (a, b) = (2.5_f64, 1.5);
    let ig = InverseGamma::new(a, b);
    let g = Gamma::new(a, 1.0);
    for &x in &[0.1, 0.5, 1.0, 4.0] {
        assert!(approx_eq(ig.cdf(x), 1.0 - g.cdf(b / x), 1e-13));
    }
    assert_eq!(ig.pdf(0.0), 0.0);
    check_continuous(ig, &[0.05, 0.3, 1.0, 5.0, 40.0]);
}

#[test]
fn inverse_gamma_moments() {
    let d = InverseGamma::new(3.0_f64, 2.0);
    assert!(approx_eq(d.mean(), 1.0, 1e-14));
    assert!(approx_eq(d.variance(), 1.0, 1e-14));
    assert_eq!(InverseGamma::new(1.0_f64, 2.0).mean(), f64::INFINITY);
    assert_eq!(InverseGamma::new(1.5_f64, 2.0).variance(), f64::INFINITY);
}

// ======================== Beta ========================

#[test]
fn beta_uniform_case() {
    let b = Beta::new(1.0_f64, 1.0);
    assert!(approx_eq(b.pdf(0.3), 1.0, 1e-14));
    assert!(approx_eq(b.cdf(0.3), 0.3, 1e-14));
}

#[test]
fn beta_boundary_densities() {
    assert_eq!(Beta::new(0.5_f64, 2.0).pdf(0.0), f64::INFINITY);
    assert!(approx_eq(Beta::new(1.0_f64, 3.0).pdf(0.0), 3.0, 1e-15));
    assert_eq!(Beta::new(2.0_f64, 2.0).pdf(0.0), 0.0);
    assert!(approx_eq(Beta::new(2.0_f64, 1.0).pdf(1.0), 2.0, 1e-15));
    assert_eq!(Beta::new(2.0_f64, 0.5).pdf(1.0), f64::INFINITY);
}

#[test]
fn beta_quantile_roundtrip() {
    for &(a, b) in &[(0.5_f64, 0.5), (2.0, 5.0), (0.1, 3.0), (50.0, 20.0)] {
        let d = Beta::new(a, b);
        for &p in &[1e-3, 0.2, 0.5, 0.9, 0.999] {
            let x = d.quantile(p);
            let back = d.cdf(x);
            assert!((back - p).abs() <= 1e-9 * p.min(1.0 - p) + 1e-14, "Beta({a},{b}) p={p}: {x}");
        }
    }
}

#[test]
fn beta_mean_variance() {
    let b = Beta::new(2.0_f64, 3.0);
    assert!(approx_eq(b.mean(), 0.4, 1e-15));
    assert!(approx_eq(b.variance(), 0.04, 1e-15));
}

// ======================== ChiSquared ========================

#[test]
fn chi_squared_values() {
    let c = ChiSquared::new(1.0_f64);
    assert!(approx_eq(c.cdf(3.841458820694124), 0.95, 1e-12));
    let c3 = ChiSquared::new(3.0_f64);
    assert!(approx_eq(c3.quantile(0.95), 7.814727903251178, 1e-9));
    check_continuous(ChiSquared::new(4.0_f64), &[0.2, 1.0, 4.0, 12.0]);
}

// ======================== StudentT ========================

#[test]
fn student_t_values() {
    let t = StudentT::new(1.0_f64);
    assert!(approx_eq(t.cdf(0.0), 0.5, 1e-15));
    // ν = 1 is the standard Cauchy
    assert!(approx_eq(t.cdf(1.0), 0.75, 1e-14));
    assert!(approx_eq(StudentT::new(5.0_f64).quantile(0.975), 2.570582, 1e-6));
}

#[test]
fn student_t_infinite_dof_is_normal() {
    let t = StudentT::new(f64::INFINITY);
    let n = Normal::new(0.0_f64, 1.0);
    assert!(t.is_valid());
    for &x in &[-2.0, 0.0, 1.0] {
        assert_eq!(t.pdf(x), n.pdf(x));
        assert_eq!(t.cdf(x), n.cdf(x));
    }
    assert_eq!(t.quantile(0.9), n.quantile(0.9));
    assert_eq!(t.variance(), 1.0);
}

#[test]
fn student_t_quantile_roundtrip() {
    for &v in &[0.5_f64, 1.0, 3.0, 30.0] {
        let t = StudentT::new(v);
        for &p in &[1e-6, 0.05, 0.5, 0.95] {
            let x = t.quantile(p);
            let back = t.cdf(x);
            assert!((back - p).abs() <= 1e-9 * p.min(1.0 - p) + 1e-14, "t({v}) p={p}: {x}");
        }
    }
}

#[test]
fn student_t_moments() {
    assert!(StudentT::new(1.0_f64).mean().is_nan());
    assert_eq!(StudentT::new(2.0_f64).variance(), f64::INFINITY);
    assert!(approx_eq(StudentT::new(5.0_f64).variance(), 5.0 / 3.0, 1e-15));
    assert!(StudentT::new(0.0_f64).pdf(0.0).is_nan());
}

// ======================== Cauchy / Laplace / Logistic ========================

#[test]
fn cauchy_values() {
    let c = Cauchy::new(0.0_f64, 1.0);
    assert!(approx_eq(c.cdf(1.0), 0.75, 1e-15));
    assert!(approx_eq(c.quantile(0.75), 1.0, 1e-14));
    // lower tail keeps relative accuracy
    let tail = c.cdf(-1e10);
    assert!(rel_eq(tail, 1.0 / (core::f64::consts::PI * 1e10), 1e-9));
    assert!(c.mean().is_nan());
    check_continuous(Cauchy::new(1.0_f64, 0.5), &[-20.0, -1.0, 1.0, 3.0]);
}

#[test]
fn laplace_values() {
    let d = Laplace::new(0.0_f64, 1.0);
    assert!(approx_eq(d.cdf(0.0), 0.5, 1e-15));
    assert!(approx_eq(d.cdf(-1.0), 0.5 * (-1.0_f64).exp(), 1e-15));
    assert!(approx_eq(Laplace::new(1.0_f64, 3.0).variance(), 18.0, 1e-14));
    check_continuous(Laplace::new(-1.0_f64, 2.0), &[-9.0, -1.5, -1.0, 0.0, 7.0]);
}

#[test]
fn logistic_values() {
    let d = Logistic::new(0.0_f64, 1.0);
    assert!(approx_eq(d.cdf(0.0), 0.5, 1e-15));
    assert!(approx_eq(d.pdf(0.0), 0.25, 1e-15));
    assert!(approx_eq(d.distribution(-800.0, true), -800.0, 1e-12));
    assert!(rel_eq(d.distribution(40.0, true), -(-40.0_f64).exp(), 1e-12));
    check_continuous(Logistic::new(2.0_f64, 0.5), &[-3.0, 1.0, 2.0, 4.0, 9.0]);
}

// ======================== Uniform ========================

#[test]
fn uniform_values() {
    let u = Uniform::new(2.0_f64, 6.0);
    assert!(approx_eq(u.pdf(3.0), 0.25, 1e-15));
    assert!(approx_eq(u.cdf(3.0), 0.25, 1e-15));
    assert!(approx_eq(u.quantile(0.5), 4.0, 1e-15));
    assert!(approx_eq(u.mean(), 4.0, 1e-15));
    assert!(approx_eq(u.variance(), 16.0 / 12.0, 1e-15));
    assert!(!Uniform::new(1.0_f64, 1.0).is_valid());
    assert!(!Uniform::new(0.0_f64, f64::INFINITY).is_valid());
}

// ======================== Bernoulli ========================

#[test]
fn bernoulli_mass_and_cdf() {
    let b = Bernoulli::new(0.3_f64);
    assert!(approx_eq(b.pdf(0.0), 0.7, 1e-15));
    assert!(approx_eq(b.pdf(1.0), 0.3, 1e-15));
    assert_eq!(b.pdf(2.0), 0.0);
    assert_eq!(b.pdf(0.5), 0.0);
    assert!(approx_eq(b.cdf(0.5), 0.7, 1e-15));
    assert_eq!(b.cdf(1.0), 1.0);
    assert_eq!(b.quantile(0.7), 0.0);
    assert_eq!(b.quantile(0.71), 1.0);
}

#[test]
fn bernoulli_edge_probabilities() {
    let zero = Bernoulli::new(0.0_f64);
    assert_eq!(zero.pdf(0.0), 1.0);
    assert_eq!(zero.density(1.0, true), f64::NEG_INFINITY);
    let one = Bernoulli::new(1.0_f64);
    assert_eq!(one.pdf(1.0), 1.0);
    assert!(Bernoulli::new(1.5_f64).pdf(1.0).is_nan());
}

// ======================== Binomial ========================

#[test]
fn binomial_mass_sums_to_one() {
    let b = Binomial::new(20.0_f64, 0.3);
    let total: f64 = (0..=20).map(|k| b.pdf(k as f64)).sum();
    assert!(approx_eq(total, 1.0, 1e-13));
    let mut acc = 0.0;
    for k in 0..20 {
        acc += b.pdf(k as f64);
        assert!(approx_eq(b.cdf(k as f64), acc, 1e-12), "k={k}");
    }
}

#[test]
fn binomial_degenerate_probabilities() {
    let b = Binomial::new(5.0_f64, 0.0);
    assert_eq!(b.pdf(0.0), 1.0);
    assert_eq!(b.pdf(3.0), 0.0);
    assert_eq!(b.cdf(0.0), 1.0);
    let b = Binomial::new(5.0_f64, 1.0);
    assert_eq!(b.pdf(5.0), 1.0);
    assert_eq!(b.cdf(4.0), 0.0);
}

#[test]
fn binomial_quantile_is_smallest_k() {
    let b = Binomial::new(10.0_f64, 0.4);
    for &p in &[0.01, 0.3, 0.5, 0.77, 0.999] {
        let k = b.quantile(p);
        assert!(b.cdf(k) >= p);
        if k > 0.0 {
            assert!(b.cdf(k - 1.0) < p);
        }
    }
    assert!(!Binomial::new(3.5_f64, 0.5).is_valid());
    assert!(!Binomial::new(-1.0_f64, 0.5).is_valid());
}

// ======================== Poisson ========================

#[test]
fn poisson_mass_and_cdf() {
    let d = Poisson::new(4.0_f64);
    let mut acc = 0.0;
    for k in 0..15 {
        let m = d.pdf(k as f64);
        acc += m;
        assert!(approx_eq(d.cdf(k as f64), acc, 1e-13), "k={k}");
        assert!(approx_eq(d.cdf(k as f64 + 0.5), acc, 1e-13));
    }
    assert_eq!(d.pdf(2.5), 0.0);
    assert_eq!(d.density(-1.0, true), f64::NEG_INFINITY);
}

#[test]
fn poisson_quantile_is_smallest_k() {
    let d = Poisson::new(50.0_f64);
    for &p in &[1e-8, 0.2, 0.5, 0.9, 1.0 - 1e-8] {
        let k = d.quantile(p);
        assert!(d.cdf(k) >= p, "p={p} k={k}");
        if k > 0.0 {
            assert!(d.cdf(k - 1.0) < p, "p={p} k={k}");
        }
    }
}

// ======================== Deep tails ========================

#[test]
fn gamma_family_deep_lower_tail() {
    for &p in &[1e-100_f64, 1e-300] {
        check_deep_tail(Gamma::new(500.0_f64, 1.0), p);
        check_deep_tail(Gamma::new(1e4_f64, 1.0), p);
        check_deep_tail(ChiSquared::new(1000.0_f64), p);
        check_deep_tail(InverseGamma::new(300.0_f64, 2.0), p);
        check_deep_tail(InverseGamma::new(2.0_f64, 1.0), p);
    }
    // small shapes put the 1e-100 quantile near 1e-200
    check_deep_tail(Gamma::new(0.5_f64, 3.0), 1e-100);
}

#[test]
fn beta_deep_lower_tail() {
    for &p in &[1e-100_f64, 1e-300] {
        check_deep_tail(Beta::new(50.0_f64, 20.0), p);
    }
}

#[test]
fn student_t_heavy_tails() {
    check_deep_tail(StudentT::new(3.0_f64), 1e-100);
    check_deep_tail(StudentT::new(3.0_f64), 1e-300);
    check_deep_tail(StudentT::new(0.5_f64), 1e-100);
    check_deep_tail(StudentT::new(0.1_f64), 1e-20);
    check_deep_tail(StudentT::new(30.0_f64), 1e-300);

    // the 1e-300 quantile of t(3) sits near -1e100
    let x = StudentT::new(3.0_f64).quantile(1e-300);
    assert!(x < -1e99 && x > -1e101, "{x}");
    // upper half by symmetry
    let t = StudentT::new(0.5_f64);
    let q = 2.0_f64.powi(-34);
    assert_eq!(t.quantile(1.0 - q), -t.quantile(q));
}

#[test]
fn student_t_far_tail_cdf_is_continuous() {
    // the series and leading-term branches meet near |x| = sqrt(ν/ε)
    let t = StudentT::new(3.0_f64);
    let edge = (3.0 / f64::EPSILON).sqrt();
    let inside = t.cdf(-edge * (1.0 - 1e-12));
    let outside = t.cdf(-edge * (1.0 + 1e-12));
    assert!(rel_eq(outside, inside, 1e-9), "{inside} vs {outside}");

    // x² overflows here, the tail mass does not
    let heavy = StudentT::new(0.5_f64);
    assert!(heavy.pdf(-1e200) > 0.0);
    assert!(heavy.cdf(-1e200) > 0.0);
    assert!(rel_eq(-heavy.distribution(1e200, true), heavy.cdf(-1e200), 1e-12));
}

#[test]
fn quantile_beyond_largest_float_is_infinite() {
    // t(0.5) keeps more than 1e-155 of its mass past -f64::MAX
    assert_eq!(StudentT::new(0.5_f64).quantile(1e-300), f64::NEG_INFINITY);
}

#[test]
fn cauchy_deep_tails() {
    let c = Cauchy::new(0.0_f64, 1.0);
    let exact = -1.0 / (core::f64::consts::PI * 1e-20);
    assert!(rel_eq(c.quantile(1e-20), exact, 1e-12), "{}", c.quantile(1e-20));
    assert!(rel_eq(c.quantile(1e-20), StudentT::new(1.0_f64).quantile(1e-20), 1e-9));

    let p = 1.0 - 2.0_f64.powi(-40);
    let upper = 2.0_f64.powi(40) / core::f64::consts::PI;
    assert!(rel_eq(c.quantile(p), upper, 1e-9), "{}", c.quantile(p));
    assert!(approx_eq(c.quantile(0.5), 0.0, 1e-15));
    check_deep_tail(Cauchy::new(2.0_f64, 0.5), 1e-300);
}

// ======================== Random ========================

#[test]
fn sample_means_converge() {
    let n = 40_000;
    let cases: [(f64, f64, f64); 4] = [
        (sample_mean(&Gamma::new(0.3_f64, 2.0), n, 1), 0.6, 1.2_f64.sqrt()),
        (sample_mean(&Gamma::new(7.0_f64, 0.5), n, 2), 3.5, 1.75_f64.sqrt()),
        (sample_mean(&Beta::new(2.0_f64, 5.0), n, 3), 2.0 / 7.0, 0.16),
        (sample_mean(&Poisson::new(3.0_f64), n, 4), 3.0, 3.0_f64.sqrt()),
    ];
    for (i, &(m, mean, sd)) in cases.iter().enumerate() {
        assert!((m - mean).abs() < 5.0 * sd / (n as f64).sqrt(), "case {i}: {m} vs {mean}");
    }
}

#[test]
fn draws_lie_in_support() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..2000 {
        let g = Gamma::new(0.05_f64, 1.0).random(&mut rng);
        assert!(g >= 0.0 && g.is_finite());
        let b = Beta::new(0.5_f64, 0.5).random(&mut rng);
        assert!((0.0..=1.0).contains(&b));
        let k = Binomial::new(12.0_f64, 0.25).random(&mut rng);
        assert!(k == k.floor() && (0.0..=12.0).contains(&k));
        let t = StudentT::new(2.5_f64).random(&mut rng);
        assert!(t.is_finite());
        let ig = InverseGamma::new(2.0_f64, 1.0).random(&mut rng);
        assert!(ig > 0.0);
        let c = ChiSquared::new(3.0_f64).random(&mut rng);
        assert!(c >= 0.0);
    }
}

#[test]
fn seeded_draws_reproduce() {
    let d = StudentT::new(4.0_f64);
    let a = d.random_n(50, &mut StdRng::seed_from_u64(21));
    let b = d.random_n(50, &mut StdRng::seed_from_u64(21));
    assert_eq!(a, b);

    let m = Normal::new(0.0_f64, 1.0).random_matrix(3, 2, &mut StdRng::seed_from_u64(5));
    let v = Normal::new(0.0_f64, 1.0).random_n(6, &mut StdRng::seed_from_u64(5));
    assert_eq!(m.nrows(), 3);
    assert_eq!(m.as_slice(), &v[..]);
}

#[test]
fn free_random_functions() {
    let mut rng = StdRng::seed_from_u64(77);
    let xs = exponential::random_n(2_u32, 100, &mut rng);
    assert_eq!(xs.len(), 100);
    assert!(xs.iter().all(|&x: &f64| x > 0.0));
    let m = uniform::random_matrix(-1_i32, 1.0_f32, 2, 3, &mut rng);
    assert!(m.iter().all(|&x: &f64| (-1.0..=1.0).contains(&x)));
    assert!(poisson::random(-1.0_f64, &mut rng).is_nan());
}

// ======================== Containers ========================

#[test]
fn each_matches_scalar() {
    let x = [0.5_f64, 1.0, 2.0];
    let g = Gamma::new(2.0_f64, 1.5);
    let d = g.density_each(&x, false);
    let c = g.distribution_each(&x, true);
    for i in 0..3 {
        assert_eq!(d[i], g.density(x[i], false));
        assert_eq!(c[i], g.distribution(x[i], true));
    }
    let q = g.quantile_each(&[0.1_f64, 0.5, 0.9]);
    assert_eq!(q[1], g.quantile(0.5));
}

#[test]
fn free_each_per_element_invalid() {
    let x = vec![1.0_f64, 1.0, 1.0];
    let sigma = vec![1.0_f64, -1.0, 2.0];
    let y = normal::density_each(&x, 0_i32, &sigma, false).unwrap();
    assert_eq!(y[0], Normal::new(0.0_f64, 1.0).pdf(1.0));
    assert!(y[1].is_nan());
    assert_eq!(y[2], Normal::new(0.0_f64, 2.0).pdf(1.0));

    let short = vec![1.0_f64; 2];
    let err = normal::density_each(&x, 0.0_f64, &short, false).unwrap_err();
    assert_eq!(err.expected, crate::container::Shape::Seq(3));
}
