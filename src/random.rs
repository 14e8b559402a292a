//! Injected uniform randomness.
//!
//! Sampling never touches global or thread-local random state. Every draw
//! takes a `&mut` [`UniformSource`], so a fixed source and a fixed call
//! sequence always reproduce the same variates.
//!
//! Any [`rand::RngCore`] is a `UniformSource`:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use statis::random::UniformSource;
//!
//! let mut a = StdRng::seed_from_u64(11);
//! let mut b = StdRng::seed_from_u64(11);
//! let u: f64 = a.next_uniform();
//! assert!(u > 0.0 && u < 1.0);
//! assert_eq!(u, b.next_uniform());
//! ```

use rand::RngCore;

use crate::traits::{cst, FloatScalar};

/// A source of uniform variates on the open interval (0, 1).
///
/// The open interval matters for inversion sampling: the quantile of an
/// unbounded distribution is infinite at 0 and 1.
pub trait UniformSource<T> {
    /// Produce the next uniform variate in (0, 1).
    fn next_uniform(&mut self) -> T;
}

impl<R: RngCore + ?Sized, T: FloatScalar> UniformSource<T> for R {
    #[inline]
    fn next_uniform(&mut self) -> T {
        // 53 random mantissa bits, shifted half a step off zero: (k + 0.5) / 2^53.
        let bits = (self.next_u64() >> 11) as f64;
        let u: T = cst((bits + 0.5) * (1.0 / 9_007_199_254_740_992.0));
        // Narrower types may round onto an endpoint.
        if u >= T::one() {
            T::one() - T::epsilon() / (T::one() + T::one())
        } else if u <= T::zero() {
            T::min_positive_value()
        } else {
            u
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Yields a fixed cycle of raw words.
    struct Words {
        words: [u64; 3],
        pos: usize,
    }

    impl RngCore for Words {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let w = self.words[self.pos % self.words.len()];
            self.pos += 1;
            w
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for b in dst {
                *b = self.next_u64() as u8;
            }
        }
    }

    #[test]
    fn endpoints_are_excluded() {
        let mut src = Words { words: [0, u64::MAX, 1 << 63], pos: 0 };
        let lo: f64 = src.next_uniform();
        let hi: f64 = src.next_uniform();
        let mid: f64 = src.next_uniform();
        assert!(lo > 0.0 && lo < 1e-15);
        assert!(hi < 1.0 && hi > 1.0 - 1e-15);
        assert!((mid - 0.5).abs() < 1e-15);
    }

    #[test]
    fn endpoints_are_excluded_f32() {
        let mut src = Words { words: [0, u64::MAX, 0], pos: 0 };
        let lo: f32 = src.next_uniform();
        let hi: f32 = src.next_uniform();
        assert!(lo > 0.0);
        assert!(hi < 1.0);
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let x: f64 = a.next_uniform();
            let y: f64 = b.next_uniform();
            assert_eq!(x, y);
            assert!(x > 0.0 && x < 1.0);
        }
    }
}
