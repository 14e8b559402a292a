//! Numeric type resolution across heterogeneous argument types.
//!
//! Every catalog entry point accepts its input value and parameters as
//! independent generic types. Before anything is evaluated the argument types
//! are folded into one floating-point type:
//!
//! | Arguments | Resolved |
//! |---|---|
//! | all `f32` | `f32` |
//! | any `f64` | `f64` |
//! | any integer | `f64` |
//! | `f32` mixed with an integer | `f64` |
//!
//! Resolution is purely type-level: [`Promoted<(X, A, B)>`](Promoted) names
//! the result and there is no runtime dispatch.
//!
//! # Example
//!
//! ```
//! use statis::promote::Promoted;
//!
//! fn type_name<T>() -> &'static str { core::any::type_name::<T>() }
//!
//! assert_eq!(type_name::<Promoted<(f32, f32)>>(), "f32");
//! assert_eq!(type_name::<Promoted<(f32, i32, f32)>>(), "f64");
//! assert_eq!(type_name::<Promoted<(u8,)>>(), "f64");
//! ```

use core::fmt::Debug;

use num_traits::ToPrimitive;

use crate::traits::FloatScalar;

/// A primitive numeric type accepted as an input value or parameter.
pub trait Numeric: Copy + PartialOrd + Debug + ToPrimitive + Send + Sync + 'static {
    /// Convert into the working float type.
    ///
    /// Integers wider than the mantissa round to the nearest representable
    /// value; the conversion never fails.
    #[inline]
    fn to_real<T: FloatScalar>(self) -> T {
        T::from(self).unwrap_or_else(T::nan)
    }
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $( impl Numeric for $t {} )*
    };
}

impl_numeric!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Pairwise promotion of two argument types to a common float type.
pub trait Common<Rhs: Numeric>: Numeric {
    /// The resolved floating-point type.
    type Output: FloatScalar + Numeric;
}

/// Shorthand for the pairwise promotion of `A` and `B`.
pub type Common2<A, B> = <A as Common<B>>::Output;

// f32 ⊕ f32 stays single precision; everything else widens to f64.
impl Common<f32> for f32 {
    type Output = f32;
}

macro_rules! impl_common_f64 {
    ($lhs:ty => $($rhs:ty),*) => {
        $( impl Common<$rhs> for $lhs { type Output = f64; } )*
    };
}

impl_common_f64!(f32 => f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(f64 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(i8 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(i16 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(i32 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(i64 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(isize => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(u8 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(u16 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(u32 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(u64 => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_common_f64!(usize => f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Resolution of a tuple of one to four argument types.
pub trait Resolve {
    /// The floating-point type every argument is converted into.
    type Output: FloatScalar;
}

/// The resolved float type of an argument tuple, e.g. `Promoted<(X, A, B)>`.
pub type Promoted<Args> = <Args as Resolve>::Output;

impl<A: Common<A>> Resolve for (A,) {
    type Output = Common2<A, A>;
}

impl<A: Common<B>, B: Numeric> Resolve for (A, B) {
    type Output = Common2<A, B>;
}

impl<A, B, C> Resolve for (A, B, C)
where
    A: Common<B>,
    B: Numeric,
    C: Numeric,
    Common2<A, B>: Common<C>,
{
    type Output = Common2<Common2<A, B>, C>;
}

impl<A, B, C, D> Resolve for (A, B, C, D)
where
    A: Common<B>,
    B: Numeric,
    C: Numeric,
    D: Numeric,
    Common2<A, B>: Common<C>,
    Common2<Common2<A, B>, C>: Common<D>,
{
    type Output = Common2<Common2<Common2<A, B>, C>, D>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    fn is<T: 'static, U: 'static>() -> bool {
        TypeId::of::<T>() == TypeId::of::<U>()
    }

    #[test]
    fn single_precision_is_preserved() {
        assert!(is::<Promoted<(f32,)>, f32>());
        assert!(is::<Promoted<(f32, f32)>, f32>());
        assert!(is::<Promoted<(f32, f32, f32)>, f32>());
        assert!(is::<Promoted<(f32, f32, f32, f32)>, f32>());
    }

    #[test]
    fn double_dominates() {
        assert!(is::<Promoted<(f32, f64)>, f64>());
        assert!(is::<Promoted<(f64, f32, f32)>, f64>());
        assert!(is::<Promoted<(f32, f32, f64)>, f64>());
    }

    #[test]
    fn integers_promote_to_double() {
        assert!(is::<Promoted<(i32,)>, f64>());
        assert!(is::<Promoted<(u8, u64)>, f64>());
        assert!(is::<Promoted<(f32, i32)>, f64>());
        assert!(is::<Promoted<(i64, f32, f32)>, f64>());
        assert!(is::<Promoted<(usize, i16, u32, f32)>, f64>());
    }

    #[test]
    fn to_real_converts() {
        assert_eq!(3_i32.to_real::<f64>(), 3.0);
        assert_eq!(2.5_f32.to_real::<f64>(), 2.5);
        assert_eq!(7_u8.to_real::<f32>(), 7.0);
        assert!(f64::NAN.to_real::<f32>().is_nan());
    }
}
