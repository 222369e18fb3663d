use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A numeric type that can be stored in a [`Vector`](crate::Vector) or a
/// [`Matrix`](crate::Matrix).
///
/// There is no implicit promotion between scalar types. Mixing, say, an
/// integer pixel position with a float world position goes through
/// [`Scalar::cast`] (or `Vector::cast`) first.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn from_i32(value: i32) -> Self;
    fn from_i64(value: i64) -> Self;
    fn from_f32(value: f32) -> Self;
    fn from_f64(value: f64) -> Self;

    /// Numeric conversion with `as` semantics: float to integer truncates
    /// toward zero and saturates, integer to narrower integer wraps.
    fn cast<U: Scalar>(self) -> U;
}

macro_rules! impl_scalar {
    ($($t:ty => $from:ident, $zero:literal, $one:literal);* $(;)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn from_i32(value: i32) -> Self {
                    value as $t
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_f32(value: f32) -> Self {
                    value as $t
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn cast<U: Scalar>(self) -> U {
                    U::$from(self)
                }
            }
        )*
    };
}

impl_scalar! {
    i32 => from_i32, 0, 1;
    i64 => from_i64, 0, 1;
    f32 => from_f32, 0.0, 1.0;
    f64 => from_f64, 0.0, 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_truncates_toward_zero() {
        assert_eq!(2.9f32.cast::<i32>(), 2);
        assert_eq!((-2.9f64).cast::<i32>(), -2);
        assert_eq!(7i32.cast::<f32>(), 7.0);
    }

    #[test]
    fn test_cast_keeps_wide_integers_exact() {
        let large = (1i64 << 53) + 1;
        assert_eq!(large.cast::<i64>(), large);
        assert_eq!(i64::MAX.cast::<i64>(), i64::MAX);
    }

    #[test]
    fn test_cast_narrowing_wraps() {
        assert_eq!(((1i64 << 32) + 5).cast::<i32>(), 5);
        assert_eq!((-1i64).cast::<i32>(), -1);
        assert_eq!(1e20f64.cast::<i32>(), i32::MAX);
    }
}
