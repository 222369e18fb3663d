use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Scalar, Vector};

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

/// Component-wise `vector op vector`, including the compound assignment form.
macro_rules! component_wise {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident => $sym:tt;)*) => {
        $(
            impl<T: Scalar, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $f(self, rhs: Self) -> Self {
                    Self::from_fn(|i| self.0[i] $sym rhs.0[i])
                }
            }

            impl<T: Scalar, const N: usize> $op_assign for Vector<T, N> {
                #[inline]
                fn $f_assign(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }
        )*
    };
}

component_wise! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

/// `vector op scalar` and `scalar op vector` for every concrete scalar type.
/// Rust does not allow a generic `impl<T> Add<Vector<T, N>> for T`, so the
/// scalar-on-the-left forms have to be spelled out per type.
macro_rules! scalar_ops {
    (@op $t:ty, $op:ident::$f:ident, $op_assign:ident::$f_assign:ident => $sym:tt) => {
        impl<const N: usize> $op<$t> for Vector<$t, N> {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: $t) -> Self {
                self.map(|v| v $sym rhs)
            }
        }

        impl<const N: usize> $op_assign<$t> for Vector<$t, N> {
            #[inline]
            fn $f_assign(&mut self, rhs: $t) {
                *self = *self $sym rhs;
            }
        }

        impl<const N: usize> $op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $f(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs.map(|v| self $sym v)
            }
        }
    };

    ($($t:ty),*) => {
        $(
            scalar_ops!(@op $t, Add::add, AddAssign::add_assign => +);
            scalar_ops!(@op $t, Sub::sub, SubAssign::sub_assign => -);
            scalar_ops!(@op $t, Mul::mul, MulAssign::mul_assign => *);
            scalar_ops!(@op $t, Div::div, DivAssign::div_assign => /);
        )*
    };
}

scalar_ops!(i32, i64, f32, f64);
