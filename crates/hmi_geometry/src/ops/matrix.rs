use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{Matrix, Scalar, Vector};

impl<T: Scalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! element_wise {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident => $sym:tt;)*) => {
        $(
            impl<T: Scalar, const N: usize> $op for Matrix<T, N> {
                type Output = Self;

                fn $f(self, rhs: Self) -> Self {
                    Self::from_fn(|row, col| self.0[row][col] $sym rhs.0[row][col])
                }
            }

            impl<T: Scalar, const N: usize> $op_assign for Matrix<T, N> {
                fn $f_assign(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }
        )*
    };
}

element_wise! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
}

macro_rules! scalar_ops {
    (@op $t:ty, $op:ident::$f:ident, $op_assign:ident::$f_assign:ident => $sym:tt) => {
        impl<const N: usize> $op<$t> for Matrix<$t, N> {
            type Output = Self;

            fn $f(self, rhs: $t) -> Self {
                self.map(|v| v $sym rhs)
            }
        }

        impl<const N: usize> $op_assign<$t> for Matrix<$t, N> {
            fn $f_assign(&mut self, rhs: $t) {
                *self = *self $sym rhs;
            }
        }

        impl<const N: usize> $op<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;

            fn $f(self, rhs: Matrix<$t, N>) -> Matrix<$t, N> {
                rhs.map(|v| self $sym v)
            }
        }
    };

    ($($t:ty),*) => {
        $(
            scalar_ops!(@op $t, Mul::mul, MulAssign::mul_assign => *);
            scalar_ops!(@op $t, Div::div, DivAssign::div_assign => /);
        )*
    };
}

scalar_ops!(i32, i64, f32, f64);

/// Standard linear map, `M * v`.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Row vector times matrix, `v * M`, which equals `transpose(M) * v`.
impl<T: Scalar, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Vector<T, N> {
        Vector::from_fn(|col| self.dot(rhs.column(col)))
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self.row(row).dot(rhs.column(col)))
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
