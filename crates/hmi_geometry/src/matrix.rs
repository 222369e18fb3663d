use std::ops::{Index, IndexMut};

use crate::{Scalar, Vec2, Vector};

/// A square `N`×`N` matrix stored row-major and addressed by `(row, col)`.
///
/// Named getters follow the same reading order: `xy` is row 0, column 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const N: usize>(pub [[T; N]; N]);

pub type Mat2<T> = Matrix<T, 2>;
pub type Mat3<T> = Matrix<T, 3>;
pub type Mat4<T> = Matrix<T, 4>;

pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;

pub type Mat2d = Mat2<f64>;
pub type Mat3d = Mat3<f64>;
pub type Mat4d = Mat4<f64>;

impl<T: Copy, const N: usize> Matrix<T, N> {
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))))
    }

    #[inline]
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self(rows.map(|row| row.0))
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, N> {
        Vector(self.0[row])
    }

    #[inline]
    pub fn column(&self, col: usize) -> Vector<T, N> {
        Vector::from_fn(|row| self.0[row][col])
    }

    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U + Copy) -> Matrix<U, N> {
        Matrix(self.0.map(|row| row.map(f)))
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|row, col| self.0[col][row])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    pub fn zero() -> Self {
        Self([[T::ZERO; N]; N])
    }

    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Converts every component to another scalar type.
    pub fn cast<U: Scalar>(self) -> Matrix<U, N> {
        self.map(Scalar::cast)
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! getters {
    ($($name:ident => ($row:literal, $col:literal);)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> T {
                self.0[$row][$col]
            }
        )*
    };
}

impl<T: Copy> Matrix<T, 2> {
    #[rustfmt::skip]
    pub const fn new(
        xx: T, xy: T,
        yx: T, yy: T,
    ) -> Self {
        Self([[xx, xy], [yx, yy]])
    }

    getters! {
        xx => (0, 0); xy => (0, 1);
        yx => (1, 0); yy => (1, 1);
    }
}

impl<T: Copy> Matrix<T, 3> {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        xx: T, xy: T, xz: T,
        yx: T, yy: T, yz: T,
        zx: T, zy: T, zz: T,
    ) -> Self {
        Self([[xx, xy, xz], [yx, yy, yz], [zx, zy, zz]])
    }

    getters! {
        xx => (0, 0); xy => (0, 1); xz => (0, 2);
        yx => (1, 0); yy => (1, 1); yz => (1, 2);
        zx => (2, 0); zy => (2, 1); zz => (2, 2);
    }
}

impl<T: Copy> Matrix<T, 4> {
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        xx: T, xy: T, xz: T, xw: T,
        yx: T, yy: T, yz: T, yw: T,
        zx: T, zy: T, zz: T, zw: T,
        wx: T, wy: T, wz: T, ww: T,
    ) -> Self {
        Self([
            [xx, xy, xz, xw],
            [yx, yy, yz, yw],
            [zx, zy, zz, zw],
            [wx, wy, wz, ww],
        ])
    }

    getters! {
        xx => (0, 0); xy => (0, 1); xz => (0, 2); xw => (0, 3);
        yx => (1, 0); yy => (1, 1); yz => (1, 2); yw => (1, 3);
        zx => (2, 0); zy => (2, 1); zz => (2, 2); zw => (2, 3);
        wx => (3, 0); wy => (3, 1); wz => (3, 2); ww => (3, 3);
    }
}

impl<T: Scalar> Matrix<T, 2> {
    pub fn determinant(&self) -> T {
        self.xx() * self.yy() - self.yx() * self.xy()
    }

    /// Closed-form inverse (adjugate over determinant).
    ///
    /// Undefined for singular matrices: the determinant is not checked, so a
    /// zero determinant yields non-finite components for float matrices.
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        Self::new(self.yy(), -self.xy(), -self.yx(), self.xx()).map(|v| v / det)
    }
}

impl<T: Scalar> Matrix<T, 3> {
    pub fn determinant(&self) -> T {
        self.xx() * (self.yy() * self.zz() - self.zy() * self.yz())
            - self.xy() * (self.yx() * self.zz() - self.zx() * self.yz())
            + self.xz() * (self.yx() * self.zy() - self.zx() * self.yy())
    }

    /// Closed-form inverse (adjugate over determinant).
    ///
    /// Undefined for singular matrices: the determinant is not checked, so a
    /// zero determinant yields non-finite components for float matrices.
    pub fn invert(&self) -> Self {
        let (xx, xy, xz) = (self.xx(), self.xy(), self.xz());
        let (yx, yy, yz) = (self.yx(), self.yy(), self.yz());
        let (zx, zy, zz) = (self.zx(), self.zy(), self.zz());

        let adjugate = Self::new(
            yy * zz - zy * yz,
            -(xy * zz - zy * xz),
            xy * yz - yy * xz,
            -(yx * zz - zx * yz),
            xx * zz - zx * xz,
            -(xx * yz - yx * xz),
            yx * zy - zx * yy,
            -(xx * zy - zx * xy),
            xx * yy - yx * xy,
        );

        // Expansion along the first row, reusing the first adjugate column.
        let det = xx * adjugate.xx() + xy * adjugate.yx() + xz * adjugate.zx();
        adjugate.map(|v| v / det)
    }

    /// Applies the matrix to a 2D point as an affine transform (w = 1).
    pub fn transform_point(&self, point: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.xx() * point.x() + self.xy() * point.y() + self.xz(),
            self.yx() * point.x() + self.yy() * point.y() + self.yz(),
        )
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(value: [[T; N]; N]) -> Self {
        Self(value)
    }
}

impl<T: Scalar, const N: usize> From<Matrix<T, N>> for nalgebra::SMatrix<T, N, N> {
    fn from(value: Matrix<T, N>) -> Self {
        nalgebra::SMatrix::from_fn(|row, col| value[(row, col)])
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::SMatrix<T, N, N>> for Matrix<T, N> {
    fn from(value: nalgebra::SMatrix<T, N, N>) -> Self {
        Self::from_fn(|row, col| value[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_constructor_keeps_reading_order() {
        let m = Mat3f::new(1., 2., 3., 4., 5., 6., 7., 8., 9.);
        assert_eq!(m[(0, 1)], 2.);
        assert_eq!(m.xy(), 2.);
        assert_eq!(m.yz(), 6.);
        assert_eq!(m.zx(), 7.);
        assert_eq!(m.row(1), Vec3::new(4., 5., 6.));
        assert_eq!(m.column(1), Vec3::new(2., 5., 8.));
    }

    #[test]
    fn test_transpose() {
        let m = Mat2::new(1, 2, 3, 4);
        assert_eq!(m.transpose(), Mat2::new(1, 3, 2, 4));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_transform_point() {
        let translate = Mat3f::new(1., 0., 5., 0., 1., -2., 0., 0., 1.);
        assert_eq!(
            translate.transform_point(Vec2::new(1., 1.)),
            Vec2::new(6., -1.)
        );
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let m = Mat2f::new(1., 2., 2., 4.);
        assert_eq!(m.determinant(), 0.);
        assert!(m.invert().0.iter().flatten().any(|v| !v.is_finite()));
    }
}
