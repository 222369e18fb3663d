use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::Scalar;

/// A fixed-size vector of `N` scalars.
///
/// All named accessors (`x`, `width`, `r`, ...) read and write the same
/// backing array, so `v.x()`, `v.width()` and `v[0]` are always the same
/// component.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub [T; N]);

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;

pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec3i = Vec3<i32>;

pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;
pub type Vec4i = Vec4<i32>;

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which has no padding
// and is valid for any bit pattern whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Converts every component to another scalar type.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(Scalar::cast)
    }

    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }
}

macro_rules! impl_float_vector {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Vector<$t, N> {
                #[inline]
                pub fn length(self) -> $t {
                    self.dot(self).sqrt()
                }

                #[inline]
                pub fn distance(self, other: Self) -> $t {
                    (self - other).length()
                }
            }
        )*
    };
}

impl_float_vector!(f32, f64);

macro_rules! accessors {
    ($($name:ident, $name_mut:ident => $index:literal;)*) => {
        $(
            #[inline]
            pub fn $name(&self) -> T {
                self.0[$index]
            }

            #[inline]
            pub fn $name_mut(&mut self) -> &mut T {
                &mut self.0[$index]
            }
        )*
    };
}

impl<T: Copy> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        width, width_mut => 0;
        height, height_mut => 1;
    }
}

impl<T: Copy> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        z, z_mut => 2;
        r, r_mut => 0;
        g, g_mut => 1;
        b, b_mut => 2;
    }
}

impl<T: Copy> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        z, z_mut => 2;
        w, w_mut => 3;
        r, r_mut => 0;
        g, g_mut => 1;
        b, b_mut => 2;
        a, a_mut => 3;
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T> From<(T, T)> for Vector<T, 2> {
    fn from((x, y): (T, T)) -> Self {
        Self([x, y])
    }
}

impl<T> From<(T, T, T)> for Vector<T, 3> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self([x, y, z])
    }
}

impl<T> From<(T, T, T, T)> for Vector<T, 4> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self([x, y, z, w])
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for nalgebra::SVector<T, N> {
    fn from(value: Vector<T, N>) -> Self {
        nalgebra::SVector::from_fn(|i, _| value[i])
    }
}

impl<T: Scalar, const N: usize> From<nalgebra::SVector<T, N>> for Vector<T, N> {
    fn from(value: nalgebra::SVector<T, N>) -> Self {
        Self::from_fn(|i| value[i])
    }
}
