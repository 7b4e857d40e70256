//! Real vectors in two and three dimensions.

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use crate::error::{Error, Result};
use crate::math::approx::ApproxEq;
use crate::math::float::fp;

//
// Types
//

/// A fixed-size vector of `N` real components.
///
/// Components can be read and written by index (`v[0]`) or, for the
/// aliases [`Vec2`] and [`Vec3`], through the named accessors `x()`, `y()`
/// and `z()` and their `_mut` counterparts. Out-of-range indices panic.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

/// A 2-vector with `f64` components.
pub type Vec2 = Vector<2>;

/// A 3-vector with `f64` components.
pub type Vec3 = Vector<3>;

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vec2 {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// # use rigmath_core::math::vec::*;
/// let v: Vec3 = splat(2.0);
/// assert_eq!(v, vec3(2.0, 2.0, 2.0));
/// ```
#[inline]
pub const fn splat<const N: usize>(s: f64) -> Vector<N> {
    Vector([s; N])
}

//
// Inherent impls
//

impl<const N: usize> Vector<N> {
    /// The zero vector.
    pub const ZERO: Self = Self([0.0; N]);

    /// Returns a new vector with the given components.
    #[inline]
    pub const fn new(els: [f64; N]) -> Self {
        Self(els)
    }

    /// Returns the components of `self` as an array.
    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Returns a vector with `f` applied to each component of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    /// Returns a vector with `f` applied to each pair of components of
    /// `self` and `other`.
    #[inline]
    #[must_use]
    pub fn zip_map(
        self,
        other: Self,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the squared Euclidean length of `self`.
    ///
    /// Cheaper than [`magnitude`][Self::magnitude] when only comparing
    /// lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::vec::*;
    /// assert_eq!(vec3(1.0, 2.0, 2.0).magnitude(), 3.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        fp::sqrt(self.magnitude_squared())
    }

    /// Scales `self` to unit length in place, and returns it for chaining.
    ///
    /// A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len != 0.0 {
            *self /= len;
        }
        self
    }

    /// Returns `self` scaled to unit length, or an unchanged copy of `self`
    /// if it is the zero vector.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Returns the reflection of `self` about the plane with the given
    /// normal.
    ///
    /// `normal` is expected to have unit length; it is not normalized here.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::vec::*;
    /// let v = vec2(1.0, -1.0);
    /// assert_eq!(v.reflect(&vec2(0.0, 1.0)), vec2(1.0, 1.0));
    /// ```
    #[must_use]
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Returns whether every component of `self` equals zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// Compares `self` component-wise to a slice.
    ///
    /// # Errors
    /// [`Error::Length`] if `other` does not have exactly `N` elements.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::vec::*;
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.eq_slice(&[1.0, 2.0, 3.0]), Ok(true));
    /// assert!(v.eq_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn eq_slice(&self, other: &[f64]) -> Result<bool> {
        Error::check_len(N, other.len())?;
        Ok(self.0[..] == *other)
    }
}

impl Vec2 {
    /// Unit vector along the x axis.
    pub const X: Self = vec2(1.0, 0.0);
    /// Unit vector along the y axis.
    pub const Y: Self = vec2(0.0, 1.0);

    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }
    #[inline]
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.0[0]
    }
    #[inline]
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.0[1]
    }

    /// Returns `self` rotated a quarter turn clockwise, `(y, -x)`.
    ///
    /// This is the two-dimensional analogue of a cross product: the result
    /// is perpendicular to `self` and has the same length.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::vec::*;
    /// assert_eq!(vec2(3.0, 4.0).cross(), vec2(4.0, -3.0));
    /// ```
    #[inline]
    pub const fn cross(&self) -> Self {
        vec2(self.0[1], -self.0[0])
    }
}

impl Vec3 {
    /// Unit vector along the x axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector along the y axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector along the z axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> f64 {
        self.0[2]
    }
    #[inline]
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.0[0]
    }
    #[inline]
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.0[1]
    }
    #[inline]
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.0[2]
    }

    /// Returns the right-handed cross product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::vec::*;
    /// assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }

    /// Returns the angle between `self` and `other`.
    ///
    /// The result is in the range [0°, 180°]. If either vector is zero, the
    /// dot product of the normalized vectors is zero and the result is a
    /// right angle.
    #[cfg(feature = "fp")]
    pub fn angle(&self, other: &Self) -> crate::math::angle::Angle {
        let q = self.normalized().dot(&other.normalized());
        crate::math::angle::acos(q)
    }
}

//
// Local trait impls
//

impl<const N: usize> ApproxEq<Self, f64> for Vector<N> {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Debug for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}{:?}", self.0)
    }
}

impl<const N: usize> Display for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c:.p$}")?;
        }
        f.write_str(")")
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(els: [f64; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

impl<const N: usize> TryFrom<&[f64]> for Vector<N> {
    type Error = Error;

    fn try_from(els: &[f64]) -> Result<Self> {
        Error::check_len(N, els.len())?;
        Ok(Self(array::from_fn(|i| els[i])))
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector<N> {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.zip_map(rhs, Add::add);
    }
}

impl<const N: usize> AddAssign<[f64; N]> for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: [f64; N]) {
        *self += Self(rhs);
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.zip_map(rhs, Sub::sub);
    }
}

impl<const N: usize> SubAssign<[f64; N]> for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: [f64; N]) {
        *self -= Self(rhs);
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.map(|c| c * rhs);
    }
}

/// Division by zero follows IEEE 754: nonzero components become infinite
/// and zero components become NaN.
impl<const N: usize> DivAssign<f64> for Vector<N> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = self.map(|c| c / rhs);
    }
}

impl_op!(Add::add, Vector<N>, Vector<N>, +=, const N);
impl_op!(Sub::sub, Vector<N>, Vector<N>, -=, const N);
impl_op!(Mul::mul, Vector<N>, f64, *=, const N);
impl_op!(Div::div, Vector<N>, f64, /=, const N);

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}
