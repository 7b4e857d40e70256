//! 4x4 matrices and affine transforms.
//!
//! A [`Mat4`] stores its sixteen elements in row-major order, element `i`
//! being at row `i / 4` and column `i % 4`. Points are column vectors
//! multiplied on the right, so the translation of an affine transform
//! lives in elements 3, 7, and 11.
//!
//! Fresh transforms are built with the free functions of this module
//! ([`scale`], [`translate`], [`rotate_x`], [`look_at`], …). The methods of
//! the same names on `Mat4` instead compose a transform onto an existing
//! matrix in place: `m.rotate_x(a)` is equivalent to
//! `m = m * rotate_x(a)`, so the rotation happens in the current local
//! frame of `m`.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::{Error, Result};
use crate::math::approx::ApproxEq;
#[cfg(feature = "fp")]
use crate::math::angle::Angle;
use crate::math::float::fp;
use crate::math::vec::{Vec3, vec3};

/// Determinants smaller than this in absolute value are treated as zero
/// by [`Mat4::inverse`].
pub const SINGULAR_EPSILON: f64 = 0.001;

/// A 4x4 transform matrix of `f64` elements in row-major order.
///
/// The default value is the identity matrix.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4(pub [f64; 16]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Returns a matrix with the given elements in row-major order.
    #[inline]
    pub const fn new(els: [f64; 16]) -> Self {
        Self(els)
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the elements of `self` in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 16] {
        &self.0
    }

    /// Returns the row with index `i`.
    ///
    /// # Panics
    /// If `i >= 4`.
    #[inline]
    pub fn row(&self, i: usize) -> [f64; 4] {
        assert!(i < 4, "row index out of range: {i}");
        array::from_fn(|j| self.0[4 * i + j])
    }

    /// Returns the column with index `j`.
    ///
    /// # Panics
    /// If `j >= 4`.
    #[inline]
    pub fn col(&self, j: usize) -> [f64; 4] {
        assert!(j < 4, "column index out of range: {j}");
        array::from_fn(|i| self.0[4 * i + j])
    }

    /// Returns the translation column of `self` as a vector.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        vec3(self.0[3], self.0[7], self.0[11])
    }

    /// Transforms the point `p` by `self`, including translation and
    /// perspective.
    ///
    /// The homogeneous coordinate `w` is computed from the bottom row. If it
    /// is nonzero, the result is divided by it; if it is zero, the result is
    /// returned undivided, representing a point at infinity.
    ///
    /// Compare to `self * v`, which only applies the upper-left 3x3 part.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::{mat::*, vec::*};
    /// let m = translate(1.0, 2.0, 3.0);
    /// assert_eq!(m.transform_point(&vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, 1.0));
    /// ```
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        let a = &self.0;
        let [x, y, z] = p.0;
        let px = a[0] * x + a[1] * y + a[2] * z + a[3];
        let py = a[4] * x + a[5] * y + a[6] * z + a[7];
        let pz = a[8] * x + a[9] * y + a[10] * z + a[11];
        let w = a[12] * x + a[13] * y + a[14] * z + a[15];
        if w != 0.0 {
            vec3(px / w, py / w, pz / w)
        } else {
            vec3(px, py, pz)
        }
    }

    /// Transposes `self` in place, and returns it for chaining.
    pub fn transpose(&mut self) -> &mut Self {
        for r in 0..4 {
            for c in r + 1..4 {
                self.0.swap(4 * r + c, 4 * c + r);
            }
        }
        self
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Returns the determinant of `self`.
    ///
    /// Computed as a sum of six products of complementary 2x2 minors taken
    /// from the two upper and the two lower rows.
    pub fn determinant(&self) -> f64 {
        let s = &self.0;
        (s[0] * s[5] - s[4] * s[1]) * (s[10] * s[15] - s[14] * s[11])
            - (s[0] * s[9] - s[8] * s[1]) * (s[6] * s[15] - s[14] * s[7])
            + (s[0] * s[13] - s[12] * s[1]) * (s[6] * s[11] - s[10] * s[7])
            + (s[4] * s[9] - s[8] * s[5]) * (s[2] * s[15] - s[14] * s[3])
            - (s[4] * s[13] - s[12] * s[5]) * (s[2] * s[11] - s[10] * s[3])
            + (s[8] * s[13] - s[12] * s[9]) * (s[2] * s[7] - s[6] * s[3])
    }

    /// Returns the inverse of `self`.
    ///
    /// If the absolute value of the determinant of `self` is less than
    /// [`SINGULAR_EPSILON`], `self` is considered singular and the
    /// **identity matrix** is returned instead. Callers that must tell the
    /// two cases apart should check [`determinant`][Self::determinant]
    /// first.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::mat::*;
    /// let m = translate(1.0, 2.0, 3.0);
    /// assert_eq!(m.inverse(), translate(-1.0, -2.0, -3.0));
    ///
    /// assert_eq!(scale(0.0, 1.0, 1.0).inverse(), Mat4::identity());
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if fp::abs(det) < SINGULAR_EPSILON {
            log::debug!("matrix is singular (det = {det}), inverse is identity");
            return Self::IDENTITY;
        }
        let d = 1.0 / det;
        let s = &self.0;
        let mut t = [0.0; 16];

        t[0] = d * (s[5] * (s[10] * s[15] - s[14] * s[11])
            + s[9] * (s[14] * s[7] - s[6] * s[15])
            + s[13] * (s[6] * s[11] - s[10] * s[7]));
        t[4] = d * (s[6] * (s[8] * s[15] - s[12] * s[11])
            + s[10] * (s[12] * s[7] - s[4] * s[15])
            + s[14] * (s[4] * s[11] - s[8] * s[7]));
        t[8] = d * (s[7] * (s[8] * s[13] - s[12] * s[9])
            + s[11] * (s[12] * s[5] - s[4] * s[13])
            + s[15] * (s[4] * s[9] - s[8] * s[5]));
        t[12] = d * (s[4] * (s[13] * s[10] - s[9] * s[14])
            + s[8] * (s[5] * s[14] - s[13] * s[6])
            + s[12] * (s[9] * s[6] - s[5] * s[10]));

        t[1] = d * (s[9] * (s[2] * s[15] - s[14] * s[3])
            + s[13] * (s[10] * s[3] - s[2] * s[11])
            + s[1] * (s[14] * s[11] - s[10] * s[15]));
        t[5] = d * (s[10] * (s[0] * s[15] - s[12] * s[3])
            + s[14] * (s[8] * s[3] - s[0] * s[11])
            + s[2] * (s[12] * s[11] - s[8] * s[15]));
        t[9] = d * (s[11] * (s[0] * s[13] - s[12] * s[1])
            + s[15] * (s[8] * s[1] - s[0] * s[9])
            + s[3] * (s[12] * s[9] - s[8] * s[13]));
        t[13] = d * (s[8] * (s[13] * s[2] - s[1] * s[14])
            + s[12] * (s[1] * s[10] - s[9] * s[2])
            + s[0] * (s[9] * s[14] - s[13] * s[10]));

        t[2] = d * (s[13] * (s[2] * s[7] - s[6] * s[3])
            + s[1] * (s[6] * s[15] - s[14] * s[7])
            + s[5] * (s[14] * s[3] - s[2] * s[15]));
        t[6] = d * (s[14] * (s[0] * s[7] - s[4] * s[3])
            + s[2] * (s[4] * s[15] - s[12] * s[7])
            + s[6] * (s[12] * s[3] - s[0] * s[15]));
        t[10] = d * (s[15] * (s[0] * s[5] - s[4] * s[1])
            + s[3] * (s[4] * s[13] - s[12] * s[5])
            + s[7] * (s[12] * s[1] - s[0] * s[13]));
        t[14] = d * (s[12] * (s[5] * s[2] - s[1] * s[6])
            + s[0] * (s[13] * s[6] - s[5] * s[14])
            + s[4] * (s[1] * s[14] - s[13] * s[2]));

        t[3] = d * (s[1] * (s[10] * s[7] - s[6] * s[11])
            + s[5] * (s[2] * s[11] - s[10] * s[3])
            + s[9] * (s[6] * s[3] - s[2] * s[7]));
        t[7] = d * (s[2] * (s[8] * s[7] - s[4] * s[11])
            + s[6] * (s[0] * s[11] - s[8] * s[3])
            + s[10] * (s[4] * s[3] - s[0] * s[7]));
        t[11] = d * (s[3] * (s[8] * s[5] - s[4] * s[9])
            + s[7] * (s[0] * s[9] - s[8] * s[1])
            + s[11] * (s[4] * s[1] - s[0] * s[5]));
        t[15] = d * (s[0] * (s[5] * s[10] - s[9] * s[6])
            + s[4] * (s[9] * s[2] - s[1] * s[10])
            + s[8] * (s[1] * s[6] - s[5] * s[2]));

        Self(t)
    }

    //
    // In-place composition
    //

    /// Composes a scaling onto `self`: `self = self * scale(x, y, z)`.
    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        *self *= scale(x, y, z);
        self
    }

    /// Composes a translation onto `self`:
    /// `self = self * translate(x, y, z)`.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        *self *= translate(x, y, z);
        self
    }

    /// Composes a rotation about the local x axis onto `self`.
    #[cfg(feature = "fp")]
    pub fn rotate_x(&mut self, a: Angle) -> &mut Self {
        *self *= rotate_x(a);
        self
    }

    /// Composes a rotation about the local y axis onto `self`.
    #[cfg(feature = "fp")]
    pub fn rotate_y(&mut self, a: Angle) -> &mut Self {
        *self *= rotate_y(a);
        self
    }

    /// Composes a rotation about the local z axis onto `self`.
    #[cfg(feature = "fp")]
    pub fn rotate_z(&mut self, a: Angle) -> &mut Self {
        *self *= rotate_z(a);
        self
    }

    /// Composes a rotation about an arbitrary local axis onto `self`.
    #[cfg(feature = "fp")]
    pub fn rotate_axis(&mut self, a: Angle, axis: &Vec3) -> &mut Self {
        *self *= rotate_axis(a, axis);
        self
    }

    /// Composes a heading-attitude-bank rotation onto `self`.
    #[cfg(feature = "fp")]
    pub fn rotate_euler(
        &mut self,
        heading: Angle,
        attitude: Angle,
        bank: Angle,
    ) -> &mut Self {
        *self *= rotate_euler(heading, attitude, bank);
        self
    }

    /// Composes a change of basis onto `self`.
    pub fn rotate_triple_axis(
        &mut self,
        x: &Vec3,
        y: &Vec3,
        z: &Vec3,
    ) -> &mut Self {
        *self *= rotate_triple_axis(x, y, z);
        self
    }
}

//
// Free fns
//

/// Returns a matrix scaling by `x`, `y`, and `z` along the respective axes.
pub fn scale(x: f64, y: f64, z: f64) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.0[0] = x;
    m.0[5] = y;
    m.0[10] = z;
    m
}

/// Returns a matrix translating by `(x, y, z)`.
pub fn translate(x: f64, y: f64, z: f64) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.0[3] = x;
    m.0[7] = y;
    m.0[11] = z;
    m
}

/// Returns a matrix rotating by angle `a` about the x axis.
///
/// Positive angles rotate the y axis towards the z axis.
#[cfg(feature = "fp")]
pub fn rotate_x(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    let mut m = Mat4::IDENTITY;
    m.0[5] = c;
    m.0[10] = c;
    m.0[6] = -s;
    m.0[9] = s;
    m
}

/// Returns a matrix rotating by angle `a` about the y axis.
///
/// Positive angles rotate the z axis towards the x axis.
#[cfg(feature = "fp")]
pub fn rotate_y(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    let mut m = Mat4::IDENTITY;
    m.0[0] = c;
    m.0[10] = c;
    m.0[2] = s;
    m.0[8] = -s;
    m
}

/// Returns a matrix rotating by angle `a` about the z axis.
///
/// Positive angles rotate the x axis towards the y axis.
#[cfg(feature = "fp")]
pub fn rotate_z(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    let mut m = Mat4::IDENTITY;
    m.0[0] = c;
    m.0[5] = c;
    m.0[1] = -s;
    m.0[4] = s;
    m
}

/// Returns a matrix rotating by angle `a` about `axis`.
///
/// `axis` need not have unit length; it is normalized here. The element
/// layout is that of the `glRotate` matrix.
#[cfg(feature = "fp")]
pub fn rotate_axis(a: Angle, axis: &Vec3) -> Mat4 {
    let [x, y, z] = axis.normalized().0;
    let (s, c) = a.sin_cos();
    let c1 = 1.0 - c;

    let mut m = Mat4::IDENTITY;
    m.0[0] = x * x * c1 + c;
    m.0[1] = x * y * c1 - z * s;
    m.0[2] = x * z * c1 + y * s;
    m.0[4] = y * x * c1 + z * s;
    m.0[5] = y * y * c1 + c;
    m.0[6] = y * z * c1 - x * s;
    m.0[8] = x * z * c1 - y * s;
    m.0[9] = y * z * c1 + x * s;
    m.0[10] = z * z * c1 + c;
    m
}

/// Returns a rotation matrix from heading, attitude, and bank angles.
///
/// Heading rotates about the y axis, attitude about the z axis, and bank
/// about the x axis, applied in the order bank, attitude, heading. The
/// result equals `rotate_y(heading) * rotate_z(attitude) * rotate_x(bank)`
/// but is computed in closed form.
#[cfg(feature = "fp")]
pub fn rotate_euler(heading: Angle, attitude: Angle, bank: Angle) -> Mat4 {
    let (sh, ch) = heading.sin_cos();
    let (sa, ca) = attitude.sin_cos();
    let (sb, cb) = bank.sin_cos();

    let mut m = Mat4::IDENTITY;
    m.0[0] = ch * ca;
    m.0[1] = sh * sb - ch * sa * cb;
    m.0[2] = ch * sa * sb + sh * cb;
    m.0[4] = sa;
    m.0[5] = ca * cb;
    m.0[6] = -ca * sb;
    m.0[8] = -sh * ca;
    m.0[9] = sh * sa * cb + ch * sb;
    m.0[10] = -sh * sa * sb + ch * cb;
    m
}

/// Returns a matrix whose upper-left 3x3 part has columns `x`, `y`, and `z`.
///
/// If the three vectors are orthonormal, the result is the rotation that
/// maps the standard basis onto them.
pub fn rotate_triple_axis(x: &Vec3, y: &Vec3, z: &Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    [m.0[0], m.0[1], m.0[2]] = [x.x(), y.x(), z.x()];
    [m.0[4], m.0[5], m.0[6]] = [x.y(), y.y(), z.y()];
    [m.0[8], m.0[9], m.0[10]] = [x.z(), y.z(), z.z()];
    m
}

/// Returns a matrix placing an object at `eye`, oriented so that its local
/// z axis points away from `at`.
///
/// The local x axis is perpendicular to both `up` and the z axis, and the
/// local y axis completes the right-handed basis.
///
/// If `up` is parallel to `eye - at`, or `eye == at`, the basis is
/// degenerate and some of its axes are zero vectors. The result is
/// unspecified in that case and callers are expected to avoid it.
pub fn look_at(eye: &Vec3, at: &Vec3, up: &Vec3) -> Mat4 {
    let z = (*eye - *at).normalized();
    let x = up.cross(&z).normalized();
    let y = z.cross(&x);
    if x.is_zero() || z.is_zero() {
        log::debug!("degenerate look-at basis: eye={eye}, at={at}, up={up}");
    }

    let mut m = rotate_triple_axis(&x, &y, &z);
    [m.0[3], m.0[7], m.0[11]] = eye.0;
    m
}

/// Returns a perspective projection matrix.
///
/// Follows the layout of `gluPerspective`, mapping the view frustum with
/// vertical field of view `fov_y` and width-to-height ratio `aspect`,
/// between the `near` and `far` clip planes, to the unit cube.
///
/// # Panics
/// If `near` is zero or `near` equals `far`.
#[cfg(feature = "fp")]
pub fn perspective(fov_y: Angle, aspect: f64, near: f64, far: f64) -> Mat4 {
    assert!(near != 0.0, "near cannot be 0");
    assert!(near != far, "near and far cannot be equal");

    let f = 1.0 / (fov_y / 2.0).tan();
    let mut m = Mat4::IDENTITY;
    m.0[0] = f / aspect;
    m.0[5] = f;
    m.0[10] = (far + near) / (near - far);
    m.0[11] = 2.0 * far * near / (near - far);
    m.0[14] = -1.0;
    m.0[15] = 0.0;
    m
}

//
// Local trait impls
//

impl ApproxEq<Self, f64> for Mat4 {
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

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for i in 0..4 {
            writeln!(f, "    {:6.2?}", self.row(i))?;
        }
        write!(f, "]")
    }
}

impl From<[f64; 16]> for Mat4 {
    #[inline]
    fn from(els: [f64; 16]) -> Self {
        Self(els)
    }
}

impl From<[[f64; 4]; 4]> for Mat4 {
    fn from(rows: [[f64; 4]; 4]) -> Self {
        Self(array::from_fn(|i| rows[i / 4][i % 4]))
    }
}

impl From<Mat4> for [f64; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.0
    }
}

impl TryFrom<&[f64]> for Mat4 {
    type Error = Error;

    fn try_from(els: &[f64]) -> Result<Self> {
        Error::check_len(16, els.len())?;
        Ok(Self(array::from_fn(|i| els[i])))
    }
}

impl Index<usize> for Mat4 {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

/// Indexing by `(row, col)`.
impl Index<(usize, usize)> for Mat4 {
    type Output = f64;
    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(r < 4 && c < 4, "index out of range: ({r}, {c})");
        &self.0[4 * r + c]
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        let (a, b) = (&self.0, &rhs.0);
        *self = Self(array::from_fn(|i| {
            let (r, c) = (4 * (i / 4), i % 4);
            a[r] * b[c]
                + a[r + 1] * b[4 + c]
                + a[r + 2] * b[8 + c]
                + a[r + 3] * b[12 + c]
        }));
    }
}

impl_op!(Mul::mul, Mat4, Mat4, *=);

/// Applies the linear (upper-left 3x3) part of the matrix to a vector,
/// ignoring translation and perspective.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let a = &self.0;
        let [x, y, z] = v.0;
        vec3(
            a[0] * x + a[1] * y + a[2] * z,
            a[4] * x + a[5] * y + a[6] * z,
            a[8] * x + a[9] * y + a[10] * z,
        )
    }
}
