//! Run-time tagged operands.
//!
//! The operator impls of [`Mat4`] and [`Vector`][super::Vector] are checked
//! at compile time, which is what most code should use. [`Operand`] is for
//! callers that only learn what kind of value they hold at run time, for
//! example when forwarding values from a scripting layer. Its operations
//! return an [`Error::Type`] instead of failing to compile when the
//! operand kinds do not fit together.

use core::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};
use crate::math::mat::Mat4;
use crate::math::vec::{Vec2, Vec3};

/// The kind of value held by an [`Operand`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    Scalar,
    Vec2,
    Vec3,
    Mat4,
}

/// A scalar, vector, or matrix value whose kind is known only at run time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vec2(Vec2),
    Vec3(Vec3),
    Mat4(Mat4),
}

impl Operand {
    /// Returns the kind of `self`.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Scalar(_) => Kind::Scalar,
            Self::Vec2(_) => Kind::Vec2,
            Self::Vec3(_) => Kind::Vec3,
            Self::Mat4(_) => Kind::Mat4,
        }
    }

    /// Multiplies `self` by `rhs`.
    ///
    /// | `self`  | `rhs`   | result                            |
    /// |---------|---------|-----------------------------------|
    /// | scalar  | scalar  | scalar                            |
    /// | vector  | scalar  | vector                            |
    /// | scalar  | vector  | vector                            |
    /// | `Mat4`  | `Mat4`  | `Mat4`                            |
    /// | `Mat4`  | `Vec3`  | `Vec3`, without translation       |
    /// | `Vec3`  | `Vec3`  | scalar, the dot product           |
    ///
    /// # Errors
    /// [`Error::Type`] for any other combination.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::*;
    /// let v = Operand::from(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(v.mul(2.0.into()), Ok(vec3(2.0, 4.0, 6.0).into()));
    /// assert_eq!(v.mul(v), Ok(14.0.into()));
    /// assert!(v.mul(Mat4::identity().into()).is_err());
    /// ```
    pub fn mul(self, rhs: Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a * b),
            (Self::Vec2(v), Self::Scalar(s))
            | (Self::Scalar(s), Self::Vec2(v)) => Self::Vec2(v * s),
            (Self::Vec3(v), Self::Scalar(s))
            | (Self::Scalar(s), Self::Vec3(v)) => Self::Vec3(v * s),
            (Self::Mat4(a), Self::Mat4(b)) => Self::Mat4(a * b),
            (Self::Mat4(m), Self::Vec3(v)) => Self::Vec3(m * v),
            (Self::Vec3(a), Self::Vec3(b)) => Self::Scalar(a.dot(&b)),
            (Self::Mat4(_), other) => {
                return Err(type_err("mul", "Mat4 or Vec3", other));
            }
            (Self::Vec2(_) | Self::Vec3(_), other) => {
                return Err(type_err("mul", "a scalar", other));
            }
            (Self::Scalar(_), other) => {
                return Err(type_err("mul", "a scalar or vector", other));
            }
        })
    }

    /// Divides `self` by the scalar `rhs`.
    ///
    /// Division by zero follows IEEE 754 and yields infinities or NaNs.
    ///
    /// # Errors
    /// [`Error::Type`] if `rhs` is not a scalar or `self` is a matrix.
    pub fn div(self, rhs: Self) -> Result<Self> {
        let Self::Scalar(s) = rhs else {
            return Err(type_err("div", "a scalar", rhs));
        };
        match self {
            Self::Scalar(a) => Ok(Self::Scalar(a / s)),
            Self::Vec2(v) => Ok(Self::Vec2(v / s)),
            Self::Vec3(v) => Ok(Self::Vec3(v / s)),
            Self::Mat4(_) => {
                Err(type_err("div", "a scalar or vector", self))
            }
        }
    }

    /// Adds `rhs` to `self`. Both must be scalars or vectors of the same
    /// kind.
    ///
    /// # Errors
    /// [`Error::Type`] if the kinds differ or either is a matrix.
    pub fn add(self, rhs: Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(a + b)),
            (Self::Vec2(a), Self::Vec2(b)) => Ok(Self::Vec2(a + b)),
            (Self::Vec3(a), Self::Vec3(b)) => Ok(Self::Vec3(a + b)),
            _ => Err(self.same_kind_err("add", rhs)),
        }
    }

    /// Subtracts `rhs` from `self`. Both must be scalars or vectors of the
    /// same kind.
    ///
    /// # Errors
    /// [`Error::Type`] if the kinds differ or either is a matrix.
    pub fn sub(self, rhs: Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(a - b)),
            (Self::Vec2(a), Self::Vec2(b)) => Ok(Self::Vec2(a - b)),
            (Self::Vec3(a), Self::Vec3(b)) => Ok(Self::Vec3(a - b)),
            _ => Err(self.same_kind_err("sub", rhs)),
        }
    }

    /// Returns the dot product of two vectors of the same kind.
    ///
    /// # Errors
    /// [`Error::Type`] unless both operands are `Vec2` or both are `Vec3`.
    pub fn dot(self, rhs: Self) -> Result<f64> {
        match (self, rhs) {
            (Self::Vec2(a), Self::Vec2(b)) => Ok(a.dot(&b)),
            (Self::Vec3(a), Self::Vec3(b)) => Ok(a.dot(&b)),
            (Self::Vec2(_) | Self::Vec3(_), _) => {
                Err(self.same_kind_err("dot", rhs))
            }
            _ => Err(type_err("dot", "a vector", self)),
        }
    }

    /// Returns the cross product of two `Vec3`s.
    ///
    /// # Errors
    /// [`Error::Type`] unless both operands are `Vec3`.
    pub fn cross(self, rhs: Self) -> Result<Vec3> {
        match (self, rhs) {
            (Self::Vec3(a), Self::Vec3(b)) => Ok(a.cross(&b)),
            (Self::Vec3(_), other) | (other, _) => {
                Err(type_err("cross", "Vec3", other))
            }
        }
    }

    /// Reflects `self` about the plane with normal `normal`.
    ///
    /// # Errors
    /// [`Error::Type`] unless both operands are `Vec2` or both are `Vec3`.
    pub fn reflect(self, normal: Self) -> Result<Self> {
        match (self, normal) {
            (Self::Vec2(v), Self::Vec2(n)) => Ok(Self::Vec2(v.reflect(&n))),
            (Self::Vec3(v), Self::Vec3(n)) => Ok(Self::Vec3(v.reflect(&n))),
            (Self::Vec2(_) | Self::Vec3(_), _) => {
                Err(self.same_kind_err("reflect", normal))
            }
            _ => Err(type_err("reflect", "a vector", self)),
        }
    }

    fn same_kind_err(self, op: &'static str, rhs: Self) -> Error {
        match self {
            Self::Scalar(_) => type_err(op, "Scalar", rhs),
            Self::Vec2(_) => type_err(op, "Vec2", rhs),
            Self::Vec3(_) => type_err(op, "Vec3", rhs),
            Self::Mat4(_) => type_err(op, "a scalar or vector", self),
        }
    }
}

fn type_err(op: &'static str, expected: &'static str, found: Operand) -> Error {
    Error::type_mismatch(op, expected, found.kind())
}

//
// Foreign trait impls
//

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Scalar => "Scalar",
            Kind::Vec2 => "Vec2",
            Kind::Vec3 => "Vec3",
            Kind::Mat4 => "Mat4",
        })
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}
impl From<Vec2> for Operand {
    fn from(v: Vec2) -> Self {
        Self::Vec2(v)
    }
}
impl From<Vec3> for Operand {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}
impl From<Mat4> for Operand {
    fn from(m: Mat4) -> Self {
        Self::Mat4(m)
    }
}

impl TryFrom<Operand> for f64 {
    type Error = Error;
    fn try_from(op: Operand) -> Result<Self> {
        match op {
            Operand::Scalar(s) => Ok(s),
            other => Err(type_err("into", "Scalar", other)),
        }
    }
}
impl TryFrom<Operand> for Vec3 {
    type Error = Error;
    fn try_from(op: Operand) -> Result<Self> {
        match op {
            Operand::Vec3(v) => Ok(v),
            other => Err(type_err("into", "Vec3", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat::{scale, translate};
    use crate::math::vec::{vec2, vec3};

    const S: Operand = Operand::Scalar(2.0);

    fn v2() -> Operand {
        vec2(1.0, 2.0).into()
    }
    fn v3() -> Operand {
        vec3(1.0, 2.0, 3.0).into()
    }
    fn m4() -> Operand {
        translate(1.0, 2.0, 3.0).into()
    }

    #[test]
    fn kinds() {
        assert_eq!(S.kind(), Kind::Scalar);
        assert_eq!(v2().kind(), Kind::Vec2);
        assert_eq!(v3().kind(), Kind::Vec3);
        assert_eq!(m4().kind(), Kind::Mat4);
    }

    mod mul {
        use super::*;

        #[test]
        fn scalars_and_vectors() {
            assert_eq!(S.mul(S), Ok(Operand::Scalar(4.0)));
            assert_eq!(v2().mul(S), Ok(vec2(2.0, 4.0).into()));
            assert_eq!(S.mul(v2()), Ok(vec2(2.0, 4.0).into()));
            assert_eq!(S.mul(v3()), Ok(vec3(2.0, 4.0, 6.0).into()));
        }

        #[test]
        fn matrices() {
            let s: Operand = scale(2.0, 2.0, 2.0).into();
            assert_eq!(
                m4().mul(s),
                Ok((translate(1.0, 2.0, 3.0) * scale(2.0, 2.0, 2.0)).into())
            );
            // Linear part only
            assert_eq!(m4().mul(v3()), Ok(v3()));
            assert_eq!(s.mul(v3()), Ok(vec3(2.0, 4.0, 6.0).into()));
        }

        #[test]
        fn vec3_by_vec3_is_dot() {
            assert_eq!(v3().mul(v3()), Ok(Operand::Scalar(14.0)));
        }

        #[test]
        fn mismatches() {
            assert_eq!(
                m4().mul(S),
                Err(Error::type_mismatch("mul", "Mat4 or Vec3", Kind::Scalar))
            );
            assert_eq!(
                v2().mul(v3()),
                Err(Error::type_mismatch("mul", "a scalar", Kind::Vec3))
            );
            assert_eq!(
                v2().mul(v2()),
                Err(Error::type_mismatch("mul", "a scalar", Kind::Vec2))
            );
            assert_eq!(
                S.mul(m4()),
                Err(Error::type_mismatch(
                    "mul",
                    "a scalar or vector",
                    Kind::Mat4
                ))
            );
            assert!(v3().mul(m4()).is_err());
        }
    }

    mod div {
        use super::*;

        #[test]
        fn by_scalar() {
            assert_eq!(S.div(S), Ok(Operand::Scalar(1.0)));
            assert_eq!(v2().div(S), Ok(vec2(0.5, 1.0).into()));
            assert_eq!(v3().div(S), Ok(vec3(0.5, 1.0, 1.5).into()));
        }

        #[test]
        fn by_zero_is_ieee() {
            let Ok(Operand::Vec2(v)) = v2().div(Operand::Scalar(0.0)) else {
                panic!("expected a Vec2");
            };
            assert_eq!(v, vec2(f64::INFINITY, f64::INFINITY));

            let zero = Operand::Scalar(0.0);
            let Ok(Operand::Scalar(s)) = zero.div(zero) else {
                panic!("expected a scalar");
            };
            assert!(s.is_nan());
        }

        #[test]
        fn mismatches() {
            assert_eq!(
                S.div(v2()),
                Err(Error::type_mismatch("div", "a scalar", Kind::Vec2))
            );
            assert_eq!(
                m4().div(S),
                Err(Error::type_mismatch(
                    "div",
                    "a scalar or vector",
                    Kind::Mat4
                ))
            );
        }
    }

    mod add_sub {
        use super::*;

        #[test]
        fn same_kind() {
            assert_eq!(S.add(S), Ok(Operand::Scalar(4.0)));
            assert_eq!(v2().add(v2()), Ok(vec2(2.0, 4.0).into()));
            assert_eq!(v3().sub(v3()), Ok(vec3(0.0, 0.0, 0.0).into()));
        }

        #[test]
        fn mismatches() {
            assert_eq!(
                v2().add(v3()),
                Err(Error::type_mismatch("add", "Vec2", Kind::Vec3))
            );
            assert_eq!(
                S.sub(v3()),
                Err(Error::type_mismatch("sub", "Scalar", Kind::Vec3))
            );
            assert_eq!(
                m4().add(m4()),
                Err(Error::type_mismatch(
                    "add",
                    "a scalar or vector",
                    Kind::Mat4
                ))
            );
        }
    }

    mod products {
        use super::*;

        #[test]
        fn dot() {
            assert_eq!(v2().dot(v2()), Ok(5.0));
            assert_eq!(v3().dot(v3()), Ok(14.0));
            assert_eq!(
                v2().dot(v3()),
                Err(Error::type_mismatch("dot", "Vec2", Kind::Vec3))
            );
            assert_eq!(
                S.dot(v3()),
                Err(Error::type_mismatch("dot", "a vector", Kind::Scalar))
            );
        }

        #[test]
        fn cross() {
            let x: Operand = Vec3::X.into();
            let y: Operand = Vec3::Y.into();
            assert_eq!(x.cross(y), Ok(Vec3::Z));
            assert_eq!(
                x.cross(v2()),
                Err(Error::type_mismatch("cross", "Vec3", Kind::Vec2))
            );
            assert_eq!(
                v2().cross(x),
                Err(Error::type_mismatch("cross", "Vec3", Kind::Vec2))
            );
        }

        #[test]
        fn reflect() {
            let v: Operand = vec2(1.0, -1.0).into();
            let n: Operand = vec2(0.0, 1.0).into();
            assert_eq!(v.reflect(n), Ok(vec2(1.0, 1.0).into()));
            assert_eq!(
                v3().reflect(n),
                Err(Error::type_mismatch("reflect", "Vec3", Kind::Vec2))
            );
            assert!(m4().reflect(m4()).is_err());
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(f64::try_from(S), Ok(2.0));
        assert_eq!(Vec3::try_from(v3()), Ok(vec3(1.0, 2.0, 3.0)));
        assert_eq!(
            Vec3::try_from(m4()),
            Err(Error::type_mismatch("into", "Vec3", Kind::Mat4))
        );
    }
}
