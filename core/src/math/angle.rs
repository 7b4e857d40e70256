//! Angular quantities.

use core::f64::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f64` value.
/// Host applications commonly expose rotations in degrees while the
/// trigonometric factories work in radians; this type sits between them.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f64);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads(a: f64) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs(a: f64) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub fn turns(a: f64) -> Angle {
    Angle(a * RADS_PER_TURN)
}

/// Returns the arccosine of `x` as an `Angle`.
///
/// The return value is in the range [0°, 180°]. Inputs slightly outside
/// [-1.0, 1.0], as produced by rounding error in a dot product of unit
/// vectors, are clamped to that range instead of yielding NaN.
///
/// # Examples
/// ```
/// # use rigmath_core::math::angle::*;
/// assert_eq!(acos(1.0), degs(0.0));
/// assert_eq!(acos(-1.000001), Angle::STRAIGHT);
/// ```
#[cfg(feature = "fp")]
pub fn acos(x: f64) -> Angle {
    use crate::math::float::fp;
    if x <= -1.0 {
        Angle::STRAIGHT
    } else if x >= 1.0 {
        Angle::ZERO
    } else {
        Angle(fp::acos(x))
    }
}

const RADS_PER_DEG: f64 = PI / 180.0;
const RADS_PER_TURN: f64 = TAU;

//
// Inherent impls
//

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use std::f64;
    /// # use rigmath_core::math::degs;
    /// assert_eq!(degs(90.0).to_rads(), f64::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> f64 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use rigmath_core::math::turns;
    /// assert_eq!(turns(2.0).to_degs(), 720.0);
    /// ```
    pub fn to_degs(self) -> f64 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    /// # Examples
    /// ```
    /// # use rigmath_core::math::degs;
    /// assert_eq!(degs(180.0).to_turns(), 0.5);
    /// ```
    pub fn to_turns(self) -> f64 {
        self.0 / RADS_PER_TURN
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// # use rigmath_core::math::angle::*;
    /// assert_approx_eq!(degs(30.0).sin(), 0.5)
    /// ```
    pub fn sin(self) -> f64 {
        crate::math::float::fp::sin(self.0)
    }
    /// Returns the cosine of `self`.
    /// # Examples
    /// ```
    /// # use rigmath_core::assert_approx_eq;
    /// # use rigmath_core::math::angle::*;
    /// assert_approx_eq!(degs(60.0).cos(), 0.5)
    /// ```
    pub fn cos(self) -> f64 {
        crate::math::float::fp::cos(self.0)
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f64, f64) {
        crate::math::float::fp::sin_cos(self.0)
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> f64 {
        crate::math::float::fp::tan(self.0)
    }
}

//
// Local trait impls
//

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f64::relative_epsilon())
    }
}

//
// Foreign trait impls
//

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (val, unit) = if f.alternate() {
            (self.to_rads() / PI, "π rad")
        } else {
            (self.to_degs(), "°")
        };
        Display::fmt(&val, f)?;
        f.write_str(unit)
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f64> for Angle {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}
