//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the ones the crate needs through a single path, [`fp`], backed
//! by `std` or by the `libm` crate depending on which feature is enabled.
//! As a fallback, square root and absolute value are implemented even if
//! neither feature is, so that vector lengths remain usable.

#[cfg(all(feature = "fp", not(any(feature = "std", feature = "libm"))))]
compile_error!("the `fp` feature requires either `std` or `libm`");

#[cfg(feature = "std")]
pub mod native {
    #[inline]
    pub fn abs(x: f64) -> f64 {
        x.abs()
    }
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline]
    pub fn sin(x: f64) -> f64 {
        x.sin()
    }
    #[inline]
    pub fn cos(x: f64) -> f64 {
        x.cos()
    }
    #[inline]
    pub fn sin_cos(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
    #[inline]
    pub fn tan(x: f64) -> f64 {
        x.tan()
    }
    #[inline]
    pub fn acos(x: f64) -> f64 {
        x.acos()
    }
}

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabs as abs;
    pub use libm::sqrt;

    pub use libm::cos;
    pub use libm::sin;
    pub use libm::tan;

    pub use libm::acos;

    #[inline]
    pub fn sin_cos(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

pub mod fallback {
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f64) -> f64 {
        f64::from_bits(x.to_bits() & !(1 << 63))
    }
    /// Returns the square root of `x`.
    ///
    /// Starts from [`fast_recip_sqrt`][super::fast_recip_sqrt] and
    /// finishes with one Heron step, which makes the result exact for
    /// perfect squares such as the squared length of an axis vector.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        if x == 0.0 {
            return x;
        }
        let s = x * super::fast_recip_sqrt(x);
        0.5 * (s + x / s)
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
///
/// The relative error is below 1e-9 for positive normal inputs. Returns
/// NaN if `x` is negative.
#[inline]
pub fn fast_recip_sqrt(x: f64) -> f64 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u64 = 0x5fe6_eb50_c7b5_37a9;
    if x < 0.0 {
        return f64::NAN;
    }
    let mut y = f64::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // Three rounds of Newton's method
    for _ in 0..3 {
        y *= 1.5 - 0.5 * x * y * y;
    }
    y
}

#[cfg(feature = "std")]
pub use native as fp;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use self::libm as fp;

#[cfg(not(feature = "fp"))]
pub use fallback as fp;
