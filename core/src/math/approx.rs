//! Approximate equality of floating-point values and the types built on them.

use core::iter::zip;

/// Comparison within a tolerance.
///
/// Composing rotations or inverting a matrix leaves rounding residue in
/// almost every element, so exact equality is rarely the right test. The
/// tolerance is relative: `epsilon` is scaled by the magnitude of `self`,
/// but never by less than one, so values near zero compare absolutely.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Compares with the default tolerance of [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Compares with the tolerance `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// The tolerance used by [`Self::approx_eq`].
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        use super::float::fp;
        let scale = fp::abs(*self).max(1.0);
        fp::abs(self - other) <= *rel_eps * scale
    }

    fn relative_epsilon() -> Self {
        if cfg!(feature = "fp") { 1e-10 } else { 1e-4 }
    }
}

/// Element-wise; every pair must be within the tolerance.
impl<E, T: ApproxEq<T, E>, const N: usize> ApproxEq<Self, E> for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        zip(self, other).all(|(a, b)| a.approx_eq_eps(b, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Like `assert_eq!`, but compares with [`ApproxEq`].
///
/// An optional `eps = <tolerance>` overrides the default relative epsilon.
/// Both operands must impl `Debug`.
///
/// # Examples
/// ```
/// # use rigmath_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    (@cmp $a:ident, $b:ident) => {
        $crate::math::approx::ApproxEq::approx_eq($a, $b)
    };
    (@cmp $a:ident, $b:ident, $eps:expr) => {
        $crate::math::approx::ApproxEq::approx_eq_eps($a, $b, &$eps)
    };
    ($left:expr, $right:expr $(, eps = $eps:expr)? $(,)?) => {
        match (&$left, &$right) {
            (a, b) => assert!(
                $crate::assert_approx_eq!(@cmp a, b $(, $eps)?),
                "values not approximately equal\n  left: {a:?}\n right: {b:?}"
            ),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    fn signed_zeros_are_equal() {
        assert!(0.0_f64.approx_eq(&-0.0));
        assert!((-0.0_f64).approx_eq(&0.0));
    }

    #[test]
    fn tolerance_grows_with_magnitude() {
        // A far translation carries more absolute rounding error
        assert!(1.0e6_f64.approx_eq_eps(&(1.0e6 + 0.5), &1e-6));
        assert!(!1.0_f64.approx_eq_eps(&1.5, &1e-6));
    }

    #[test]
    fn tolerance_is_absolute_below_one() {
        assert!(1e-3_f64.approx_eq_eps(&0.0, &1e-2));
        assert!(!1e-3_f64.approx_eq_eps(&0.0, &1e-4));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!f64::NAN.approx_eq(&f64::NAN));
        assert!(!1.0_f64.approx_eq(&f64::NAN));
    }

    #[test]
    fn arrays_compare_every_element() {
        let row: [f64; 4] = [0.5, -1.0, 2.0, 1.0];
        assert!(row.approx_eq(&[0.5, -1.0, 2.0 + 1e-12, 1.0]));
        assert!(!row.approx_eq(&[0.5, -1.0, 2.0, 1.1]));
    }

    #[test]
    fn macro_accepts_custom_epsilon() {
        assert_approx_eq!(0.1 + 0.2, 0.3);
        assert_approx_eq!(90.0, 89.95, eps = 1e-3);
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0001], eps = 1e-3,);
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn macro_panics_on_mismatch() {
        assert_approx_eq!(0.0, 1.0);
    }
}
