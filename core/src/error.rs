//! Errors raised by the dynamically typed parts of the API.
//!
//! Most misuse is rejected at compile time by the operator impls of
//! [`Mat4`][crate::math::Mat4] and [`Vector`][crate::math::Vector]. The
//! remaining failures come from [`Operand`][crate::math::Operand]
//! arithmetic, whose operand kinds are only known at run time, and from
//! conversions out of slices whose length is not known statically.

use crate::math::operand::Kind;

/// A specialized `Result` type for fallible math operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type of the crate.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// An operand of the wrong kind was passed to an operation.
    #[error("{op}: expected {expected}, found {found}")]
    Type {
        op: &'static str,
        expected: &'static str,
        found: Kind,
    },

    /// A sequence of the wrong length was compared or converted.
    #[error("invalid length: expected {expected} elements, found {found}")]
    Length { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn type_mismatch(
        op: &'static str,
        expected: &'static str,
        found: Kind,
    ) -> Self {
        Self::Type { op, expected, found }
    }

    pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::Length { expected, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn type_error_display() {
        let e = Error::type_mismatch("mul", "a scalar", Kind::Mat4);
        assert_eq!(e.to_string(), "mul: expected a scalar, found Mat4");
    }

    #[test]
    fn length_error_display() {
        let e = Error::Length { expected: 3, found: 4 };
        assert_eq!(
            e.to_string(),
            "invalid length: expected 3 elements, found 4"
        );
    }

    #[test]
    fn check_len_accepts_only_exact_length() {
        assert_eq!(Error::check_len(2, 2), Ok(()));
        assert_eq!(
            Error::check_len(16, 9),
            Err(Error::Length { expected: 16, found: 9 })
        );
    }
}
