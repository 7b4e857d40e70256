//! Vectors, matrices and angles.
//!
//! Includes [vectors][self::vec], [4x4 matrices][mat] and [angles][angle],
//! a run-time tagged [operand][operand] type for callers that only learn
//! operand kinds dynamically, [extension traits][host] for host-native
//! types, and utilities such as approximate equality comparisons.
//!
//! Matrices are row-major: element `i` lives at row `i / 4`, column
//! `i % 4`, and points are transformed as column vectors multiplied on the
//! right. Composing `a * b` therefore applies `b` first, in the local frame
//! of `a`.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    host::{Elements, MatrixExt, VectorExt},
    mat::{Mat4, look_at, rotate_triple_axis, scale, translate},
    operand::{Kind, Operand},
    vec::{Vec2, Vec3, Vector, splat, vec2, vec3},
};
#[cfg(feature = "fp")]
pub use {
    angle::acos,
    mat::{perspective, rotate_axis, rotate_euler, rotate_x, rotate_y, rotate_z},
};

/// Implements a binary operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs; self
            }
        }
    };
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt, const $n:ident) => {
        impl<const $n: usize> $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs; self
            }
        }
    };
}

pub mod angle;
pub mod approx;
pub mod float;
pub mod host;
pub mod mat;
pub mod operand;
pub mod vec;
