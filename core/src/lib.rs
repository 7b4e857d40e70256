//! Affine transform math for objects owned by a 3D animation host.
//!
//! The host application owns the scene graph and its native matrix and
//! vector types. This crate supplies the numeric side: 4x4 row-major
//! matrices, 2D and 3D vectors, strongly typed angles, and extension
//! traits that graft these operations onto any host type exposing its
//! elements by index.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std`. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` targets.
//!
//! Without either feature, only square roots (approximated) are available,
//! and every item requiring trigonometry is compiled out.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod math;

pub use error::{Error, Result};

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{
        perspective, rotate_axis, rotate_euler, rotate_x, rotate_y, rotate_z,
    };
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        approx::ApproxEq,
        host::{Elements, MatrixExt, VectorExt},
        mat::{Mat4, look_at, rotate_triple_axis, scale, translate},
        operand::{Kind, Operand},
        vec::{Vec2, Vec3, Vector, splat, vec2, vec3},
    };
}
