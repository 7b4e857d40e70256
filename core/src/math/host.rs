//! Extension traits for host-native matrix and vector types.
//!
//! An animation host usually has matrix and vector types of its own, and
//! scripts want to call transform operations on those directly. Instead of
//! wrapping them, a host type implements the small [`Elements`] trait,
//! exposing its components by flat index, and in return gets all the
//! methods of [`MatrixExt`] or [`VectorExt`] through blanket impls.
//!
//! ```
//! # use rigmath_core::math::*;
//! #[derive(Default)]
//! struct HostVector {
//!     xyz: [f64; 3],
//! }
//!
//! impl Elements<3> for HostVector {
//!     fn element(&self, i: usize) -> f64 {
//!         self.xyz[i]
//!     }
//!     fn set_element(&mut self, i: usize, v: f64) {
//!         self.xyz[i] = v;
//!     }
//! }
//!
//! let v = HostVector { xyz: [3.0, 0.0, 4.0] };
//! assert_eq!(v.to_vector(), vec3(3.0, 0.0, 4.0));
//! assert_eq!(v.dot(&v), 25.0);
//! ```

use core::array;

use crate::math::mat::Mat4;
use crate::math::vec::Vector;

/// Indexed access to the `N` real components of a host value.
///
/// Matrices have 16 elements in row-major order. `Default` must return the
/// identity matrix or the zero vector respectively.
pub trait Elements<const N: usize>: Default {
    /// Returns the component at flat index `i`.
    ///
    /// # Panics
    /// May panic if `i >= N`.
    fn element(&self, i: usize) -> f64;

    /// Sets the component at flat index `i` to `v`.
    ///
    /// # Panics
    /// May panic if `i >= N`.
    fn set_element(&mut self, i: usize, v: f64);
}

/// Transform operations on any host matrix type.
///
/// Implemented for every type that implements `Elements<16>`. Each method
/// converts to [`Mat4`], performs the operation, and converts back.
pub trait MatrixExt: Elements<16> {
    /// Copies the elements of `self` into a new `Mat4`.
    fn to_mat4(&self) -> Mat4 {
        Mat4(array::from_fn(|i| self.element(i)))
    }

    /// Returns a new host matrix with the elements of `m`.
    fn from_mat4(m: &Mat4) -> Self {
        let mut res = Self::default();
        MatrixExt::assign(&mut res, m);
        res
    }

    /// Overwrites all elements of `self` with those of `m`.
    fn assign(&mut self, m: &Mat4) {
        for (i, &e) in m.0.iter().enumerate() {
            self.set_element(i, e);
        }
    }

    /// Applies `f` to a `Mat4` copy of `self`, then writes the result back.
    ///
    /// # Examples
    /// ```
    /// # use rigmath_core::math::*;
    /// let mut m = [0.0f64; 16];
    /// m.update(|m| {
    ///     *m = Mat4::identity();
    ///     m.translate(1.0, 2.0, 3.0);
    /// });
    /// assert_eq!([m[3], m[7], m[11]], [1.0, 2.0, 3.0]);
    /// ```
    fn update<F: FnOnce(&mut Mat4)>(&mut self, f: F) -> &mut Self {
        let mut m = self.to_mat4();
        f(&mut m);
        MatrixExt::assign(self, &m);
        self
    }

    /// Returns the inverse of `self`, or identity if `self` is singular.
    ///
    /// See [`Mat4::inverse`].
    fn inverse(&self) -> Self {
        Self::from_mat4(&self.to_mat4().inverse())
    }

    /// Returns the transpose of `self`.
    fn transposed(&self) -> Self {
        Self::from_mat4(&self.to_mat4().transposed())
    }

    /// Returns the determinant of `self`.
    fn determinant(&self) -> f64 {
        self.to_mat4().determinant()
    }

    /// Transforms the host point `p` by `self`.
    ///
    /// See [`Mat4::transform_point`].
    fn transform_point<V: VectorExt<3>>(&self, p: &V) -> V {
        V::from_vector(&self.to_mat4().transform_point(&p.to_vector()))
    }
}

/// Vector operations on any host vector type.
///
/// Implemented for every type that implements `Elements<N>`.
pub trait VectorExt<const N: usize>: Elements<N> {
    /// Copies the components of `self` into a new `Vector`.
    fn to_vector(&self) -> Vector<N> {
        Vector(array::from_fn(|i| self.element(i)))
    }

    /// Returns a new host vector with the components of `v`.
    fn from_vector(v: &Vector<N>) -> Self {
        let mut res = Self::default();
        VectorExt::assign(&mut res, v);
        res
    }

    /// Overwrites all components of `self` with those of `v`.
    fn assign(&mut self, v: &Vector<N>) {
        for (i, &c) in v.0.iter().enumerate() {
            self.set_element(i, c);
        }
    }

    /// Returns the Euclidean length of `self`.
    fn magnitude(&self) -> f64 {
        self.to_vector().magnitude()
    }

    /// Returns `self` scaled to unit length, or unchanged if zero.
    fn normalized(&self) -> Self {
        Self::from_vector(&self.to_vector().normalized())
    }

    /// Returns the dot product of `self` and `other`.
    fn dot(&self, other: &Self) -> f64 {
        self.to_vector().dot(&other.to_vector())
    }
}

impl<T: Elements<16>> MatrixExt for T {}

impl<T: Elements<N>, const N: usize> VectorExt<N> for T {}

//
// Elements impls for the crate's own types and plain arrays
//

impl Elements<16> for Mat4 {
    #[inline]
    fn element(&self, i: usize) -> f64 {
        self.0[i]
    }
    #[inline]
    fn set_element(&mut self, i: usize, v: f64) {
        self.0[i] = v;
    }
}

impl<const N: usize> Elements<N> for Vector<N> {
    #[inline]
    fn element(&self, i: usize) -> f64 {
        self.0[i]
    }
    #[inline]
    fn set_element(&mut self, i: usize, v: f64) {
        self.0[i] = v;
    }
}

/// Plain arrays act as host values. Note that a default `[f64; 16]` is all
/// zeros rather than the identity.
impl<const N: usize> Elements<N> for [f64; N]
where
    [f64; N]: Default,
{
    #[inline]
    fn element(&self, i: usize) -> f64 {
        self[i]
    }
    #[inline]
    fn set_element(&mut self, i: usize, v: f64) {
        self[i] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::mat::{scale, translate};
    use crate::math::vec::{Vec3, vec2, vec3};

    /// Stands in for a host matrix stored as nested rows.
    #[derive(Debug, PartialEq)]
    struct HostMatrix {
        rows: [[f64; 4]; 4],
    }

    impl Default for HostMatrix {
        fn default() -> Self {
            let rows = array::from_fn(|r| {
                array::from_fn(|c| if r == c { 1.0 } else { 0.0 })
            });
            Self { rows }
        }
    }

    impl Elements<16> for HostMatrix {
        fn element(&self, i: usize) -> f64 {
            self.rows[i / 4][i % 4]
        }
        fn set_element(&mut self, i: usize, v: f64) {
            self.rows[i / 4][i % 4] = v;
        }
    }

    /// Stands in for a host vector with named fields.
    #[derive(Debug, Default, PartialEq)]
    struct HostVector {
        x: f64,
        y: f64,
        z: f64,
    }

    impl Elements<3> for HostVector {
        fn element(&self, i: usize) -> f64 {
            match i {
                0 => self.x,
                1 => self.y,
                2 => self.z,
                _ => panic!("index out of range: {i}"),
            }
        }
        fn set_element(&mut self, i: usize, v: f64) {
            match i {
                0 => self.x = v,
                1 => self.y = v,
                2 => self.z = v,
                _ => panic!("index out of range: {i}"),
            }
        }
    }

    fn host_vec(x: f64, y: f64, z: f64) -> HostVector {
        HostVector { x, y, z }
    }

    mod matrix {
        use super::*;

        #[test]
        fn default_is_identity() {
            assert_eq!(HostMatrix::default().to_mat4(), Mat4::IDENTITY);
        }

        #[test]
        fn round_trip() {
            let m = translate(1.0, 2.0, 3.0) * scale(4.0, 5.0, 6.0);
            let h = HostMatrix::from_mat4(&m);
            assert_eq!(h.rows[0], [4.0, 0.0, 0.0, 1.0]);
            assert_eq!(h.rows[2], [0.0, 0.0, 6.0, 3.0]);
            assert_eq!(h.to_mat4(), m);
        }

        #[test]
        fn update_composes_in_place() {
            let mut h = HostMatrix::default();
            h.update(|m| {
                m.translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
            })
            .update(|m| {
                m.translate(0.0, 1.0, 0.0);
            });
            assert_eq!(
                h.to_mat4(),
                translate(1.0, 0.0, 0.0)
                    * scale(2.0, 2.0, 2.0)
                    * translate(0.0, 1.0, 0.0)
            );
        }

        #[test]
        fn inverse_and_determinant() {
            let h = HostMatrix::from_mat4(&scale(2.0, 4.0, 8.0));
            assert_eq!(h.determinant(), 64.0);
            assert_approx_eq!(
                h.inverse().to_mat4(),
                scale(0.5, 0.25, 0.125)
            );

            let singular = HostMatrix::from_mat4(&scale(0.0, 1.0, 1.0));
            assert_eq!(singular.inverse(), HostMatrix::default());
        }

        #[test]
        fn transposed() {
            let h = HostMatrix::from_mat4(&translate(1.0, 2.0, 3.0));
            let t = h.transposed();
            assert_eq!(t.rows[3], [1.0, 2.0, 3.0, 1.0]);
            assert_eq!(t.transposed(), h);
        }

        #[test]
        fn transform_host_point() {
            let h = HostMatrix::from_mat4(&translate(1.0, 2.0, 3.0));
            let p = h.transform_point(&host_vec(1.0, 1.0, 1.0));
            assert_eq!(p, host_vec(2.0, 3.0, 4.0));
        }

        #[test]
        fn plain_array_as_matrix() {
            let mut a = [0.0f64; 16];
            MatrixExt::assign(&mut a, &translate(7.0, 8.0, 9.0));
            assert_eq!(a.to_mat4().translation(), vec3(7.0, 8.0, 9.0));
            assert_eq!(a.determinant(), 1.0);
        }
    }

    mod vector {
        use super::*;

        #[test]
        fn round_trip() {
            let h = HostVector::from_vector(&vec3(1.0, 2.0, 3.0));
            assert_eq!(h, host_vec(1.0, 2.0, 3.0));
            assert_eq!(h.to_vector(), vec3(1.0, 2.0, 3.0));
        }

        #[test]
        fn assign() {
            let mut h = HostVector::default();
            h.assign(&Vec3::Z);
            assert_eq!(h, host_vec(0.0, 0.0, 1.0));
        }

        #[test]
        fn magnitude_and_normalized() {
            let h = host_vec(0.0, 3.0, 4.0);
            assert_approx_eq!(h.magnitude(), 5.0);
            assert_approx_eq!(
                h.normalized().to_vector(),
                vec3(0.0, 0.6, 0.8)
            );
            let zero = HostVector::default();
            assert_eq!(zero.normalized(), host_vec(0.0, 0.0, 0.0));
        }

        #[test]
        fn dot() {
            let a = host_vec(1.0, 2.0, 3.0);
            let b = host_vec(-1.0, 0.0, 1.0);
            assert_eq!(a.dot(&b), 2.0);
        }

        #[test]
        fn plain_arrays_as_vectors() {
            let a = [3.0f64, 4.0];
            assert_eq!(a.to_vector(), vec2(3.0, 4.0));
            assert_approx_eq!(a.magnitude(), 5.0);
            assert_eq!(<[f64; 2]>::from_vector(&vec2(1.0, 2.0)), [1.0, 2.0]);
        }

        #[test]
        #[should_panic(expected = "index out of range: 3")]
        fn out_of_range_panics() {
            HostVector::default().element(3);
        }
    }
}
