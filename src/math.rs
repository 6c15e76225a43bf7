//! Shared numerical primitives anchored on `nalgebra`.
//!
//! The library works in an (x, z) cross-section. Points and field vectors are stored as
//! [`R2`] with the second component holding z, so `p.y` reads as the z coordinate.

use nalgebra::Vector2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors in the (x, z) plane.
pub type R2 = Vector2<Scalar>;

/// Builds a cross-section point from its x and z coordinates in meters.
#[inline]
#[must_use]
pub fn point(x: Scalar, z: Scalar) -> R2 {
    R2::new(x, z)
}
