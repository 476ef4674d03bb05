//! Points at the single-precision API boundary.
//!
//! Matrix internals are `f64`; these are the `f32` value types handed in
//! and out of the mapping APIs.

use crate::approx::ApproxEq;

/// A 2D point with `f32` coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D point with `f32` coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Returns a 2D point with `x` and `y` coordinates.
pub const fn pt2(x: f32, y: f32) -> Point2 {
    Point2 { x, y }
}

/// Returns a 3D point with `x`, `y`, and `z` coordinates.
pub const fn pt3(x: f32, y: f32, z: f32) -> Point3 {
    Point3 { x, y, z }
}

impl Point2 {
    /// The origin, (0, 0).
    pub const ORIGIN: Self = pt2(0.0, 0.0);

    /// Returns `self` with a z coordinate of zero.
    pub const fn to_3d(self) -> Point3 {
        pt3(self.x, self.y, 0.0)
    }
}

impl Point3 {
    /// The origin, (0, 0, 0).
    pub const ORIGIN: Self = pt3(0.0, 0.0, 0.0);

    /// Returns `self` with the z coordinate dropped.
    pub const fn to_2d(self) -> Point2 {
        pt2(self.x, self.y)
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        p.to_3d()
    }
}

impl ApproxEq<Self, f32> for Point2 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        [self.x, self.y].approx_eq_eps(&[other.x, other.y], eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl ApproxEq<Self, f32> for Point3 {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        [self.x, self.y, self.z]
            .approx_eq_eps(&[other.x, other.y, other.z], eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
