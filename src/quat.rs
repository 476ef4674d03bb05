//! Unit quaternions representing 3D rotations.

use crate::angle::Angle;
use crate::approx::ApproxEq;
use crate::float;
use crate::mat::Matrix4;

/// A rotation quaternion, `w + xi + yj + zk`.
///
/// The decomposition routines keep these normalized; the arithmetic
/// helpers do not renormalize on their own.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Nearly parallel quaternions make the slerp denominator vanish; past
/// this threshold a normalized lerp is used instead.
const SLERP_EPSILON: f64 = 1e-5;

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Returns a quaternion with the given components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the rotation of `angle` about the given axis.
    ///
    /// The axis must be a unit vector.
    pub fn from_axis_angle(axis: [f64; 3], angle: Angle) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(axis[0] * s, axis[1] * s, axis[2] * s, c)
    }

    /// Returns the four-component dot product of `self` and `other`.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
            + self.w * other.w
    }

    /// Returns the Euclidean length of `self`.
    pub fn length(&self) -> f64 {
        float::sqrt(self.dot(self))
    }

    /// Returns `self` scaled to unit length, or the identity if the
    /// length is zero, subnormal, or non-finite.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len.is_normal() { self.scaled(1.0 / len) } else { Self::IDENTITY }
    }

    /// Spherical linear interpolation from `self` to `other`.
    ///
    /// Interpolates along the shorter of the two great-circle arcs, so a
    /// blend never takes the long way around. Both inputs must be unit
    /// quaternions.
    #[must_use]
    pub fn slerp(self, other: Self, t: f64) -> Self {
        let mut from = self;
        let mut cos_half = from.dot(&other);
        // Antipodal quaternions encode the same rotation; flip to take
        // the shorter arc.
        if cos_half < 0.0 {
            from = from.scaled(-1.0);
            cos_half = -cos_half;
        }
        if cos_half > 1.0 - SLERP_EPSILON {
            return from.lerp(&other, t).normalized();
        }
        let half = float::acos(cos_half.min(1.0));
        let denom = float::sin(half);
        let a = float::sin((1.0 - t) * half) / denom;
        let b = float::sin(t * half) / denom;
        from.scaled(a).add(&other.scaled(b))
    }

    /// Component-wise linear interpolation. The result is not generally
    /// a unit quaternion.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        self.scaled(1.0 - t).add(&other.scaled(t))
    }

    fn scaled(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl From<Quaternion> for Matrix4 {
    /// Returns the rotation matrix equivalent to a unit quaternion.
    fn from(q: Quaternion) -> Self {
        let Quaternion { x, y, z, w } = q;
        let mut m = Self::IDENTITY;
        m.set_rc(0, 0, 1.0 - 2.0 * (y * y + z * z));
        m.set_rc(0, 1, 2.0 * (x * y - z * w));
        m.set_rc(0, 2, 2.0 * (x * z + y * w));
        m.set_rc(1, 0, 2.0 * (x * y + z * w));
        m.set_rc(1, 1, 1.0 - 2.0 * (x * x + z * z));
        m.set_rc(1, 2, 2.0 * (y * z - x * w));
        m.set_rc(2, 0, 2.0 * (x * z - y * w));
        m.set_rc(2, 1, 2.0 * (y * z + x * w));
        m.set_rc(2, 2, 1.0 - 2.0 * (x * x + y * y));
        m
    }
}

impl ApproxEq<Self, f64> for Quaternion {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        [self.x, self.y, self.z, self.w]
            .approx_eq_eps(&[other.x, other.y, other.z, other.w], eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}
