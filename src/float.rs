//! Floating-point compatibility API.
//!
//! Decomposition and interpolation are computed in `f64` throughout, but
//! most `f64` functions are unavailable in `core`. This module routes them
//! either to the std intrinsics or to the [libm](https://crates.io/crates/libm)
//! crate, depending on which feature is enabled.

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }
    /// Returns `sqrt(x² + y²)` without undue overflow.
    #[inline]
    pub fn hypot(x: f64, y: f64) -> f64 {
        x.hypot(y)
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
    #[inline]
    pub fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f64, m: f64) -> f64 {
        x.rem_euclid(m)
    }
}

#[cfg(all(feature = "libm", not(feature = "std")))]
mod imp {
    pub use libm::{acos, atan2, cos, hypot, sin, sqrt, tan};

    #[inline]
    pub fn sin_cos(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f64, m: f64) -> f64 {
        let r = libm::fmod(x, m);
        if r < 0.0 { r + m.abs() } else { r }
    }
}

pub use imp::*;

/// Narrows an internal `f64` result to the public `f32` boundary.
///
/// Mapping APIs must never hand out a non-finite value: overflow saturates
/// to the representable `f32` range and NaN collapses to zero. Raw storage
/// exports bypass this on purpose; see [`Matrix4::col_major_f32`]
/// [crate::Matrix4::col_major_f32].
#[inline]
pub(crate) fn clamp_f32(x: f64) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(f32::MIN as f64, f32::MAX as f64) as f32
    }
}
