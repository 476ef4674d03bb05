//! 4x4 homogeneous transform matrices with CSS-style decomposition and
//! interpolation.
//!
//! The centerpiece is [`Matrix4`], a column-major 4x4 `f64` matrix built
//! up from the usual primitives (translate, scale, rotate, skew,
//! perspective) and applied to `f32` points, rectangles, and quads with
//! clamped, always-finite output. On top of that sit the animation
//! routines: [`Matrix4::decompose`] splits a matrix into interpolable
//! components, [`Decomposed3d::recompose`] reassembles them, and
//! [`Matrix4::blend`] interpolates between two arbitrary matrices,
//! falling back to a discrete midpoint jump when a matrix cannot be
//! decomposed.
//!
//! # Examples
//! ```
//! use unmatrix::{Matrix4, angle::degs, point::pt2};
//!
//! let mut from = Matrix4::identity();
//! from.translate(0.0, 0.0);
//! let mut to = Matrix4::identity();
//! to.translate(100.0, 0.0);
//! to.rotate_about_z(degs(90.0));
//!
//! // Halfway through the animation: half the translation, half the turn.
//! let mid = to.blend(&from, 0.5);
//! assert!((mid.map_point(pt2(0.0, 0.0)).x - 50.0).abs() < 1e-5);
//! ```
//!
//! # Crate features
//!
//! * `std` (default): float math via the standard library.
//! * `libm`: float math via the [`libm`] crate, for `no_std` targets.
//! * `serde`: `Serialize` and `Deserialize` impls for the public types.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "unmatrix requires a floating-point backend: \
     enable the `std` feature (default) or the `libm` feature"
);

pub mod angle;
pub mod approx;
pub mod decompose;
pub mod error;
pub mod float;
pub mod mat;
pub mod point;
pub mod quat;
pub mod rect;

pub use angle::Angle;
pub use decompose::{Decomposed2d, Decomposed3d};
pub use error::DecomposeError;
pub use mat::{Matrix4, ProjectedPoint};
pub use point::{Point2, Point3};
pub use quat::Quaternion;
pub use rect::{Quad, Rect};
