//! Matrix decomposition, recomposition, and interpolation.
//!
//! A matrix is split into primitive components (translation, scale, skew,
//! rotation, perspective), the components are interpolated piecewise, and
//! the result is recomposed into a matrix. Flat 2D matrices use a closed
//! form with a scalar rotation angle; general matrices use Gram–Schmidt
//! orthogonalization with a quaternion rotation.
//!
//! Decomposition is lossy as a description (many component tuples map to
//! the same matrix) but round-trips: `m.decompose()?.recompose()`
//! reproduces `m` to within accumulated rounding error. A matrix with a
//! non-unit homogeneous scale round-trips to its normalized form, the
//! same projective transform.

use core::f64::consts::{PI, TAU};

use crate::angle::{Angle, rads};
use crate::error::DecomposeError;
use crate::float;
use crate::mat::Matrix4;
use crate::quat::Quaternion;

/// The components of a general 3D matrix.
///
/// Recomposition applies them innermost first: scale, then the three
/// skews (xy, xz, yz), rotation, translation, and finally perspective.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposed3d {
    pub translate: [f64; 3],
    pub scale: [f64; 3],
    /// Shear factors in the order xy, xz, yz.
    pub skew: [f64; 3],
    pub quaternion: Quaternion,
    /// The bottom row of the matrix, `[0, 0, 0, 1]` when there is no
    /// perspective.
    pub perspective: [f64; 4],
}

/// The components of a flat 2D matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposed2d {
    pub translate: [f64; 2],
    pub scale: [f64; 2],
    /// Shear factor coupling y into x.
    pub skew_xy: f64,
    pub angle: Angle,
}

impl Default for Decomposed3d {
    /// Returns the decomposition of the identity matrix.
    fn default() -> Self {
        Self {
            translate: [0.0; 3],
            scale: [1.0; 3],
            skew: [0.0; 3],
            quaternion: Quaternion::IDENTITY,
            perspective: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Default for Decomposed2d {
    /// Returns the decomposition of the identity matrix.
    fn default() -> Self {
        Self {
            translate: [0.0; 2],
            scale: [1.0; 2],
            skew_xy: 0.0,
            angle: Angle::ZERO,
        }
    }
}

//
// Decomposition
//

impl Matrix4 {
    /// Splits `self` into translation, scale, skew, rotation, and
    /// perspective components.
    ///
    /// Fails when the matrix is singular or a component is degenerate;
    /// see [`DecomposeError`] for the cases. The identity matrix short-
    /// circuits to the default decomposition without any arithmetic.
    pub fn decompose(&self) -> Result<Decomposed3d, DecomposeError> {
        if self.is_identity() {
            return Ok(Decomposed3d::default());
        }

        let w = self.rc(3, 3);
        if !w.is_normal() {
            return Err(DecomposeError::DegenerateW);
        }
        let mut m = *self;
        for c in 0..4 {
            for r in 0..4 {
                m.0[c][r] /= w;
            }
        }

        let mut out = Decomposed3d::default();

        if m.rc(3, 0) != 0.0 || m.rc(3, 1) != 0.0 || m.rc(3, 2) != 0.0 {
            // The same matrix with the perspective row reset; its
            // inverse solves for the perspective component. A matrix
            // without a perspective row skips the solve entirely.
            let mut pm = m;
            for c in 0..3 {
                pm.set_rc(3, c, 0.0);
            }
            pm.set_rc(3, 3, 1.0);

            let inv = pm.inverse().ok_or(DecomposeError::Singular)?;
            let rhs = [m.rc(3, 0), m.rc(3, 1), m.rc(3, 2), m.rc(3, 3)];
            // The perspective row satisfies row = persp · pm, so persp
            // is the row vector row · pm⁻¹.
            for c in 0..4 {
                out.perspective[c] = (0..4)
                    .map(|k| rhs[k] * inv.rc(k, c))
                    .sum();
            }
        }

        out.translate = [m.rc(0, 3), m.rc(1, 3), m.rc(2, 3)];

        // Basis columns of the linear part.
        let mut basis = [[0.0; 3]; 3];
        for (c, col) in basis.iter_mut().enumerate() {
            for (r, v) in col.iter_mut().enumerate() {
                *v = m.rc(r, c);
            }
        }

        // Gram–Schmidt: column lengths become scale factors, projections
        // onto earlier columns become skew factors. The xy skew is
        // rescaled once the y scale is known, the xz and yz skews once
        // the z scale is known.
        out.scale[0] = normalize(&mut basis[0])?;

        out.skew[0] = dot(basis[0], basis[1]);
        basis[1] = combine(basis[1], basis[0], 1.0, -out.skew[0]);
        out.scale[1] = normalize(&mut basis[1])?;
        out.skew[0] /= out.scale[1];

        out.skew[1] = dot(basis[0], basis[2]);
        basis[2] = combine(basis[2], basis[0], 1.0, -out.skew[1]);
        out.skew[2] = dot(basis[1], basis[2]);
        basis[2] = combine(basis[2], basis[1], 1.0, -out.skew[2]);
        out.scale[2] = normalize(&mut basis[2])?;
        out.skew[1] /= out.scale[2];
        out.skew[2] /= out.scale[2];

        // A negative triple product means the basis contains a
        // reflection; fold it into the scale so the remainder is a
        // proper rotation.
        if dot(basis[0], cross(basis[1], basis[2])) < 0.0 {
            for (s, col) in out.scale.iter_mut().zip(&mut basis) {
                *s = -*s;
                for v in col {
                    *v = -*v;
                }
            }
        }

        out.quaternion = rotation_to_quaternion(&basis);
        Ok(out)
    }

    /// Splits a flat 2D matrix into translation, scale, skew, and a
    /// scalar rotation angle.
    ///
    /// Fails with [`DecomposeError::Not2d`] if [`is_2d`][Self::is_2d] is
    /// false, and with [`DecomposeError::Singular`] if the 2x2 linear
    /// part has a degenerate determinant.
    pub fn decompose_2d(&self) -> Result<Decomposed2d, DecomposeError> {
        if !self.is_2d() {
            return Err(DecomposeError::Not2d);
        }
        let mut col_x = [self.rc(0, 0), self.rc(1, 0)];
        let mut col_y = [self.rc(0, 1), self.rc(1, 1)];
        let det = col_x[0] * col_y[1] - col_x[1] * col_y[0];
        if !det.is_normal() {
            return Err(DecomposeError::Singular);
        }

        let mut scale_x = float::hypot(col_x[0], col_x[1]);
        col_x = [col_x[0] / scale_x, col_x[1] / scale_x];

        let mut shear = col_x[0] * col_y[0] + col_x[1] * col_y[1];
        col_y = [col_y[0] - shear * col_x[0], col_y[1] - shear * col_x[1]];
        let mut scale_y = float::hypot(col_y[0], col_y[1]);
        shear /= scale_y;

        if det < 0.0 {
            // One scale must absorb the reflection; pick by comparing
            // the diagonal so pure flips decompose without rotation.
            if self.rc(0, 0) < self.rc(1, 1) {
                scale_x = -scale_x;
                col_x = [-col_x[0], -col_x[1]];
            } else {
                scale_y = -scale_y;
            }
            shear = -shear;
        }

        Ok(Decomposed2d {
            translate: [self.rc(0, 3), self.rc(1, 3)],
            scale: [scale_x, scale_y],
            skew_xy: shear,
            angle: crate::angle::atan2(col_x[1], col_x[0]),
        })
    }

    /// Interpolates from `from` toward `self` by `progress`, CSS
    /// `matrix()` animation style.
    ///
    /// If both matrices are flat 2D transforms their closed-form
    /// decompositions are interpolated; otherwise the general quaternion
    /// path is used. If either matrix fails to decompose, the result
    /// falls back to a discrete jump at the midpoint: `from` below 0.5
    /// progress, `self` at and above, returned bit for bit.
    ///
    /// `progress` outside 0..=1 extrapolates.
    #[must_use]
    pub fn blend(&self, from: &Self, progress: f64) -> Self {
        if self.is_2d() && from.is_2d() {
            if let (Ok(to), Ok(from)) =
                (self.decompose_2d(), from.decompose_2d())
            {
                return from.lerp(&to, progress).recompose();
            }
        } else if let (Ok(to), Ok(from)) = (self.decompose(), from.decompose())
        {
            return from.lerp(&to, progress).recompose();
        }
        if progress < 0.5 { *from } else { *self }
    }
}

//
// Recomposition and interpolation
//

impl Decomposed3d {
    /// Rebuilds the matrix described by `self`.
    pub fn recompose(&self) -> Matrix4 {
        let mut m = Matrix4::identity();
        for (c, p) in self.perspective.into_iter().enumerate() {
            m.set_rc(3, c, p);
        }
        m.translate3d(self.translate[0], self.translate[1], self.translate[2]);
        m.pre_concat(&Matrix4::from(self.quaternion));
        // Innermost skew first: yz, xz, xy.
        for (r, c, v) in
            [(1, 2, self.skew[2]), (0, 2, self.skew[1]), (0, 1, self.skew[0])]
        {
            if v != 0.0 {
                let mut sk = Matrix4::identity();
                sk.set_rc(r, c, v);
                m.pre_concat(&sk);
            }
        }
        m.scale3d(self.scale[0], self.scale[1], self.scale[2]);
        m
    }

    /// Interpolates each component from `self` toward `other`.
    ///
    /// Scalar components interpolate linearly; the rotation follows the
    /// shorter great-circle arc. Equal components pass through bit for
    /// bit, untouched by the arithmetic.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            translate: lerp_n(self.translate, other.translate, t),
            scale: lerp_n(self.scale, other.scale, t),
            skew: lerp_n(self.skew, other.skew, t),
            quaternion: if self.quaternion == other.quaternion {
                self.quaternion
            } else {
                self.quaternion.slerp(other.quaternion, t)
            },
            perspective: lerp_n(self.perspective, other.perspective, t),
        }
    }
}

impl Decomposed2d {
    /// Rebuilds the matrix described by `self`.
    pub fn recompose(&self) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.translate(self.translate[0], self.translate[1]);
        m.rotate_about_z(self.angle);
        if self.skew_xy != 0.0 {
            let mut sk = Matrix4::identity();
            sk.set_rc(0, 1, self.skew_xy);
            m.pre_concat(&sk);
        }
        m.scale(self.scale[0], self.scale[1]);
        m
    }

    /// Interpolates each component from `self` toward `other`, turning
    /// through the smaller of the two arcs between the angles.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut from_angle = self.angle.to_rads();
        let mut to_angle = other.angle.to_rads();
        if (from_angle - to_angle).abs() > PI {
            if from_angle > to_angle {
                from_angle -= TAU;
            } else {
                to_angle -= TAU;
            }
        }
        Self {
            translate: lerp_n(self.translate, other.translate, t),
            scale: lerp_n(self.scale, other.scale, t),
            skew_xy: lerp_one(self.skew_xy, other.skew_xy, t),
            angle: rads(lerp_one(from_angle, to_angle, t)),
        }
    }
}

//
// Vector helpers
//

fn lerp_one(a: f64, b: f64, t: f64) -> f64 {
    if a == b { a } else { a + (b - a) * t }
}

fn lerp_n<const N: usize>(a: [f64; N], b: [f64; N], t: f64) -> [f64; N] {
    let mut out = a;
    for (o, b) in out.iter_mut().zip(b) {
        *o = lerp_one(*o, b, t);
    }
    out
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn combine(a: [f64; 3], b: [f64; 3], at: f64, bt: f64) -> [f64; 3] {
    [
        at * a[0] + bt * b[0],
        at * a[1] + bt * b[1],
        at * a[2] + bt * b[2],
    ]
}

/// Scales `v` to unit length and returns its previous length, or fails
/// if the length is zero, subnormal, or non-finite.
fn normalize(v: &mut [f64; 3]) -> Result<f64, DecomposeError> {
    let len = float::sqrt(dot(*v, *v));
    if !len.is_normal() {
        return Err(DecomposeError::DegenerateScale);
    }
    for c in v {
        *c /= len;
    }
    Ok(len)
}

/// Converts an orthonormal, right-handed basis to a unit quaternion.
fn rotation_to_quaternion(basis: &[[f64; 3]; 3]) -> Quaternion {
    // r(i, j) is row i, column j of the rotation matrix.
    let r = |i: usize, j: usize| basis[j][i];
    let trace = r(0, 0) + r(1, 1) + r(2, 2);
    if 1.0 + trace > 0.001 {
        // Stable trace formula.
        let s = 0.5 / float::sqrt(1.0 + trace);
        Quaternion::new(
            (r(2, 1) - r(1, 2)) * s,
            (r(0, 2) - r(2, 0)) * s,
            (r(1, 0) - r(0, 1)) * s,
            0.25 / s,
        )
    } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
        // Near-180° rotations make the trace formula cancel; branch on
        // the largest diagonal element instead.
        let s = 2.0 * float::sqrt(1.0 + r(0, 0) - r(1, 1) - r(2, 2));
        Quaternion::new(
            0.25 * s,
            (r(0, 1) + r(1, 0)) / s,
            (r(0, 2) + r(2, 0)) / s,
            (r(2, 1) - r(1, 2)) / s,
        )
    } else if r(1, 1) > r(2, 2) {
        let s = 2.0 * float::sqrt(1.0 + r(1, 1) - r(0, 0) - r(2, 2));
        Quaternion::new(
            (r(0, 1) + r(1, 0)) / s,
            0.25 * s,
            (r(1, 2) + r(2, 1)) / s,
            (r(0, 2) - r(2, 0)) / s,
        )
    } else {
        let s = 2.0 * float::sqrt(1.0 + r(2, 2) - r(0, 0) - r(1, 1));
        Quaternion::new(
            (r(0, 2) + r(2, 0)) / s,
            (r(1, 2) + r(2, 1)) / s,
            0.25 * s,
            (r(1, 0) - r(0, 1)) / s,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::degs;
    use crate::assert_approx_eq;
    use crate::point::pt2;

    fn assert_round_trips(m: &Matrix4) {
        let d = m.decompose().unwrap();
        assert_approx_eq!(
            d.recompose().col_major(),
            m.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn identity_decomposes_to_defaults() {
        let d = Matrix4::identity().decompose().unwrap();
        assert_eq!(d, Decomposed3d::default());
        assert!(d.recompose().is_identity());

        let d = Matrix4::identity().decompose_2d().unwrap();
        assert_eq!(d, Decomposed2d::default());
        assert!(d.recompose().is_identity());
    }

    #[test]
    fn round_trip_translate_rotate_scale() {
        let mut m = Matrix4::identity();
        m.translate3d(10.0, -20.0, 5.0);
        m.rotate_about(1.0, 2.0, 3.0, degs(50.0));
        m.scale3d(2.0, 0.5, 3.0);
        assert_round_trips(&m);
    }

    #[test]
    fn round_trip_skew() {
        let mut m = Matrix4::identity();
        m.skew(degs(20.0), degs(0.0));
        let d = m.decompose().unwrap();
        assert_approx_eq!(d.skew[0], degs(20.0).tan());
        assert_round_trips(&m);

        let mut m = Matrix4::identity();
        m.rotate_about_x(degs(30.0));
        m.skew(degs(10.0), degs(5.0));
        assert_round_trips(&m);
    }

    #[test]
    fn round_trip_perspective() {
        let mut m = Matrix4::identity();
        m.apply_perspective_depth(100.0);
        let d = m.decompose().unwrap();
        assert_approx_eq!(d.perspective, [0.0, 0.0, -0.01, 1.0]);
        assert_round_trips(&m);

        let mut m = Matrix4::identity();
        m.translate3d(3.0, 1.0, -4.0);
        m.apply_perspective_depth(50.0);
        m.rotate_about_y(degs(25.0));
        assert_round_trips(&m);

        // Decomposition normalizes by the homogeneous scale, so a matrix
        // with a non-unit w round-trips to its normalized form.
        let mut m = Matrix4::identity();
        m.apply_perspective_depth(50.0);
        m.translate3d(3.0, 1.0, -4.0);
        let w = m.rc(3, 3);
        assert!(w != 1.0);
        let d = m.decompose().unwrap();
        let normalized =
            Matrix4::from_col_major(m.col_major().map(|v| v / w));
        assert_approx_eq!(
            d.recompose().col_major(),
            normalized.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn round_trip_half_turn() {
        // Exercises the largest-diagonal quaternion branches.
        for axis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            let mut m = Matrix4::identity();
            m.rotate_about(axis[0], axis[1], axis[2], degs(180.0));
            assert_round_trips(&m);
        }
    }

    #[test]
    fn round_trip_reflection() {
        let mut m = Matrix4::identity();
        m.scale3d(-1.0, 1.0, 1.0);
        let d = m.decompose().unwrap();
        // The reflection ends up in the scale, not the rotation.
        assert!(d.scale.iter().product::<f64>() < 0.0);
        assert_round_trips(&m);
    }

    #[test]
    fn degenerate_matrices_fail() {
        let zero = Matrix4::from_col_major([0.0; 16]);
        assert_eq!(zero.decompose(), Err(DecomposeError::DegenerateW));

        let mut flat = Matrix4::identity();
        flat.scale3d(0.0, 1.0, 1.0);
        assert_eq!(flat.decompose(), Err(DecomposeError::DegenerateScale));

        // Rank-deficient without a zero column: the collapse surfaces
        // at the z scale after orthogonalization.
        #[rustfmt::skip]
        let dependent = Matrix4::from_col_major([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            1.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_eq!(
            dependent.decompose(),
            Err(DecomposeError::DegenerateScale)
        );

        // With a perspective row present, singularity surfaces at the
        // perspective solve instead.
        let mut persp_singular = Matrix4::identity();
        persp_singular.scale3d(0.0, 1.0, 1.0);
        persp_singular.set_rc(3, 2, -0.1);
        assert_eq!(
            persp_singular.decompose(),
            Err(DecomposeError::Singular)
        );

        let mut nan = Matrix4::identity();
        nan.set_rc(3, 3, f64::NAN);
        assert_eq!(nan.decompose(), Err(DecomposeError::DegenerateW));
    }

    #[test]
    fn decompose_2d_basic() {
        let mut m = Matrix4::identity();
        m.translate(10.0, 20.0);
        m.rotate_about_z(degs(30.0));
        m.scale(2.0, 3.0);
        let d = m.decompose_2d().unwrap();
        assert_eq!(d.translate, [10.0, 20.0]);
        assert_approx_eq!(d.scale, [2.0, 3.0]);
        assert_approx_eq!(d.angle, degs(30.0));
        assert_approx_eq!(d.recompose().col_major(), m.col_major(), eps = 1e-9);
    }

    #[test]
    fn decompose_2d_reflections() {
        // A pure x flip decomposes without any rotation.
        let flip_x = Matrix4::affine(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let d = flip_x.decompose_2d().unwrap();
        assert_approx_eq!(d.scale, [-1.0, 1.0]);
        assert_approx_eq!(d.angle, Angle::ZERO);
        assert_approx_eq!(
            d.recompose().col_major(),
            flip_x.col_major(),
            eps = 1e-12
        );

        let flip_y = Matrix4::affine(1.0, 0.0, 0.0, -1.0, 0.0, 0.0);
        let d = flip_y.decompose_2d().unwrap();
        assert_approx_eq!(d.scale, [1.0, -1.0]);
        assert_approx_eq!(
            d.recompose().col_major(),
            flip_y.col_major(),
            eps = 1e-12
        );

        // Reflection combined with a skew.
        let mut m = Matrix4::identity();
        m.scale(1.0, -1.0);
        let mut sk = Matrix4::identity();
        sk.set_rc(0, 1, 0.5);
        m.post_concat(&sk);
        assert_approx_eq!(
            m.decompose_2d().unwrap().recompose().col_major(),
            m.col_major(),
            eps = 1e-12
        );
    }

    #[test]
    fn decompose_2d_rejects_3d_and_singular() {
        let mut m = Matrix4::identity();
        m.rotate_about_x(degs(30.0));
        assert_eq!(m.decompose_2d(), Err(DecomposeError::Not2d));

        let singular = Matrix4::affine(1.0, 1.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(singular.decompose_2d(), Err(DecomposeError::Singular));
    }

    #[test]
    fn blend_translations() {
        let from = Matrix4::affine(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let to = Matrix4::affine(1.0, 0.0, 0.0, 1.0, 100.0, 40.0);
        let mid = to.blend(&from, 0.25);
        assert_approx_eq!(mid.map_point(pt2(0.0, 0.0)), pt2(25.0, 10.0));
    }

    #[test]
    fn blend_endpoints() {
        let mut from = Matrix4::identity();
        from.rotate_about_z(degs(10.0));
        from.scale(2.0, 2.0);
        let mut to = Matrix4::identity();
        to.rotate_about_z(degs(80.0));
        to.translate(5.0, 5.0);

        assert_approx_eq!(
            to.blend(&from, 0.0).col_major(),
            from.col_major(),
            eps = 1e-9
        );
        assert_approx_eq!(
            to.blend(&from, 1.0).col_major(),
            to.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn blend_rotation_uses_shorter_arc() {
        let mut from = Matrix4::identity();
        from.rotate_about_z(degs(-170.0));
        let mut to = Matrix4::identity();
        to.rotate_about_z(degs(170.0));
        // The short way from -170° to 170° passes through 180°.
        let mut expected = Matrix4::identity();
        expected.rotate_about_z(degs(180.0));
        assert_approx_eq!(
            to.blend(&from, 0.5).col_major(),
            expected.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn blend_3d_rotations() {
        let mut from = Matrix4::identity();
        from.translate3d(0.0, 0.0, 10.0);
        let mut to = Matrix4::identity();
        to.translate3d(0.0, 0.0, 30.0);
        to.rotate_about_x(degs(90.0));

        let mut expected = Matrix4::identity();
        expected.translate3d(0.0, 0.0, 20.0);
        expected.rotate_about_x(degs(45.0));
        assert_approx_eq!(
            to.blend(&from, 0.5).col_major(),
            expected.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn blend_of_equal_matrices() {
        let mut m = Matrix4::identity();
        m.rotate_about_z(degs(33.0));
        m.translate(4.0, -7.0);
        assert_approx_eq!(
            m.blend(&m, 0.3).col_major(),
            m.col_major(),
            eps = 1e-9
        );
    }

    #[test]
    fn blend_falls_back_to_discrete_jump() {
        let singular = Matrix4::affine(0.0, 0.0, 0.0, 0.0, 1.0, 2.0);
        let mut other = Matrix4::identity();
        other.rotate_about_z(degs(45.0));

        // Bit for bit, no arithmetic applied.
        assert_eq!(other.blend(&singular, 0.25), singular);
        assert_eq!(other.blend(&singular, 0.5), other);
        assert_eq!(other.blend(&singular, 0.75), other);

        // A non-finite 3D matrix takes the same path. NaN never compares
        // equal, so check the verbatim copy by bit pattern.
        let mut nan = Matrix4::identity();
        nan.set_rc(2, 2, f64::NAN);
        let bits = |m: &Matrix4| m.col_major().map(f64::to_bits);
        assert_eq!(bits(&other.blend(&nan, 0.1)), bits(&nan));
        assert_eq!(other.blend(&nan, 0.9), other);
    }

    #[test]
    fn lerp_skips_equal_components() {
        let a = Decomposed3d {
            translate: [0.1, 0.2, 0.3],
            ..Decomposed3d::default()
        };
        let b = Decomposed3d {
            translate: [0.1, 0.2, 0.9],
            ..Decomposed3d::default()
        };
        let l = a.lerp(&b, 0.3);
        // Equal components pass through untouched by the arithmetic.
        assert_eq!(l.translate[0], 0.1);
        assert_eq!(l.translate[1], 0.2);
        assert_eq!(l.scale, [1.0; 3]);
        assert_approx_eq!(l.translate[2], 0.3 + 0.6 * 0.3);
    }
}
