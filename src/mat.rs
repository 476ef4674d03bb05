//! 4x4 homogeneous transform matrices.
//!
//! [`Matrix4`] is a plain value type: sixteen `f64` entries stored as four
//! columns of four rows, copied freely, with no heap data. Composition
//! follows the column-vector convention, `result = M · [x, y, z, 1]ᵀ`:
//! "pre" operations append a transform applied *first* in the pipeline,
//! "post" operations prepend one applied last.
//!
//! Mapping APIs take and return `f32` points and clamp their results to
//! the finite `f32` range; raw storage import/export does not clamp.

use core::fmt::{self, Debug, Formatter};

use crate::angle::Angle;
use crate::approx::ApproxEq;
use crate::float::{self, clamp_f32};
use crate::point::{Point2, Point3, pt2, pt3};
use crate::rect::{Quad, Rect};

/// A 4x4 homogeneous transform matrix.
///
/// Stored column-major: the inner arrays are columns. Use [`rc`][Self::rc]
/// and [`set_rc`][Self::set_rc] for row/column element access; the storage
/// order is not part of the public contract except through the explicit
/// [`col_major`][Self::col_major] import/export functions.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4(pub(crate) [[f64; 4]; 4]);

/// The result of [`Matrix4::project_point`].
///
/// `clamped` is set when the projected point lay behind the eye
/// (homogeneous w ≤ 0) and its coordinates were clamped to a large finite
/// sentinel instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub point: Point2,
    pub clamped: bool,
}

/// Sentinel magnitude for behind-the-eye projections. Large, but far from
/// f32 overflow when downstream code does arithmetic on the result.
const CLAMP_SENTINEL: f64 = 1.0e8;

//
// Construction and raw conversions
//

impl Matrix4 {
    /// The identity matrix.
    pub const IDENTITY: Self = {
        let mut m = [[0.0; 4]; 4];
        m[0][0] = 1.0;
        m[1][1] = 1.0;
        m[2][2] = 1.0;
        m[3][3] = 1.0;
        Self(m)
    };

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns a matrix from 16 values in column-major order.
    pub const fn from_col_major(v: [f64; 16]) -> Self {
        let mut m = [[0.0; 4]; 4];
        let mut c = 0;
        while c < 4 {
            let mut r = 0;
            while r < 4 {
                m[c][r] = v[4 * c + r];
                r += 1;
            }
            c += 1;
        }
        Self(m)
    }

    /// Returns a matrix from 16 values in row-major order.
    ///
    /// Both orderings yield identical internal storage for matching input:
    /// ```
    /// # use unmatrix::Matrix4;
    /// let a = Matrix4::from_row_major([
    ///     1.0, 2.0, 3.0, 4.0,
    ///     5.0, 6.0, 7.0, 8.0,
    ///     9.0, 10.0, 11.0, 12.0,
    ///     13.0, 14.0, 15.0, 16.0,
    /// ]);
    /// let b = Matrix4::from_col_major([
    ///     1.0, 5.0, 9.0, 13.0,
    ///     2.0, 6.0, 10.0, 14.0,
    ///     3.0, 7.0, 11.0, 15.0,
    ///     4.0, 8.0, 12.0, 16.0,
    /// ]);
    /// assert_eq!(a, b);
    /// ```
    pub const fn from_row_major(v: [f64; 16]) -> Self {
        let mut m = [[0.0; 4]; 4];
        let mut r = 0;
        while r < 4 {
            let mut c = 0;
            while c < 4 {
                m[c][r] = v[4 * r + c];
                c += 1;
            }
            r += 1;
        }
        Self(m)
    }

    /// Returns a 2D affine matrix with basis columns (a, b) and (c, d)
    /// and translation (e, f), CSS `matrix(a, b, c, d, e, f)` style.
    pub const fn affine(
        a: f64, b: f64, c: f64, d: f64, e: f64, f: f64,
    ) -> Self {
        let mut m = Self::IDENTITY.0;
        m[0][0] = a;
        m[0][1] = b;
        m[1][0] = c;
        m[1][1] = d;
        m[3][0] = e;
        m[3][1] = f;
        Self(m)
    }

    /// Returns a matrix from 16 single-precision values in column-major
    /// order, for interchange with GPU-style buffers.
    pub fn from_col_major_f32(v: &[f32; 16]) -> Self {
        let mut d = [0.0; 16];
        let mut i = 0;
        while i < 16 {
            d[i] = v[i] as f64;
            i += 1;
        }
        Self::from_col_major(d)
    }

    /// Returns the entries of `self` in column-major order.
    pub fn col_major(&self) -> [f64; 16] {
        let mut v = [0.0; 16];
        for c in 0..4 {
            for r in 0..4 {
                v[4 * c + r] = self.0[c][r];
            }
        }
        v
    }

    /// Returns the entries of `self` in column-major order, narrowed to
    /// single precision.
    ///
    /// This is a raw storage export: non-finite entries pass through
    /// unclamped, unlike the point/rect mapping APIs.
    pub fn col_major_f32(&self) -> [f32; 16] {
        self.col_major().map(|v| v as f32)
    }

    /// Returns the element at `row`, `col`.
    #[inline]
    pub const fn rc(&self, row: usize, col: usize) -> f64 {
        self.0[col][row]
    }

    /// Sets the element at `row`, `col` to `v`.
    #[inline]
    pub const fn set_rc(&mut self, row: usize, col: usize, v: f64) {
        self.0[col][row] = v;
    }
}

//
// Queries
//

impl Matrix4 {
    /// Returns whether `self` is exactly the identity matrix.
    ///
    /// Exact equality, not tolerance-based.
    pub fn is_identity(&self) -> bool {
        self.0 == Self::IDENTITY.0
    }

    /// Returns whether `self` is the identity or a pure translation.
    ///
    /// True iff columns 0–2 exactly equal the identity's and the
    /// homogeneous scale is 1; the translation column is free. Used as a
    /// fast-path gate by the mapping and inversion routines.
    pub fn is_identity_or_translation(&self) -> bool {
        let id = &Self::IDENTITY.0;
        self.0[0] == id[0]
            && self.0[1] == id[1]
            && self.0[2] == id[2]
            && self.0[3][3] == 1.0
    }

    /// Returns whether `self` is a flat, perspective-free 2D transform:
    /// no coupling in or out of z, and a bottom row of exactly (0,0,0,1).
    pub fn is_2d(&self) -> bool {
        self.rc(3, 0) == 0.0
            && self.rc(3, 1) == 0.0
            && self.rc(3, 2) == 0.0
            && self.rc(3, 3) == 1.0
            && self.rc(0, 2) == 0.0
            && self.rc(1, 2) == 0.0
            && self.rc(2, 0) == 0.0
            && self.rc(2, 1) == 0.0
            && self.rc(2, 2) == 1.0
            && self.rc(2, 3) == 0.0
    }

    /// Returns whether `self` maps axis-aligned rectangles to axis-aligned
    /// rectangles, ignoring translation and any resulting z.
    ///
    /// Pure scales, axis swaps, and rotations by multiples of 90° preserve
    /// alignment; general rotations and skews do not. Entries at most
    /// `f32::EPSILON` in magnitude count as zero, so a 90° rotation built
    /// from `sin`/`cos` still qualifies.
    pub fn preserves_2d_axis_alignment(&self) -> bool {
        // Perspective coupling of x/y into w breaks alignment regardless
        // of the linear part.
        if self.rc(3, 0) != 0.0 || self.rc(3, 1) != 0.0 {
            return false;
        }
        const EPS: f64 = f32::EPSILON as f64;
        let big = |r, c| self.rc(r, c).abs() > EPS;
        let (m00, m01) = (big(0, 0), big(0, 1));
        let (m10, m11) = (big(1, 0), big(1, 1));
        // At most one significant entry per row and per column of the
        // upper-left 2x2.
        !(m00 && m01) && !(m10 && m11) && !(m00 && m10) && !(m01 && m11)
    }
}

//
// Composition
//

impl Matrix4 {
    /// Sets `self = self * other`: `other` is applied first when mapping.
    pub fn pre_concat(&mut self, other: &Self) {
        *self = self.concat(other);
    }

    /// Sets `self = other * self`: `other` is applied last when mapping.
    pub fn post_concat(&mut self, other: &Self) {
        *self = other.concat(self);
    }

    /// Returns `self * other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for c in 0..4 {
            for r in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.0[k][r] * other.0[c][k];
                }
                out[c][r] = sum;
            }
        }
        Self(out)
    }

    /// Applies a 2D translation before `self`.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.translate3d(tx, ty, 0.0);
    }

    /// Applies a 3D translation before `self`.
    ///
    /// Equivalent to `pre_concat` with a translation matrix, computed
    /// directly on the translation column.
    pub fn translate3d(&mut self, tx: f64, ty: f64, tz: f64) {
        for r in 0..4 {
            self.0[3][r] +=
                self.0[0][r] * tx + self.0[1][r] * ty + self.0[2][r] * tz;
        }
    }

    /// Applies a 2D scale before `self`.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.scale3d(sx, sy, 1.0);
    }

    /// Applies a 3D scale before `self`.
    pub fn scale3d(&mut self, sx: f64, sy: f64, sz: f64) {
        for r in 0..4 {
            self.0[0][r] *= sx;
            self.0[1][r] *= sy;
            self.0[2][r] *= sz;
        }
    }

    /// Applies a rotation about the x axis before `self`.
    ///
    /// Rotations follow the right-handed convention: positive angles turn
    /// counter-clockwise as seen from the positive end of the axis.
    pub fn rotate_about_x(&mut self, angle: Angle) {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.set_rc(1, 1, c);
        rot.set_rc(2, 1, s);
        rot.set_rc(1, 2, -s);
        rot.set_rc(2, 2, c);
        self.pre_concat(&rot);
    }

    /// Applies a rotation about the y axis before `self`.
    pub fn rotate_about_y(&mut self, angle: Angle) {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.set_rc(0, 0, c);
        rot.set_rc(2, 0, -s);
        rot.set_rc(0, 2, s);
        rot.set_rc(2, 2, c);
        self.pre_concat(&rot);
    }

    /// Applies a rotation about the z axis before `self`.
    ///
    /// # Examples
    /// A 90° rotation takes the x axis to the y axis:
    /// ```
    /// # use unmatrix::{assert_approx_eq, Matrix4, angle::degs, point::pt3};
    /// let mut m = Matrix4::identity();
    /// m.rotate_about_z(degs(90.0));
    /// assert_approx_eq!(m.map_point3(pt3(1.0, 0.0, 0.0)), pt3(0.0, 1.0, 0.0));
    /// ```
    pub fn rotate_about_z(&mut self, angle: Angle) {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.set_rc(0, 0, c);
        rot.set_rc(1, 0, s);
        rot.set_rc(0, 1, -s);
        rot.set_rc(1, 1, c);
        self.pre_concat(&rot);
    }

    /// Applies a rotation of `angle` about the axis `(x, y, z)` before
    /// `self`. A zero-length axis is a no-op, not an error.
    pub fn rotate_about(&mut self, x: f64, y: f64, z: f64, angle: Angle) {
        let len = float::sqrt(x * x + y * y + z * z);
        if !len.is_normal() {
            return;
        }
        let q = crate::quat::Quaternion::from_axis_angle(
            [x / len, y / len, z / len],
            angle,
        );
        self.pre_concat(&Self::from(q));
    }

    /// Applies a 2D skew before `self`.
    pub fn skew(&mut self, x: Angle, y: Angle) {
        let mut sk = Self::IDENTITY;
        sk.set_rc(0, 1, x.tan());
        sk.set_rc(1, 0, y.tan());
        self.pre_concat(&sk);
    }

    /// Applies a perspective projection with the given focal depth before
    /// `self`, as CSS `perspective(depth)`.
    ///
    /// A depth of zero would put infinity in the matrix and is a no-op.
    pub fn apply_perspective_depth(&mut self, depth: f64) {
        if depth == 0.0 {
            return;
        }
        let mut p = Self::IDENTITY;
        p.set_rc(3, 2, -1.0 / depth);
        self.pre_concat(&p);
    }

    /// Applies a 2D translation after `self`.
    pub fn post_translate(&mut self, tx: f64, ty: f64) {
        self.post_translate3d(tx, ty, 0.0);
    }

    /// Applies a 3D translation after `self`.
    ///
    /// Cheaper than `post_concat` with a translation matrix: only the top
    /// three rows change, by the translation times the bottom row.
    pub fn post_translate3d(&mut self, tx: f64, ty: f64, tz: f64) {
        for c in 0..4 {
            let w = self.0[c][3];
            self.0[c][0] += tx * w;
            self.0[c][1] += ty * w;
            self.0[c][2] += tz * w;
        }
    }

    /// Re-anchors `self` so that `(x, y, z)` is a fixed point of the
    /// transform: translate to the origin, transform, translate back.
    pub fn apply_transform_origin(&mut self, x: f64, y: f64, z: f64) {
        self.post_translate3d(x, y, z);
        self.translate3d(-x, -y, -z);
    }

    /// Retargets `self` from one device scale to another, so that
    /// `zoomed.map(factor · p) == factor · self.map(p)`.
    ///
    /// Scales the translation column up and the perspective row down;
    /// the linear part is unchanged.
    pub fn zoom(&mut self, factor: f64) {
        debug_assert!(factor != 0.0);
        for r in 0..3 {
            self.0[3][r] *= factor;
        }
        for c in 0..3 {
            self.0[c][3] /= factor;
        }
    }
}

//
// Mapping
//

impl Matrix4 {
    /// Maps a 2D point (z = 0) through `self`, with perspective divide.
    ///
    /// The divide is skipped when the homogeneous `w` is zero, subnormal,
    /// or non-finite. The result is clamped to the finite `f32` range.
    ///
    /// # Examples
    /// The translation fast path is exact:
    /// ```
    /// # use unmatrix::{Matrix4, point::pt2};
    /// let m = Matrix4::affine(1.0, 0.0, 0.0, 1.0, 10.0, 20.0);
    /// assert_eq!(m.map_point(pt2(5.0, 5.0)), pt2(15.0, 25.0));
    /// ```
    pub fn map_point(&self, p: Point2) -> Point2 {
        if self.is_identity_or_translation() {
            return pt2(
                clamp_f32(p.x as f64 + self.0[3][0]),
                clamp_f32(p.y as f64 + self.0[3][1]),
            );
        }
        let [x, y, _, w] = self.apply(p.x as f64, p.y as f64, 0.0);
        if w.is_normal() {
            pt2(clamp_f32(x / w), clamp_f32(y / w))
        } else {
            pt2(clamp_f32(x), clamp_f32(y))
        }
    }

    /// Maps a 3D point through `self`, with perspective divide.
    ///
    /// Same divide and clamping rules as [`map_point`][Self::map_point].
    pub fn map_point3(&self, p: Point3) -> Point3 {
        if self.is_identity_or_translation() {
            return pt3(
                clamp_f32(p.x as f64 + self.0[3][0]),
                clamp_f32(p.y as f64 + self.0[3][1]),
                clamp_f32(p.z as f64 + self.0[3][2]),
            );
        }
        let [x, y, z, w] = self.apply(p.x as f64, p.y as f64, p.z as f64);
        if w.is_normal() {
            pt3(clamp_f32(x / w), clamp_f32(y / w), clamp_f32(z / w))
        } else {
            pt3(clamp_f32(x), clamp_f32(y), clamp_f32(z))
        }
    }

    /// Full homogeneous transform of `(x, y, z, 1)`.
    fn apply(&self, x: f64, y: f64, z: f64) -> [f64; 4] {
        let mut out = [0.0; 4];
        for r in 0..4 {
            out[r] = self.0[0][r] * x
                + self.0[1][r] * y
                + self.0[2][r] * z
                + self.0[3][r];
        }
        out
    }

    /// Casts a ray along z through `p`, lifts `p` onto the plane that
    /// `self` carries to z = 0, and returns the transformed intersection
    /// point. Hit-testing maps a screen point back onto an element's
    /// plane by calling this on the inverse matrix.
    ///
    /// If the plane is parallel to the casting ray (`rc(2, 2) == 0`) the
    /// problem is degenerate and the origin is returned. If the
    /// intersection lies behind the eye (homogeneous w ≤ 0) the
    /// coordinates are clamped to a large finite sentinel and `clamped`
    /// is set.
    pub fn project_point(&self, p: Point2) -> ProjectedPoint {
        if self.rc(2, 2) == 0.0 {
            return ProjectedPoint { point: Point2::ORIGIN, clamped: false };
        }
        let (x, y) = (p.x as f64, p.y as f64);
        let z = -(self.rc(2, 0) * x + self.rc(2, 1) * y + self.rc(2, 3))
            / self.rc(2, 2);

        let mut out_x =
            self.rc(0, 0) * x + self.rc(0, 1) * y + self.rc(0, 2) * z
                + self.rc(0, 3);
        let mut out_y =
            self.rc(1, 0) * x + self.rc(1, 1) * y + self.rc(1, 2) * z
                + self.rc(1, 3);
        let w = self.rc(3, 0) * x + self.rc(3, 1) * y + self.rc(3, 2) * z
            + self.rc(3, 3);

        let mut clamped = false;
        if w <= 0.0 {
            out_x = CLAMP_SENTINEL.copysign(out_x);
            out_y = CLAMP_SENTINEL.copysign(out_y);
            clamped = true;
        } else if w != 1.0 {
            out_x /= w;
            out_y /= w;
        }
        ProjectedPoint {
            point: pt2(clamp_f32(out_x), clamp_f32(out_y)),
            clamped,
        }
    }

    /// Maps a rectangle and returns the axis-aligned bounding box of the
    /// result. Identity-or-translation matrices take a pure offset path.
    pub fn map_rect(&self, r: Rect) -> Rect {
        if self.is_identity_or_translation() {
            return Rect::new(
                clamp_f32(r.x as f64 + self.0[3][0]),
                clamp_f32(r.y as f64 + self.0[3][1]),
                r.width,
                r.height,
            );
        }
        Rect::bounding(&r.corners().map(|p| self.map_point(p)))
    }

    /// Maps each corner of a quadrilateral.
    pub fn map_quad(&self, q: Quad) -> Quad {
        Quad(q.0.map(|p| self.map_point(p)))
    }

    /// Projects each corner of a quadrilateral through `self`, as
    /// [`project_point`][Self::project_point].
    ///
    /// If every corner clamps, meaning the entire quad lies behind the
    /// eye, the result is [`Quad::ZERO`] rather than a bogus
    /// quadrilateral.
    pub fn project_quad(&self, q: Quad) -> Quad {
        let mut out = [Point2::ORIGIN; 4];
        let mut all_clamped = true;
        for (corner, p) in out.iter_mut().zip(q.0) {
            let proj = self.project_point(p);
            *corner = proj.point;
            all_clamped &= proj.clamped;
        }
        if all_clamped { Quad::ZERO } else { Quad(out) }
    }
}

//
// Inversion
//

impl Matrix4 {
    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> f64 {
        let mut det = 0.0;
        let mut sign = 1.0;
        for r in 0..4 {
            det += sign * self.rc(r, 0) * self.minor(r, 0);
            sign = -sign;
        }
        det
    }

    /// Returns whether `self` has a well-defined inverse.
    ///
    /// False when the determinant is zero, subnormal, NaN, or infinite;
    /// a plain zero test would admit subnormal-induced instability.
    pub fn is_invertible(&self) -> bool {
        self.is_identity_or_translation() || self.determinant().is_normal()
    }

    /// Returns the inverse of `self`, or `None` if `self` is not
    /// invertible.
    ///
    /// Identity-or-translation matrices skip the general adjugate solve:
    /// their inverse is the identity with the translation negated.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_identity_or_translation() {
            let mut inv = Self::IDENTITY;
            for r in 0..3 {
                inv.0[3][r] = -self.0[3][r];
            }
            return Some(inv);
        }
        let det = self.determinant();
        if !det.is_normal() {
            return None;
        }
        let mut inv = Self::IDENTITY;
        for r in 0..4 {
            for c in 0..4 {
                let sign = if (r + c) % 2 == 0 { 1.0 } else { -1.0 };
                // Adjugate: cofactors transposed.
                inv.set_rc(r, c, sign * self.minor(c, r) / det);
            }
        }
        Some(inv)
    }

    /// Maps `p` through the inverse of `self`, or returns `None` if
    /// `self` is not invertible.
    pub fn inverse_map_point(&self, p: Point2) -> Option<Point2> {
        Some(self.inverse()?.map_point(p))
    }

    /// Returns the inverse of `self`, or the identity if `self` is not
    /// invertible.
    ///
    /// The identity fallback is a safe default for rendering paths; call
    /// [`inverse`][Self::inverse] to distinguish it from a real inverse.
    pub fn inverse_or_identity(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }

    /// Determinant of the 3x3 submatrix left by removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> f64 {
        let pick = |skip| {
            let mut out = [0usize; 3];
            let mut k = 0;
            for i in 0..4 {
                if i != skip {
                    out[k] = i;
                    k += 1;
                }
            }
            out
        };
        let rs = pick(row);
        let cs = pick(col);
        let m = |i: usize, j: usize| self.rc(rs[i], cs[j]);
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }
}

//
// Foreign trait impls
//

impl Default for Matrix4 {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Matrix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix4[")?;
        for r in 0..4 {
            let row =
                [self.0[0][r], self.0[1][r], self.0[2][r], self.0[3][r]];
            writeln!(f, "    {row:8.4?}")?;
        }
        write!(f, "]")
    }
}

impl ApproxEq<Self, f64> for Matrix4 {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.col_major().approx_eq_eps(&other.col_major(), eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}
