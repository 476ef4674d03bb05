//! Axis-aligned rectangles and free quadrilaterals.

use crate::approx::ApproxEq;
use crate::float::clamp_f32;
use crate::point::{Point2, pt2};

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A quadrilateral given by its four corners.
///
/// The corners are stored in the order top-left, top-right, bottom-right,
/// bottom-left when converted from a [`Rect`]; mapping preserves whatever
/// order the input had.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad(pub [Point2; 4]);

impl Rect {
    /// Returns a rectangle with the given origin and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
    /// Returns the y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the four corners of `self`, clockwise from top-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            pt2(self.x, self.y),
            pt2(self.right(), self.y),
            pt2(self.right(), self.bottom()),
            pt2(self.x, self.bottom()),
        ]
    }

    /// Returns the smallest rectangle containing all of `points`.
    ///
    /// Returns the default (zero) rectangle if `points` is empty. The
    /// extent of finite corners can still overflow `f32`; the width and
    /// height saturate to the finite range instead.
    pub fn bounding(points: &[Point2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };
        let (mut min, mut max) = (*first, *first);
        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self::new(
            min.x,
            min.y,
            clamp_f32(max.x as f64 - min.x as f64),
            clamp_f32(max.y as f64 - min.y as f64),
        )
    }

    /// Returns whether `self` has zero area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Quad {
    /// The all-zero quad, used as the result of a projection whose every
    /// corner lies behind the eye.
    pub const ZERO: Self = Self([Point2::ORIGIN; 4]);

    /// Returns the corners of `self`.
    pub const fn corners(&self) -> [Point2; 4] {
        self.0
    }

    /// Returns the axis-aligned bounding rectangle of `self`.
    pub fn bounding_rect(&self) -> Rect {
        Rect::bounding(&self.0)
    }

    /// Returns whether all four corners coincide at the origin.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<Rect> for Quad {
    fn from(r: Rect) -> Self {
        Self(r.corners())
    }
}

impl ApproxEq<Self, f32> for Rect {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        [self.x, self.y, self.width, self.height]
            .approx_eq_eps(&[other.x, other.y, other.width, other.height], eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl ApproxEq<Self, f32> for Quad {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
