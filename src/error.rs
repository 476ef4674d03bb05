//! Decomposition failure conditions.

use thiserror::Error;

/// The reason a matrix could not be decomposed.
///
/// These are expected outcomes for singular or degenerate inputs rather
/// than bugs; [`Matrix4::blend`][crate::Matrix4::blend] treats any of them
/// as the signal to fall back to a discrete jump.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecomposeError {
    /// The homogeneous scale `w` is zero, subnormal, or non-finite, so
    /// the matrix cannot be normalized.
    #[error("homogeneous scale is degenerate")]
    DegenerateW,

    /// The matrix is singular after normalization; the perspective
    /// component cannot be solved for.
    #[error("matrix is singular")]
    Singular,

    /// A basis column has zero, subnormal, or non-finite length, so the
    /// rotation cannot be separated from the scale.
    #[error("scale factor is degenerate")]
    DegenerateScale,

    /// A 2D decomposition was requested for a matrix that is not a flat,
    /// perspective-free 2D transform.
    #[error("matrix is not a 2D transform")]
    Not2d,
}
