//! Profile Error Types

use thiserror::Error;

/// Errors while resolving a vehicle profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Model identifier does not match any known fingerprint
    #[error("Unknown vehicle model: {0}")]
    UnknownModel(String),

    /// Curve has no points
    #[error("Curve must have at least one point")]
    EmptyCurve,

    /// Breakpoints and values differ in length
    #[error("Curve length mismatch: {breakpoints} breakpoints, {values} values")]
    CurveLengthMismatch { breakpoints: usize, values: usize },

    /// Breakpoint is NaN or infinite
    #[error("Curve breakpoint at index {0} is not finite")]
    CurveNotFinite(usize),

    /// Breakpoints are not strictly increasing
    #[error("Curve breakpoints must be strictly increasing (index {0})")]
    CurveNotIncreasing(usize),
}
