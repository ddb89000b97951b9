//! Piecewise-Linear Curves
//!
//! Gains and actuator limits are tabulated against vehicle speed as
//! breakpoint/value pairs and read back with linear interpolation.

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};

/// Breakpoint table with clamped linear interpolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct Curve {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

/// Unchecked wire form, validated through [`Curve::new`]
#[derive(Deserialize)]
struct RawCurve {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawCurve> for Curve {
    type Error = ProfileError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        Curve::new(raw.breakpoints, raw.values)
    }
}

impl Curve {
    /// Create a curve, checking that breakpoints are strictly increasing
    pub fn new(breakpoints: Vec<f64>, values: Vec<f64>) -> Result<Self, ProfileError> {
        if breakpoints.is_empty() {
            return Err(ProfileError::EmptyCurve);
        }
        if breakpoints.len() != values.len() {
            return Err(ProfileError::CurveLengthMismatch {
                breakpoints: breakpoints.len(),
                values: values.len(),
            });
        }
        if let Some(idx) = breakpoints.iter().position(|bp| !bp.is_finite()) {
            return Err(ProfileError::CurveNotFinite(idx));
        }
        if let Some(idx) = breakpoints.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ProfileError::CurveNotIncreasing(idx + 1));
        }
        Ok(Self { breakpoints, values })
    }

    /// Single-point curve that returns `value` everywhere
    pub fn constant(value: f64) -> Self {
        Self {
            breakpoints: vec![0.0],
            values: vec![value],
        }
    }

    /// Breakpoints (x axis)
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Values (y axis)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Interpolate at `x`, holding the end values outside the table.
    /// A NaN `x` reads the first value.
    pub fn interp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.values[0];
        }
        let last = self.breakpoints.len() - 1;
        if x <= self.breakpoints[0] {
            return self.values[0];
        }
        if x >= self.breakpoints[last] {
            return self.values[last];
        }

        // x lies strictly inside the table, so a bracketing pair exists
        let hi = self.breakpoints.partition_point(|&bp| bp <= x);
        let lo = hi - 1;
        let (x0, x1) = (self.breakpoints[lo], self.breakpoints[hi]);
        let (y0, y1) = (self.values[lo], self.values[hi]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
