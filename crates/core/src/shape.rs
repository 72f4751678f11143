//! Value types shared by every engine operation: [`Point`] and [`ShapeParams`].

use crate::error::{require_positive, EngineError};
use serde::{Deserialize, Serialize};

/// Default semi-axis length along x.
pub const DEFAULT_A: f64 = 100.0;
/// Default semi-axis length along y.
pub const DEFAULT_B: f64 = 100.0;
/// Default shape exponent (a squircle).
pub const DEFAULT_N: f64 = 4.0;
/// Default sample count for rendered documents.
pub const DEFAULT_SEGMENTS: usize = 512;
/// Smallest sample count the sampler will use.
pub const MIN_SEGMENTS: usize = 4;

/// A point on the sampled boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Parameters of a superellipse `|x/a|^n + |y/b|^n = 1` and its sample density.
///
/// Missing fields deserialize to the defaults, so a preset can override
/// only what it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Semi-axis along x. Must be > 0.
    pub a: f64,
    /// Semi-axis along y. Must be > 0.
    pub b: f64,
    /// Shape exponent. Must be > 0.
    pub n: f64,
    /// Number of boundary samples; clamped to [`MIN_SEGMENTS`] when sampling.
    pub segments: usize,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            n: DEFAULT_N,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ShapeParams {
    /// Creates parameters with the default sample count.
    pub fn new(a: f64, b: f64, n: f64) -> Self {
        Self {
            a,
            b,
            n,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Returns a copy with a different sample count.
    pub fn with_segments(self, segments: usize) -> Self {
        Self { segments, ..self }
    }

    /// Checks `a > 0`, `b > 0`, `n > 0` in that order.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_shape(self.a, self.b, self.n)
    }

    /// Sample count after clamping.
    pub fn effective_segments(&self) -> usize {
        clamp_segments(self.segments)
    }
}

pub(crate) fn validate_shape(a: f64, b: f64, n: f64) -> Result<(), EngineError> {
    require_positive("a", a)?;
    require_positive("b", b)?;
    require_positive("n", n)?;
    Ok(())
}

pub(crate) fn clamp_segments(segments: usize) -> usize {
    segments.max(MIN_SEGMENTS)
}
