//! Parametric sampling of the superellipse boundary.
//!
//! The curve `|x/a|^n + |y/b|^n = 1` is traced with
//! `x = sign(cos t) |cos t|^(2/n) a`, `y = sign(sin t) |sin t|^(2/n) b`.
//! Raising the absolute value and restoring the sign keeps the power real
//! for every exponent; `cos(t).powf(2.0 / n)` would be NaN in three of the
//! four quadrants for non-even `n`.

use crate::error::EngineError;
use crate::shape::{clamp_segments, validate_shape, Point, ShapeParams};
use std::f64::consts::PI;

/// Samples `segments` boundary points at equally spaced `t` in `[0, 2π)`.
///
/// `segments` is clamped to at least 4. The point at `t = 2π` is not
/// repeated; closing the outline is left to the consumer. Points come out
/// in increasing-`t` order (counter-clockwise with y pointing up).
///
/// Returns `EngineError::InvalidParameter` if `a`, `b`, or `n` is not > 0.
pub fn sample(a: f64, b: f64, n: f64, segments: usize) -> Result<Vec<Point>, EngineError> {
    validate_shape(a, b, n)?;
    let segments = clamp_segments(segments);
    let exponent = 2.0 / n;

    log::trace!("sampling superellipse a={a} b={b} n={n} segments={segments}");

    let points = (0..segments)
        .map(|i| {
            let t = (i as f64 / segments as f64) * PI * 2.0;
            let (s, c) = t.sin_cos();
            Point::new(signed_pow(c, exponent) * a, signed_pow(s, exponent) * b)
        })
        .collect();
    Ok(points)
}

/// Samples the curve described by `params` at its own density.
pub fn sample_params(params: &ShapeParams) -> Result<Vec<Point>, EngineError> {
    sample(params.a, params.b, params.n, params.segments)
}

/// `sign(v) * |v|^exponent`, with `sign(0) = 0`.
///
/// `f64::signum` maps ±0 to ±1, which would turn `0^0` into a spurious ±1
/// when the exponent underflows to zero.
fn signed_pow(v: f64, exponent: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v.signum() * v.abs().powf(exponent)
    }
}
