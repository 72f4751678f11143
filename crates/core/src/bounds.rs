//! Axis-aligned bounding boxes of sampled outlines.

use crate::error::EngineError;
use crate::sampler::sample;
use crate::shape::Point;
use serde::{Deserialize, Serialize};

/// Sample count used by [`compute_bounds`], independent of render density.
pub const BOUNDS_SEGMENTS: usize = 256;

/// An axis-aligned box `[min_x, max_x] × [min_y, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// The nominal box of a superellipse with semi-axes `a` and `b`.
    pub fn symmetric(a: f64, b: f64) -> Self {
        Self {
            min_x: -a,
            max_x: a,
            min_y: -b,
            max_y: b,
        }
    }

    /// Tight box around `points`, or `None` if `points` is empty or any
    /// bound comes out non-finite.
    pub fn try_from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let init = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        let bb = points.iter().fold(init, |acc, p| Self {
            min_x: acc.min_x.min(p.x),
            max_x: acc.max_x.max(p.x),
            min_y: acc.min_y.min(p.y),
            max_y: acc.max_y.max(p.y),
        });
        bb.is_finite().then_some(bb)
    }

    /// Tight box around `points`, substituting `fallback` when the points
    /// give no usable box.
    pub fn from_points(points: &[Point], fallback: BoundingBox) -> Self {
        Self::try_from_points(points).unwrap_or_else(|| {
            log::debug!(
                "bounds of {} points unusable, falling back to {fallback:?}",
                points.len()
            );
            fallback
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if all four bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
    }

    /// True if `p` lies inside or on the box edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Grows the box by `margin` on every side.
    pub fn inflate(self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }
}

/// Bounding box of the superellipse, resampled at [`BOUNDS_SEGMENTS`].
///
/// Falls back to `{-a, a, -b, b}` instead of returning non-finite bounds.
pub fn compute_bounds(a: f64, b: f64, n: f64) -> Result<BoundingBox, EngineError> {
    compute_bounds_with(a, b, n, BOUNDS_SEGMENTS)
}

/// Like [`compute_bounds`] at an explicit sample count.
pub fn compute_bounds_with(
    a: f64,
    b: f64,
    n: f64,
    segments: usize,
) -> Result<BoundingBox, EngineError> {
    let points = sample(a, b, n, segments)?;
    Ok(BoundingBox::from_points(&points, BoundingBox::symmetric(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ellipse_bounds_match_semi_axes() {
        let bb = compute_bounds(30.0, 12.0, 2.0).unwrap();
        assert!((bb.min_x + 30.0).abs() < EPS);
        assert!((bb.max_x - 30.0).abs() < EPS);
        assert!((bb.min_y + 12.0).abs() < EPS);
        assert!((bb.max_y - 12.0).abs() < EPS);
    }

    #[test]
    fn bounds_are_ordered() {
        let bb = compute_bounds(5.0, 8.0, 0.7).unwrap();
        assert!(bb.min_x <= bb.max_x);
        assert!(bb.min_y <= bb.max_y);
    }

    #[test]
    fn empty_points_use_fallback() {
        let fallback = BoundingBox::symmetric(3.0, 4.0);
        assert_eq!(BoundingBox::from_points(&[], fallback), fallback);
        assert!(BoundingBox::try_from_points(&[]).is_none());
    }

    #[test]
    fn non_finite_points_use_fallback() {
        let pts = [Point::new(1.0, 1.0), Point::new(f64::INFINITY, 0.0)];
        let fallback = BoundingBox::symmetric(2.0, 2.0);
        assert_eq!(BoundingBox::from_points(&pts, fallback), fallback);
    }

    #[test]
    fn infinite_semi_axis_falls_back_to_nominal_box() {
        let bb = compute_bounds(f64::INFINITY, 1.0, 2.0).unwrap();
        assert_eq!(bb, BoundingBox::symmetric(f64::INFINITY, 1.0));
    }

    #[test]
    fn invalid_parameters_propagate() {
        assert!(matches!(
            compute_bounds(-1.0, 1.0, 2.0),
            Err(EngineError::InvalidParameter { name: "a", .. })
        ));
    }

    #[test]
    fn inflate_grows_every_side() {
        let bb = BoundingBox::symmetric(10.0, 5.0).inflate(1.5);
        assert_eq!(bb.min_x, -11.5);
        assert_eq!(bb.max_x, 11.5);
        assert_eq!(bb.min_y, -6.5);
        assert_eq!(bb.max_y, 6.5);
        assert_eq!(bb.width(), 23.0);
        assert_eq!(bb.height(), 13.0);
    }

    #[test]
    fn contains_includes_edges() {
        let bb = BoundingBox::symmetric(1.0, 1.0);
        assert!(bb.contains(Point::new(1.0, -1.0)));
        assert!(!bb.contains(Point::new(1.0001, 0.0)));
    }

    #[test]
    fn custom_density_is_honoured() {
        // Four samples of an astroid-like curve still touch both axes.
        let bb = compute_bounds_with(2.0, 3.0, 0.5, 4).unwrap();
        assert!((bb.max_x - 2.0).abs() < EPS);
        assert!((bb.max_y - 3.0).abs() < EPS);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sampled_points_lie_within_bounds(
                a in 0.1_f64..500.0,
                b in 0.1_f64..500.0,
                n in 0.1_f64..20.0,
            ) {
                let bb = compute_bounds(a, b, n).unwrap();
                for p in sample(a, b, n, BOUNDS_SEGMENTS).unwrap() {
                    prop_assert!(bb.contains(p), "{:?} outside {:?}", p, bb);
                }
            }

            #[test]
            fn bounds_within_nominal_box(
                a in 0.1_f64..500.0,
                b in 0.1_f64..500.0,
                n in 0.1_f64..20.0,
            ) {
                let bb = compute_bounds(a, b, n).unwrap();
                let nominal = BoundingBox::symmetric(a, b);
                prop_assert!(bb.min_x >= nominal.min_x && bb.max_x <= nominal.max_x);
                prop_assert!(bb.min_y >= nominal.min_y && bb.max_y <= nominal.max_y);
            }
        }
    }
}
