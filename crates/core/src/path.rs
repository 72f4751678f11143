//! SVG path data for a sampled outline.
//!
//! Output is `M x0 y0 L x1 y1 ... Z`: one move, a straight line to every
//! following point in input order, and an optional close marker.

use crate::shape::Point;
use std::fmt::Write;

/// Default number of decimal digits kept per coordinate.
pub const DEFAULT_PRECISION: u32 = 3;
/// Largest precision honoured; `f64` carries no more significant decimals.
pub const MAX_PRECISION: u32 = 15;

/// Formatting options for [`build_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathOptions {
    /// Decimal digits kept per coordinate (capped at [`MAX_PRECISION`]).
    pub precision: u32,
    /// Append `Z` after the last point.
    pub close: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            close: true,
        }
    }
}

/// Serializes `points` as SVG path data.
///
/// An empty slice produces an empty string.
pub fn build_path(points: &[Point], opts: PathOptions) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    // "L x y" is rarely longer than 20 bytes at the default precision.
    let mut d = String::with_capacity(points.len() * 20);
    let p = opts.precision;
    let _ = write!(d, "M {} {}", format_coord(first.x, p), format_coord(first.y, p));
    for pt in rest {
        let _ = write!(d, " L {} {}", format_coord(pt.x, p), format_coord(pt.y, p));
    }
    if opts.close {
        d.push_str(" Z");
    }
    d
}

/// Rounds `v` to `precision` decimals (half away from zero) and prints the
/// shortest decimal form that reads back to the rounded value.
///
/// Trailing zeros are dropped, integral values print without a point, and
/// negative zero prints as `0`.
pub fn format_coord(v: f64, precision: u32) -> String {
    let rounded = round_to(v, precision);
    // Adding 0.0 turns -0.0 into +0.0.
    format!("{}", rounded + 0.0)
}

/// Rounds half away from zero at `precision` decimal digits.
///
/// Values too large to scale without overflowing are already integral at
/// that precision and are returned unchanged, as are non-finite values.
pub fn round_to(v: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
        ]
    }

    #[test]
    fn empty_points_give_empty_path() {
        assert_eq!(build_path(&[], PathOptions::default()), "");
    }

    #[test]
    fn closed_path_has_move_lines_and_close() {
        let d = build_path(&square(), PathOptions::default());
        assert_eq!(d, "M 1 0 L 0 1 L -1 0 L 0 -1 Z");
    }

    #[test]
    fn open_path_omits_close_marker() {
        let opts = PathOptions {
            close: false,
            ..PathOptions::default()
        };
        assert_eq!(build_path(&square(), opts), "M 1 0 L 0 1 L -1 0 L 0 -1");
    }

    #[test]
    fn single_point_is_move_only() {
        let d = build_path(&[Point::new(2.5, -3.25)], PathOptions::default());
        assert_eq!(d, "M 2.5 -3.25 Z");
    }

    #[test]
    fn coordinates_are_rounded_to_precision() {
        let pts = [Point::new(1.23456, -9.87654)];
        let opts = PathOptions {
            precision: 2,
            close: false,
        };
        assert_eq!(build_path(&pts, opts), "M 1.23 -9.88");
    }

    #[test]
    fn format_coord_drops_trailing_zeros() {
        assert_eq!(format_coord(100.0, 3), "100");
        assert_eq!(format_coord(0.5, 3), "0.5");
        assert_eq!(format_coord(12.3400001, 3), "12.34");
    }

    #[test]
    fn format_coord_rounds_half_away_from_zero() {
        assert_eq!(format_coord(0.5, 0), "1");
        assert_eq!(format_coord(-0.5, 0), "-1");
        assert_eq!(format_coord(2.5, 0), "3");
    }

    #[test]
    fn format_coord_normalizes_negative_zero() {
        assert_eq!(format_coord(-0.0, 3), "0");
        assert_eq!(format_coord(-1e-9, 3), "0");
        assert_eq!(format_coord(6.123e-15, 3), "0");
    }

    #[test]
    fn zero_precision_gives_integers() {
        assert_eq!(format_coord(99.9, 0), "100");
        assert_eq!(format_coord(-12.2, 0), "-12");
    }

    #[test]
    fn round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(f64::MAX, 3), f64::MAX);
        assert!(round_to(f64::NAN, 3).is_nan());
    }

    #[test]
    fn command_count_matches_point_count() {
        let pts: Vec<Point> = (0..37).map(|i| Point::new(i as f64, 0.0)).collect();
        let d = build_path(&pts, PathOptions::default());
        let commands = d
            .split(' ')
            .filter(|tok| matches!(*tok, "M" | "L" | "Z"))
            .count();
        assert_eq!(commands, 38);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn formatted_coord_parses_back_within_half_ulp_of_precision(
                v in -1e6_f64..1e6,
                precision in 0_u32..=6,
            ) {
                let s = format_coord(v, precision);
                let parsed: f64 = s.parse().unwrap();
                let half_step = 0.5 * 10f64.powi(-(precision as i32));
                prop_assert!((parsed - v).abs() <= half_step * (1.0 + 1e-9) + 1e-9);
            }

            #[test]
            fn formatted_coord_never_uses_exponent_notation(
                v in -1e9_f64..1e9,
                precision in 0_u32..=6,
            ) {
                let s = format_coord(v, precision);
                prop_assert!(!s.contains('e') && !s.contains('E'), "{}", s);
            }
        }
    }
}
