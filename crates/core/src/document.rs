//! Self-contained SVG documents for a superellipse.
//!
//! The document holds a single closed `<path>`. Its viewBox is the tight
//! box of the sampled points grown by `padding + stroke_width / 2`, so the
//! stroke is never clipped at the edge.

use crate::bounds::BoundingBox;
use crate::error::EngineError;
use crate::path::{build_path, PathOptions, DEFAULT_PRECISION, MAX_PRECISION};
use crate::sampler::sample_params;
use crate::shape::ShapeParams;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Presentation attributes for [`assemble`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Stroke paint, any SVG color value.
    pub stroke: String,
    /// Stroke width in user units. Must be >= 0.
    pub stroke_width: f64,
    /// Fill paint, any SVG color value.
    pub fill: String,
    /// Root `width` attribute; omitted when absent or not positive.
    pub width: Option<f64>,
    /// Root `height` attribute; omitted when absent or not positive.
    pub height: Option<f64>,
    /// Extra margin around the shape in user units.
    pub padding: f64,
    /// Decimal digits kept in path coordinates.
    pub precision: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke: "black".to_owned(),
            stroke_width: 1.0,
            fill: "none".to_owned(),
            width: None,
            height: None,
            padding: 0.0,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl RenderStyle {
    /// Checks `stroke_width >= 0` and that `padding` is finite.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.stroke_width >= 0.0) || self.stroke_width.is_infinite() {
            return Err(EngineError::InvalidParameter {
                name: "stroke_width",
                constraint: "finite and at least 0",
                value: self.stroke_width,
            });
        }
        if !self.padding.is_finite() {
            return Err(EngineError::InvalidParameter {
                name: "padding",
                constraint: "finite",
                value: self.padding,
            });
        }
        Ok(())
    }

    /// Margin added on every side of the sampled bounds.
    pub fn margin(&self) -> f64 {
        self.padding + self.stroke_width / 2.0
    }
}

/// Renders the superellipse described by `shape` as an SVG document.
///
/// Samples at `shape.segments`, writes the path at `style.precision`
/// decimals and sizes the viewBox from the sampled points. Output is
/// byte-identical for identical inputs.
///
/// Returns `EngineError::InvalidParameter` for invalid shape or style
/// parameters; nothing is rendered in that case.
pub fn assemble(shape: &ShapeParams, style: &RenderStyle) -> Result<String, EngineError> {
    style.validate()?;
    let points = sample_params(shape)?;

    let path_d = build_path(
        &points,
        PathOptions {
            precision: style.precision.min(MAX_PRECISION),
            close: true,
        },
    );
    let view = BoundingBox::from_points(&points, BoundingBox::symmetric(shape.a, shape.b))
        .inflate(style.margin());

    log::debug!(
        "assembling svg: {} points, viewBox {:?}, path {} bytes",
        points.len(),
        view,
        path_d.len()
    );

    let mut svg = String::with_capacity(path_d.len() + 320);
    let _ = write!(svg, r#"<svg xmlns="{SVG_NS}""#);
    if let Some(w) = style.width.filter(|w| *w > 0.0) {
        let _ = write!(svg, r#" width="{}""#, num(w));
    }
    if let Some(h) = style.height.filter(|h| *h > 0.0) {
        let _ = write!(svg, r#" height="{}""#, num(h));
    }
    let _ = writeln!(
        svg,
        r#" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
        num(view.min_x),
        num(view.min_y),
        num(view.width()),
        num(view.height()),
    );
    let _ = writeln!(
        svg,
        r#"  <path d="{path_d}" fill="{}" stroke="{}" stroke-width="{}" vector-effect="non-scaling-stroke" />"#,
        xml_escape(&style.fill),
        xml_escape(&style.stroke),
        num(style.stroke_width),
    );
    svg.push_str("</svg>");
    Ok(svg)
}

/// Shortest round-trip form of `v`, with `-0` printed as `0`.
fn num(v: f64) -> String {
    format!("{}", v + 0.0)
}

/// Escapes the five XML special characters for use in attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
