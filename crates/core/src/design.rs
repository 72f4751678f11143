//! Reproducible description of a rendered superellipse.
//!
//! A [`Design`] captures everything needed to recreate an SVG document:
//! the shape parameters and the render style. It serializes to JSON so a
//! design can be saved and rendered again later.

use crate::document::{assemble, RenderStyle};
use crate::error::EngineError;
use crate::shape::ShapeParams;
use serde::{Deserialize, Serialize};

/// Shape plus style. Two equal designs always render byte-identical documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Design {
    pub shape: ShapeParams,
    pub style: RenderStyle,
}

impl Design {
    /// Creates a design with the default sample count and style.
    pub fn new(a: f64, b: f64, n: f64) -> Self {
        Self {
            shape: ShapeParams::new(a, b, n),
            style: RenderStyle::default(),
        }
    }

    /// Validates both the shape and the style.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.shape.validate()?;
        self.style.validate()
    }

    /// Conventional file name, e.g. `superellipse_a100_b80_n4.svg`.
    pub fn file_name(&self) -> String {
        format!(
            "superellipse_a{}_b{}_n{}.svg",
            self.shape.a, self.shape.b, self.shape.n
        )
    }
}

/// Renders `design` with [`assemble`].
pub fn assemble_design(design: &Design) -> Result<String, EngineError> {
    assemble(&design.shape, &design.style)
}
