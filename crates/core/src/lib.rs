#![deny(unsafe_code)]
//! Geometry core for the superellipse engine.
//!
//! Samples the Lamé curve `|x/a|^n + |y/b|^n = 1` ([`sample`]), serializes
//! outlines as SVG path data ([`build_path`]), computes bounding boxes
//! ([`compute_bounds`]) and enclosed area ([`estimate_area`]), and
//! assembles complete SVG documents ([`assemble`]).
//!
//! Every operation is a pure function of its inputs: no I/O, no shared
//! state, safe to call from any number of threads.

pub mod area;
pub mod bounds;
pub mod design;
pub mod document;
pub mod error;
pub mod path;
pub mod sampler;
pub mod shape;

pub use area::{estimate_area, estimate_area_with, exact_area, shoelace_area, AREA_SEGMENTS};
pub use bounds::{compute_bounds, compute_bounds_with, BoundingBox, BOUNDS_SEGMENTS};
pub use design::{assemble_design, Design};
pub use document::{assemble, RenderStyle};
pub use error::EngineError;
pub use path::{build_path, format_coord, PathOptions};
pub use sampler::{sample, sample_params};
pub use shape::{Point, ShapeParams};
