//! Error types for the superellipse core.

use thiserror::Error;

/// Errors produced by engine operations.
///
/// Raised before any output is built, so a failed call never yields partial
/// geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A shape or style parameter violated its mathematical constraint.
    #[error("invalid parameter '{name}': must be {constraint}, got {value}")]
    InvalidParameter {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

impl EngineError {
    /// Shorthand for the common "must be greater than 0" rejection.
    pub fn not_positive(name: &'static str, value: f64) -> Self {
        EngineError::InvalidParameter {
            name,
            constraint: "greater than 0",
            value,
        }
    }

    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            EngineError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Returns `Ok(value)` if `value > 0`, rejecting NaN as well as non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, EngineError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::not_positive(name, value))
    }
}
