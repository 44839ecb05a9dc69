//! Error types for valuation operations.
//!
//! Model computation itself never fails: numeric degeneracies (negative
//! radicand, division by zero) propagate through `f64` as NaN or infinity.
//! Errors arise only at the edges, when looking up a model by name or
//! parsing a metrics document.

use thiserror::Error;

/// Result type for valuation operations.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors that can occur around (not inside) model computation.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// Model not found in the registry
    #[error("Model not found: {0}")]
    NotFound(String),

    /// Malformed JSON metrics document
    #[error("Invalid metrics document: {0}")]
    Parse(#[from] serde_json::Error),
}
