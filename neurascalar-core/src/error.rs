use thiserror::Error;

/// Custom error type for the NeuraScalar engine.
///
/// Numerically degenerate results (division by a zero-valued node, overflow in
/// `exp`) are deliberately *not* represented here: they flow through the graph
/// as infinite or NaN values and gradients.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NeuraScalarError {
    #[error("Invalid exponent for pow: {exponent} cannot be represented as f64")]
    InvalidExponent { exponent: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("In-place modification error during '{operation}': {reason}")]
    InplaceModificationError { operation: String, reason: String },
}
