//! Error types for configuring the sorter and applying its result.
//!
//! Sorting itself cannot fail; these errors only arise at the edges, when a
//! configuration is rejected or an order is applied to the wrong elements.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum XYCutError {
    /// A configuration ratio was negative, NaN or infinite.
    #[error("invalid config: {field} must be finite and non-negative, got {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    /// An order was applied to a different number of elements than it sorts.
    #[error("reading order covers {expected} elements but {actual} were given")]
    LengthMismatch { expected: usize, actual: usize },

    /// Indices passed as a reading order repeat or skip a position.
    #[error("not a permutation: index {index} is out of range or repeated")]
    NotAPermutation { index: usize },
}

pub type Result<T> = std::result::Result<T, XYCutError>;
