//! Error types for bit-vector operations and the compact codec.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur during bit-vector manipulation or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompactError {
    /// Negative integer supplied where a non-negative one is required
    #[error("cannot represent negative value: {0}")]
    NegativeValue(BigInt),

    /// Bit index outside the vector
    #[error("bit index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Bit range outside the vector (slice)
    #[error("bit range at {start} with count {count} out of bounds for length {len}")]
    RangeOutOfBounds {
        start: usize,
        count: usize,
        len: usize,
    },

    /// Shrink request larger than the vector
    #[error("cannot remove {remove} bits from a vector of length {len}")]
    ShrinkBeyondLength { remove: usize, len: usize },

    /// Decrement of an all-zero vector
    #[error("arithmetic underflow: cannot decrement zero")]
    Underflow,
}
