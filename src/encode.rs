//! Compact binary encoding.
//!
//! Maps a non-negative arbitrary-precision integer to a unique
//! variable-length codeword:
//!
//! 1. Bias the value by 2 and take its minimal little-endian bit
//!    decomposition. The bias guarantees a length of at least 2 with the
//!    top bit always set.
//! 2. Keep bit 0, invert every interior bit, and drop the (always-1) top
//!    bit entirely.
//!
//! The codeword is one bit shorter than the minimal binary representation
//! of `value + 2`. It carries no length prefix or terminator; decoding
//! requires the exact codeword length.

use num_bigint::{BigInt, Sign};

use crate::bitvector::BitVector;
use crate::error::CompactError;

/// Encode a non-negative integer as a compact binary codeword.
///
/// # Arguments
/// * `value` - Integer to encode (must be non-negative)
///
/// # Returns
/// The codeword bit vector, of length `bits(value + 2) - 1`.
///
/// # Errors
/// [`CompactError::NegativeValue`] if `value < 0`.
pub fn encode(value: &BigInt) -> Result<BitVector, CompactError> {
    if value.sign() == Sign::Minus {
        return Err(CompactError::NegativeValue(value.clone()));
    }

    let biased = BitVector::from_integer(&(value + 2u32), true)?;

    // Cannot occur after biasing, but pass a degenerate vector through
    if biased.is_empty() {
        return Ok(biased);
    }

    let n = biased.len();
    let mut result = BitVector::new(n - 1);

    // Keep the low bit
    result.set_bit(0, biased.get_bit(0));

    // Invert the interior; the top bit of `biased` is dropped
    for i in 1..n - 1 {
        result.set_bit(i, !biased.get_bit(i));
    }

    Ok(result)
}
