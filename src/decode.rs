//! Compact binary decoding (inverse of encoding).
//!
//! Reconstructs the integer from a codeword by re-inverting the interior
//! bits, re-appending the always-1 top bit the encoder dropped, and
//! removing the bias of 2.
//!
//! Decoding performs no provenance validation: the format is not
//! self-framing, so a bit string of the wrong length silently decodes to
//! some other value. Supplying the exact codeword length is the caller's
//! responsibility.

use num_bigint::BigInt;

use crate::bitvector::BitVector;

/// Decode a compact binary codeword back to the integer that produced it.
///
/// # Arguments
/// * `codeword` - Codeword produced by [`encode()`](crate::encode())
///
/// # Returns
/// The original non-negative integer. An empty codeword (a caller error in
/// practice) decodes to 0.
pub fn decode(codeword: &BitVector) -> BigInt {
    if codeword.is_empty() {
        return BigInt::from(0u32);
    }

    let n = codeword.len();
    let mut restored = BitVector::new(n + 1);

    // Keep the low bit, re-invert the interior
    restored.set_bit(0, codeword.get_bit(0));
    for i in 1..n {
        restored.set_bit(i, !codeword.get_bit(i));
    }

    // Reconstruct the top bit the encoder dropped
    restored.set_bit(n, true);

    restored.to_integer() - 2
}
