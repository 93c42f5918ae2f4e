//! Variable-length bit vector with arbitrary-precision integer semantics.
//!
//! This module provides the bit-vector layer the compact codec is built on.
//! A vector is an ordered sequence of binary digits representing an unsigned
//! integer of unbounded magnitude.
//!
//! ## Bit Numbering Convention
//! - Bit 0 = LSB (Least Significant Bit)
//! - Bit N-1 = MSB (Most Significant Bit held)
//!
//! ## Byte Packing (Little-Endian)
//! Bit `i` lives in `data[i / 8]` at bit position `i % 8`, so byte 0 holds
//! bits 0-7 and the low bit of each byte is the lowest index in that byte's
//! range. Unused high bits of the final byte are always zero.
//!
//! Length is independent of numeric value: a vector may carry high-index
//! zero bits unless explicitly trimmed, and equality compares length and
//! content, never the numeric value alone. Every arithmetic or structural
//! operation returns a new vector; the receiver is never mutated.

#![allow(clippy::return_self_not_must_use)]

use std::fmt;

use num_bigint::{BigInt, BigUint};

use crate::error::CompactError;

/// Ordered, variable-length sequence of binary digits, LSB first.
///
/// Stores a binary vector of arbitrary length using byte-packed storage.
/// Bit 0 is the LSB, bit N-1 is the MSB held. A zero-length vector is
/// valid and represents the value 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitVector {
    /// Byte storage (little-endian packing).
    data: Vec<u8>,
    /// Number of bits.
    length: usize,
}

impl BitVector {
    /// Create a new bit vector with specified length, initialized to zero.
    ///
    /// # Arguments
    /// * `num_bits` - Number of bits (may be 0)
    ///
    /// # Returns
    /// A new `BitVector` with all bits set to zero.
    pub fn new(num_bits: usize) -> Self {
        Self {
            data: vec![0u8; (num_bits + 7) / 8],
            length: num_bits,
        }
    }

    /// Create a bit vector from raw bytes (little-endian bit packing).
    ///
    /// # Arguments
    /// * `bytes` - Input byte slice
    /// * `num_bits` - Number of valid bits
    ///
    /// # Panics
    /// Panics if the byte slice is too short for the specified bit count.
    pub fn from_bytes(bytes: &[u8], num_bits: usize) -> Self {
        let expected_bytes = (num_bits + 7) / 8;
        assert!(bytes.len() >= expected_bytes);

        let mut result = Self {
            data: bytes[..expected_bytes].to_vec(),
            length: num_bits,
        };
        result.mask_tail();
        result
    }

    /// Create a bit vector from a slice of booleans, index 0 = LSB.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut result = Self::new(bits.len());
        for (i, &bit) in bits.iter().enumerate() {
            result.set_bit(i, bit);
        }
        result
    }

    /// Create a bit vector from a non-negative arbitrary-precision integer.
    ///
    /// Decomposes `value` into little-endian bit order: bit 0 of the result
    /// is bit 0 of the integer.
    ///
    /// # Arguments
    /// * `value` - Integer to decompose (must be non-negative)
    /// * `minimal` - Trim high-index zero bits down to the top set bit
    ///
    /// # Returns
    /// The decomposed vector. Value 0 always yields a single zero bit.
    /// Without `minimal`, the length is rounded up to whole bytes.
    ///
    /// # Errors
    /// [`CompactError::NegativeValue`] if `value < 0`.
    pub fn from_integer(value: &BigInt, minimal: bool) -> Result<Self, CompactError> {
        let magnitude = value
            .to_biguint()
            .ok_or_else(|| CompactError::NegativeValue(value.clone()))?;

        if magnitude.bits() == 0 {
            return Ok(Self::new(1));
        }

        let bytes = magnitude.to_bytes_le();
        let result = Self::from_bytes(&bytes, bytes.len() * 8);

        if minimal {
            Ok(result.trim_end(false))
        } else {
            Ok(result)
        }
    }

    /// Reconstruct the unsigned integer value, treating bit 0 as LSB.
    pub fn to_integer(&self) -> BigInt {
        BigInt::from(BigUint::from_bytes_le(&self.data))
    }

    /// Convert the bit vector to bytes.
    ///
    /// Packs bits 8-per-byte, low bit of each byte = lowest index in that
    /// byte's range; unused high bits of the final byte are zero.
    ///
    /// # Returns
    /// A new `Vec<u8>` containing the packed bits, or a single zero byte
    /// for a zero-length vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.data.is_empty() {
            return vec![0u8];
        }
        self.data.clone()
    }

    /// Get the length in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the bit vector is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Get bit value at position.
    ///
    /// # Arguments
    /// * `pos` - Bit position (0 = LSB, length-1 = MSB)
    ///
    /// # Returns
    /// Bit value, or `false` if position is out of bounds.
    #[inline]
    pub fn get_bit(&self, pos: usize) -> bool {
        if pos >= self.length {
            return false;
        }

        (self.data[pos >> 3] >> (pos & 7)) & 1 == 1
    }

    /// Set bit value at position. Out-of-bounds positions are ignored.
    ///
    /// # Arguments
    /// * `pos` - Bit position (0 = LSB, length-1 = MSB)
    /// * `value` - Bit value
    #[inline]
    pub fn set_bit(&mut self, pos: usize, value: bool) {
        if pos >= self.length {
            return;
        }

        if value {
            self.data[pos >> 3] |= 1 << (pos & 7);
        } else {
            self.data[pos >> 3] &= !(1 << (pos & 7));
        }
    }

    /// Add 1 using ripple-carry from bit 0 upward.
    ///
    /// If the carry propagates past the last bit (all bits were 1), the
    /// result grows by exactly one bit with the new top bit set; otherwise
    /// the length is unchanged.
    pub fn increment(&self) -> Self {
        let mut result = self.clone();

        for i in 0..self.length {
            if result.get_bit(i) {
                // Carry: 1 + 1 = 0, keep rippling
                result.set_bit(i, false);
            } else {
                result.set_bit(i, true);
                return result;
            }
        }

        // Carry out of the top: grow by one bit
        result.append(true)
    }

    /// Subtract 1 using ripple-borrow from bit 0 upward.
    ///
    /// The length is always preserved.
    ///
    /// # Errors
    /// [`CompactError::Underflow`] if the vector is all-zero (including the
    /// zero-length vector): the borrow would propagate past the top.
    pub fn decrement(&self) -> Result<Self, CompactError> {
        let mut result = self.clone();

        for i in 0..self.length {
            if result.get_bit(i) {
                result.set_bit(i, false);
                return Ok(result);
            }
            // Borrow: 0 - 1 = 1, keep rippling
            result.set_bit(i, true);
        }

        Err(CompactError::Underflow)
    }

    /// Add a small constant by `k` sequential increments.
    ///
    /// Not an efficient general adder; intended for small `k` only.
    pub fn add_constant(&self, k: u32) -> Self {
        let mut result = self.clone();
        for _ in 0..k {
            result = result.increment();
        }
        result
    }

    /// Subtract a small constant by `k` sequential decrements.
    ///
    /// # Errors
    /// [`CompactError::Underflow`] if any step would decrement zero.
    pub fn sub_constant(&self, k: u32) -> Result<Self, CompactError> {
        let mut result = self.clone();
        for _ in 0..k {
            result = result.decrement()?;
        }
        Ok(result)
    }

    /// Grow by appending `extra` zero bits at the high end.
    ///
    /// A pure length change: bits 0..len-1 keep their values and indices.
    /// This is not an arithmetic shift and never changes the numeric value.
    pub fn grow(&self, extra: usize) -> Self {
        let new_length = self.length + extra;
        let mut data = self.data.clone();
        data.resize((new_length + 7) / 8, 0);

        Self {
            data,
            length: new_length,
        }
    }

    /// Shrink by dropping the top `remove` bits.
    ///
    /// # Errors
    /// [`CompactError::ShrinkBeyondLength`] if `remove > len`.
    pub fn shrink(&self, remove: usize) -> Result<Self, CompactError> {
        if remove > self.length {
            return Err(CompactError::ShrinkBeyondLength {
                remove,
                len: self.length,
            });
        }

        let new_length = self.length - remove;
        let mut result = Self {
            data: self.data[..(new_length + 7) / 8].to_vec(),
            length: new_length,
        };
        result.mask_tail();
        Ok(result)
    }

    /// Grow by one bit and set the new top bit.
    pub fn append(&self, bit: bool) -> Self {
        let mut result = self.grow(1);
        result.set_bit(self.length, bit);
        result
    }

    /// Extract bits `start .. start + count`, renumbered from 0.
    ///
    /// Copies exactly `count` bits beginning at `start` (half-open range).
    ///
    /// # Errors
    /// [`CompactError::RangeOutOfBounds`] if `start + count > len`.
    pub fn slice(&self, start: usize, count: usize) -> Result<Self, CompactError> {
        let out_of_bounds = CompactError::RangeOutOfBounds {
            start,
            count,
            len: self.length,
        };
        let end = start.checked_add(count).ok_or(out_of_bounds.clone())?;
        if end > self.length {
            return Err(out_of_bounds);
        }

        let mut result = Self::new(count);
        for i in 0..count {
            result.set_bit(i, self.get_bit(start + i));
        }
        Ok(result)
    }

    /// Concatenate two vectors: `self` low, `other` high.
    ///
    /// The result has length `self.len() + other.len()`; bits
    /// 0..self.len()-1 come from `self` and `other` becomes the
    /// more-significant part.
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = Self::new(self.length + other.length);
        for i in 0..self.length {
            result.set_bit(i, self.get_bit(i));
        }
        for i in 0..other.length {
            result.set_bit(self.length + i, other.get_bit(i));
        }
        result
    }

    /// Drop trailing high-index bits equal to `value`.
    ///
    /// Stops at the first differing bit; returns a zero-length vector if
    /// every bit equals `value`.
    pub fn trim_end(&self, value: bool) -> Self {
        let mut keep = self.length;
        while keep > 0 && self.get_bit(keep - 1) == value {
            keep -= 1;
        }

        let mut result = Self::new(keep);
        for i in 0..keep {
            result.set_bit(i, self.get_bit(i));
        }
        result
    }

    /// Reverse the bit order: index `i` becomes index `len - 1 - i`.
    pub fn reverse(&self) -> Self {
        let mut result = Self::new(self.length);

        for i in 0..self.length {
            result.set_bit(self.length - 1 - i, self.get_bit(i));
        }

        result
    }

    /// Calculate the Hamming weight (number of 1 bits).
    ///
    /// The tail invariant keeps unused bits of the last byte zero, so a
    /// plain popcount over the storage is exact.
    pub fn hamming_weight(&self) -> usize {
        self.data
            .iter()
            .map(|&byte| byte.count_ones() as usize)
            .sum()
    }

    /// Return a vector identical except bit `i` inverted.
    ///
    /// # Errors
    /// [`CompactError::IndexOutOfBounds`] if `i >= len`.
    pub fn flip(&self, i: usize) -> Result<Self, CompactError> {
        if i >= self.length {
            return Err(CompactError::IndexOutOfBounds {
                index: i,
                len: self.length,
            });
        }

        let mut result = self.clone();
        result.set_bit(i, !self.get_bit(i));
        Ok(result)
    }

    /// Zero the unused high bits of the final byte.
    fn mask_tail(&mut self) {
        let used = self.length % 8;
        if used != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }
}

impl fmt::Display for BitVector {
    /// Render as `'0'`/`'1'` characters, index 0 (LSB) first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.length {
            f.write_str(if self.get_bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bv = BitVector::new(12);
        assert_eq!(bv.len(), 12);
        assert_eq!(bv.hamming_weight(), 0);

        let empty = BitVector::new(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_set_bit() {
        let mut bv = BitVector::new(16);

        bv.set_bit(0, true);
        assert!(bv.get_bit(0));
        assert!(!bv.get_bit(1));

        bv.set_bit(15, true);
        assert!(bv.get_bit(15));

        bv.set_bit(0, false);
        assert!(!bv.get_bit(0));

        // Out of bounds reads as 0
        assert!(!bv.get_bit(16));
    }

    #[test]
    fn test_from_bytes_to_bytes_roundtrip() {
        let original = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let bv = BitVector::from_bytes(&original, 32);
        assert_eq!(bv.to_bytes(), original);
    }

    #[test]
    fn test_from_bytes_masks_tail() {
        // 4 valid bits out of 0xFF: high nibble must read as zero
        let bv = BitVector::from_bytes(&[0xFF], 4);
        assert_eq!(bv.len(), 4);
        assert_eq!(bv.hamming_weight(), 4);
        assert_eq!(bv.to_bytes(), vec![0x0F]);
    }

    #[test]
    fn test_to_bytes_empty() {
        let bv = BitVector::new(0);
        assert_eq!(bv.to_bytes(), vec![0x00]);
    }

    #[test]
    fn test_from_bits() {
        let bv = BitVector::from_bits(&[true, false, true]);
        assert_eq!(bv.len(), 3);
        assert!(bv.get_bit(0));
        assert!(!bv.get_bit(1));
        assert!(bv.get_bit(2));
        assert_eq!(bv.to_string(), "101");
    }

    #[test]
    fn test_from_integer_zero() {
        let bv = BitVector::from_integer(&BigInt::from(0), true).unwrap();
        assert_eq!(bv.len(), 1);
        assert!(!bv.get_bit(0));

        // Zero is a single bit regardless of the minimal flag
        let bv = BitVector::from_integer(&BigInt::from(0), false).unwrap();
        assert_eq!(bv.len(), 1);
    }

    #[test]
    fn test_from_integer_minimal() {
        // 6 = 110: bit0=0, bit1=1, bit2=1
        let bv = BitVector::from_integer(&BigInt::from(6), true).unwrap();
        assert_eq!(bv.len(), 3);
        assert_eq!(bv.to_string(), "011");
    }

    #[test]
    fn test_from_integer_non_minimal() {
        // Without trimming the length is byte granular
        let bv = BitVector::from_integer(&BigInt::from(6), false).unwrap();
        assert_eq!(bv.len(), 8);
        assert_eq!(bv.to_string(), "01100000");
    }

    #[test]
    fn test_from_integer_negative() {
        let err = BitVector::from_integer(&BigInt::from(-1), true).unwrap_err();
        assert_eq!(err, CompactError::NegativeValue(BigInt::from(-1)));
    }

    #[test]
    fn test_to_integer() {
        let bv = BitVector::from_integer(&BigInt::from(1234), true).unwrap();
        assert_eq!(bv.to_integer(), BigInt::from(1234));

        // Leading zero bits do not change the value
        assert_eq!(bv.grow(13).to_integer(), BigInt::from(1234));

        assert_eq!(BitVector::new(0).to_integer(), BigInt::from(0));
    }

    #[test]
    fn test_integer_roundtrip_large() {
        let value = BigInt::from(0xDEAD_BEEFu64) * BigInt::from(0x1234_5678u64);
        let bv = BitVector::from_integer(&value, true).unwrap();
        assert_eq!(bv.to_integer(), value);
        // Minimal representation has its top bit set
        assert!(bv.get_bit(bv.len() - 1));
    }

    #[test]
    fn test_increment() {
        // 3 = 11 → 4 = 001, growing by one bit
        let bv = BitVector::from_bits(&[true, true]);
        let inc = bv.increment();
        assert_eq!(inc.len(), 3);
        assert_eq!(inc.to_string(), "001");

        // 2 = 01 → 3 = 11, same length
        let bv = BitVector::from_bits(&[false, true]);
        let inc = bv.increment();
        assert_eq!(inc.len(), 2);
        assert_eq!(inc.to_string(), "11");

        // Empty vector increments to a single set bit
        let inc = BitVector::new(0).increment();
        assert_eq!(inc.len(), 1);
        assert!(inc.get_bit(0));
    }

    #[test]
    fn test_decrement() {
        // 4 = 001 → 3 = 110, length preserved
        let bv = BitVector::from_bits(&[false, false, true]);
        let dec = bv.decrement().unwrap();
        assert_eq!(dec.len(), 3);
        assert_eq!(dec.to_string(), "110");
    }

    #[test]
    fn test_decrement_zero_underflows() {
        let err = BitVector::new(3).decrement().unwrap_err();
        assert_eq!(err, CompactError::Underflow);

        let err = BitVector::new(0).decrement().unwrap_err();
        assert_eq!(err, CompactError::Underflow);
    }

    #[test]
    fn test_add_sub_constant() {
        let bv = BitVector::from_integer(&BigInt::from(7), true).unwrap();
        assert_eq!(bv.add_constant(2).to_integer(), BigInt::from(9));
        assert_eq!(
            bv.add_constant(2).sub_constant(2).unwrap().to_integer(),
            BigInt::from(7)
        );

        // Subtracting below zero underflows
        let one = BitVector::from_bits(&[true]);
        assert_eq!(one.sub_constant(2).unwrap_err(), CompactError::Underflow);
    }

    #[test]
    fn test_grow_preserves_bits() {
        let bv = BitVector::from_bits(&[true, false, true]);
        let grown = bv.grow(10);
        assert_eq!(grown.len(), 13);
        for i in 0..3 {
            assert_eq!(grown.get_bit(i), bv.get_bit(i));
        }
        for i in 3..13 {
            assert!(!grown.get_bit(i));
        }
        // Grow is a length change, not a shift
        assert_eq!(grown.to_integer(), bv.to_integer());
    }

    #[test]
    fn test_shrink() {
        let bv = BitVector::from_bits(&[true, false, true, true]);
        let shrunk = bv.shrink(2).unwrap();
        assert_eq!(shrunk.len(), 2);
        assert_eq!(shrunk.to_string(), "10");

        assert_eq!(bv.shrink(4).unwrap().len(), 0);
        assert_eq!(
            bv.shrink(5).unwrap_err(),
            CompactError::ShrinkBeyondLength { remove: 5, len: 4 }
        );
    }

    #[test]
    fn test_grow_shrink_inverse() {
        let bv = BitVector::from_bits(&[true, true, false, true, false]);
        assert_eq!(bv.grow(9).shrink(9).unwrap(), bv);
    }

    #[test]
    fn test_append() {
        let bv = BitVector::from_bits(&[false, true]);
        let appended = bv.append(true);
        assert_eq!(appended.len(), 3);
        assert_eq!(appended.to_string(), "011");
    }

    #[test]
    fn test_slice() {
        let bv = BitVector::from_bits(&[true, false, true, true, false, true]);

        // Half-open range: exactly `count` bits starting at `start`
        let mid = bv.slice(1, 3).unwrap();
        assert_eq!(mid.len(), 3);
        assert_eq!(mid.to_string(), "011");

        let all = bv.slice(0, 6).unwrap();
        assert_eq!(all, bv);

        let none = bv.slice(6, 0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let bv = BitVector::new(6);
        assert_eq!(
            bv.slice(4, 3).unwrap_err(),
            CompactError::RangeOutOfBounds {
                start: 4,
                count: 3,
                len: 6
            }
        );
    }

    #[test]
    fn test_concat() {
        let a = BitVector::from_bits(&[true, false]);
        let b = BitVector::from_bits(&[true, true, false]);

        let joined = a.concat(&b);
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.to_string(), "10110");

        // The slice inverse recovers both halves exactly
        assert_eq!(joined.slice(0, a.len()).unwrap(), a);
        assert_eq!(joined.slice(a.len(), b.len()).unwrap(), b);
    }

    #[test]
    fn test_trim_end() {
        let bv = BitVector::from_bits(&[true, false, true, false, false]);
        let trimmed = bv.trim_end(false);
        assert_eq!(trimmed.len(), 3);
        assert_eq!(trimmed.to_string(), "101");

        // Idempotent
        assert_eq!(trimmed.trim_end(false), trimmed);

        // All bits equal the trim value: zero-length result
        assert_eq!(BitVector::new(5).trim_end(false).len(), 0);

        let ones = BitVector::from_bits(&[true, true]);
        assert_eq!(ones.trim_end(true).len(), 0);
    }

    #[test]
    fn test_reverse() {
        let bv = BitVector::from_bits(&[true, false, false]);
        let rev = bv.reverse();
        assert_eq!(rev.to_string(), "001");
        assert_eq!(rev.reverse(), bv);
    }

    #[test]
    fn test_hamming_weight() {
        let mut bv = BitVector::new(13);
        assert_eq!(bv.hamming_weight(), 0);

        bv.set_bit(0, true);
        bv.set_bit(5, true);
        bv.set_bit(12, true);
        assert_eq!(bv.hamming_weight(), 3);
    }

    #[test]
    fn test_flip() {
        let bv = BitVector::from_bits(&[true, false, true]);
        let flipped = bv.flip(1).unwrap();
        assert_eq!(flipped.to_string(), "111");
        // The original is untouched
        assert_eq!(bv.to_string(), "101");

        assert_eq!(
            bv.flip(3).unwrap_err(),
            CompactError::IndexOutOfBounds { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_equality_is_structural() {
        // Same value, different length: not equal
        let a = BitVector::from_bits(&[true]);
        let b = BitVector::from_bits(&[true, false]);
        assert_eq!(a.to_integer(), b.to_integer());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        // LSB-first textual order
        let bv = BitVector::from_integer(&BigInt::from(4), true).unwrap();
        assert_eq!(bv.to_string(), "001");
        assert_eq!(BitVector::new(0).to_string(), "");
    }

    #[test]
    fn test_default() {
        let bv = BitVector::default();
        assert_eq!(bv.len(), 0);
        assert!(bv.is_empty());
    }
}
