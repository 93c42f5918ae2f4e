//! # Compact Binary
//!
//! A bijective binary encoding for non-negative arbitrary-precision
//! integers: every integer maps to a unique variable-length bit string,
//! and every bit string produced by the encoder maps back to exactly the
//! integer that produced it.
//!
//! ## Design
//!
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **Arbitrary precision** - values are carried as [`num_bigint::BigInt`]
//!   and bit vectors grow without bound
//! - **Pure functions** - every operation returns a new vector; nothing is
//!   shared or mutated across calls
//!
//! ## API Overview
//!
//! ### Codec
//!
//! - [`encode()`] - Map a non-negative integer to its codeword
//! - [`decode()`] - Map a codeword back to the integer
//!
//! ### Bit-Vector Layer
//!
//! - [`BitVector`] - Variable-length, LSB-first bit vector with
//!   arbitrary-precision increment/decrement, grow/shrink, slicing,
//!   trimming, concatenation, and integer/byte conversion
//!
//! The codeword is one bit shorter than the minimal binary representation
//! of `value + 2`. The scheme is not self-framing: codewords carry no
//! length prefix or terminator, so recovering the integer requires knowing
//! the exact codeword length. Any framing of multiple codewords is the
//! caller's responsibility.
//!
//! ## Usage
//!
//! ```rust
//! use compactbinary::{decode, encode};
//! use num_bigint::BigInt;
//!
//! let value = BigInt::from(42u32);
//! let codeword = encode(&value).unwrap();
//!
//! // "42" fits in 5 codeword bits: 44 = 101100, top bit dropped
//! assert_eq!(codeword.len(), 5);
//! assert_eq!(decode(&codeword), value);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bitvector;
mod decode;
mod encode;
mod error;

pub use bitvector::BitVector;
pub use decode::decode;
pub use encode::encode;
pub use error::CompactError;
