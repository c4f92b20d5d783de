//! `bitfeature` provides a fixed-dimensionality bit vector treated as a feature vector over
//! the 2-element field. Some features include:
//! - construction from a pre-built bit set (checked against the declared dimensionality) or
//!   from a sequence of bits
//! - bit-level access and lazy traversal of the set bits
//! - a small algebra: XOR combination, negation, scalar gating and the null vector
//! - a numeric projection onto `f64` components
//!
//! The main data structures provided by this crate are:
//! - [`BitVec`]: a growable bit set stored in 64-bit blocks
//! - [`BitVector`]: a value type pairing a `BitVec` with its dimensionality
//! - [`DoubleVector`]: a real-valued vector
//!
//! Both vector kinds implement [`FeatureVector`], so generic code can be written over either.

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::bool_assert_comparison,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::bool_to_int_with_if,
    clippy::float_cmp
)]
pub mod bit;
pub mod bitvec;
pub mod bitvector;
pub mod double_vector;
pub mod error;
pub mod feature_vector;

pub use bit::Bit;
pub use bitvec::{BitBlock, BitSlice, BitVec};
pub use bitvector::BitVector;
pub use double_vector::DoubleVector;
pub use error::{Result, VectorError};
pub use feature_vector::FeatureVector;
