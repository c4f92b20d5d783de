//! Error types for feature vector construction and access.

use thiserror::Error;

/// Errors returned by fallible feature vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The requested dimensionality cannot hold the given bit pattern.
    #[error("specified dimensionality {dimensionality} is too low for a bit set of length {length}")]
    InvalidDimension {
        /// Dimensionality requested by the caller
        dimensionality: usize,
        /// One past the highest set bit of the pattern
        length: usize,
    },

    /// A 1-based dimension outside `[1, dimensionality]`.
    #[error("illegal dimension: {dimension} (dimensionality is {dimensionality})")]
    IndexOutOfRange {
        dimension: usize,
        dimensionality: usize,
    },

    /// Two vectors that must agree in dimensionality do not.
    #[error("dimensionality mismatch: expected {expected}, actual {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Text that does not denote a bit.
    #[error("not a bit: {0:?}")]
    InvalidBit(String),
}

impl VectorError {
    pub fn invalid_dimension(dimensionality: usize, length: usize) -> Self {
        Self::InvalidDimension {
            dimensionality,
            length,
        }
    }

    pub fn index_out_of_range(dimension: usize, dimensionality: usize) -> Self {
        Self::IndexOutOfRange {
            dimension,
            dimensionality,
        }
    }

    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

/// Result alias for feature vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            VectorError::invalid_dimension(3, 6).to_string(),
            "specified dimensionality 3 is too low for a bit set of length 6"
        );
        assert_eq!(
            VectorError::index_out_of_range(0, 4).to_string(),
            "illegal dimension: 0 (dimensionality is 4)"
        );
        assert_eq!(
            VectorError::dimension_mismatch(2, 5).to_string(),
            "dimensionality mismatch: expected 2, actual 5"
        );
        assert_eq!(
            VectorError::InvalidBit("x".to_owned()).to_string(),
            "not a bit: \"x\""
        );
    }
}
