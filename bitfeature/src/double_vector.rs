use crate::bitvector::BitVector;
use crate::error::{Result, VectorError};
use crate::feature_vector::FeatureVector;
use std::fmt;

/// A real-valued feature vector
///
/// Unlike [`BitVector`], the 1-based [`FeatureVector::value`] maps dimension `d` to component
/// `d - 1`, and [`FeatureVector::combine`] requires equal dimensionality.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubleVector {
    values: Vec<f64>,
    id: Option<u64>,
}

impl DoubleVector {
    pub fn new(values: Vec<f64>) -> Self {
        DoubleVector { values, id: None }
    }

    pub fn zeros(dimensionality: usize) -> Self {
        Self::new(vec![0.0; dimensionality])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(self.values.iter().map(|&x| f(x)).collect())
    }
}

impl From<Vec<f64>> for DoubleVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// The numeric projection of a bit vector
impl From<&BitVector> for DoubleVector {
    fn from(bits: &BitVector) -> Self {
        Self::new(bits.vector())
    }
}

impl fmt::Display for DoubleVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl FeatureVector for DoubleVector {
    type Value = f64;

    #[inline]
    fn dimensionality(&self) -> usize {
        self.values.len()
    }

    fn value(&self, dimension: usize) -> Result<f64> {
        if dimension < 1 || dimension > self.values.len() {
            return Err(VectorError::index_out_of_range(
                dimension,
                self.values.len(),
            ));
        }
        Ok(self.values[dimension - 1])
    }

    fn values(&self) -> Vec<f64> {
        self.values.clone()
    }

    fn vector(&self) -> Vec<f64> {
        self.values.clone()
    }

    fn scale(&self, k: f64) -> Self {
        self.map(|x| x * k)
    }

    fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    fn null_vector(&self) -> Self {
        Self::zeros(self.values.len())
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        if self.values.len() != other.values.len() {
            return Err(VectorError::dimension_mismatch(
                self.values.len(),
                other.values.len(),
            ));
        }
        Ok(Self::new(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }
}
