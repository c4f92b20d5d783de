//! The operations shared by every kind of feature vector.
//!
//! [`FeatureVector`] is implemented independently by [`BitVector`](crate::BitVector) and
//! [`DoubleVector`](crate::DoubleVector), so algorithms written against the trait work over
//! either. All operations are pure: derived vectors are new values and the receiver is never
//! modified.

use crate::error::Result;

pub trait FeatureVector: Clone {
    /// The type of a single component
    type Value;

    /// The fixed number of components
    fn dimensionality(&self) -> usize;

    /// The component for a 1-based `dimension`
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange) unless
    /// `1 <= dimension <= dimensionality()`
    fn value(&self, dimension: usize) -> Result<Self::Value>;

    /// All components in index order; the result has length `dimensionality()`
    fn values(&self) -> Vec<Self::Value>;

    /// Projection of the components onto real numbers
    fn vector(&self) -> Vec<f64>;

    /// Multiplication by a scalar
    fn scale(&self, k: f64) -> Self;

    /// The additive inverse
    fn negate(&self) -> Self;

    /// The additive identity of the same dimensionality
    fn null_vector(&self) -> Self;

    /// The sum of `self` and `other`
    fn combine(&self, other: &Self) -> Result<Self>;

    /// A new vector with the same components and identity token
    fn copy(&self) -> Self;

    /// The externally assigned identity token, if any
    fn id(&self) -> Option<u64>;

    /// Assigns or clears the identity token
    fn set_id(&mut self, id: Option<u64>);
}

/// Folds `vectors` left to right with [`FeatureVector::combine`]. Returns `Ok(None)` for an
/// empty slice.
pub fn sum<V: FeatureVector>(vectors: &[V]) -> Result<Option<V>> {
    let mut iter = vectors.iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    let mut acc = first.copy();
    for v in iter {
        acc = acc.combine(v)?;
    }
    Ok(Some(acc))
}

/// Checks whether every component of the real projection is zero
pub fn is_null<V: FeatureVector>(v: &V) -> bool {
    v.vector().iter().all(|&x| x == 0.0)
}
