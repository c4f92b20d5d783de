use crate::bit::Bit;
use crate::bitvec::{min_blocks, BitSlice, BitVec, Ones};
use crate::error::{Result, VectorError};
use crate::feature_vector::FeatureVector;
use std::fmt;
use tracing::{debug, trace};

/// A bit vector of fixed dimensionality, backed by a [`BitVec`]
///
/// `BitVector` is a value type: negation, combination and scaling return new vectors and never
/// touch the receiver. An optional identity token travels with [`BitVector::copy`] but takes no
/// part in equality.
///
/// Two indexing conventions coexist. [`BitVector::value`] takes a 1-based dimension in
/// `[1, dimensionality]` but reads the storage at that same index, so `value(d)` returns bit
/// `d`, not bit `d - 1`. Every other accessor is 0-based.
///
/// ```
/// use bitfeature::{Bit, BitVector};
///
/// let v = BitVector::from_bools(&[true, false, true]);
/// assert_eq!(v.dimensionality(), 3);
/// assert_eq!(v.vector(), vec![1.0, 0.0, 1.0]);
/// assert_eq!(v.set_bits(), vec![0, 2]);
/// assert_eq!(v.value(2).unwrap(), Bit::ONE);
/// ```
#[derive(Clone, Debug)]
pub struct BitVector {
    bits: BitVec,
    dimensionality: usize,
    id: Option<u64>,
}

impl BitVector {
    /// Wraps an existing bit set with the given dimensionality
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidDimension`] if the highest set bit of `bits` is not below
    /// `dimensionality`
    pub fn from_bit_set(bits: BitVec, dimensionality: usize) -> Result<Self> {
        let length = bits.bit_length();
        if dimensionality < length {
            debug!(dimensionality, length, "bit set does not fit dimensionality");
            return Err(VectorError::invalid_dimension(dimensionality, length));
        }
        Ok(BitVector {
            bits,
            dimensionality,
            id: None,
        })
    }

    /// Builds a vector of the given dimensionality with exactly the bits in `indices` set
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidDimension`] if any index is not below `dimensionality`. The check
    /// runs before any storage is allocated.
    pub fn from_indices(indices: &[usize], dimensionality: usize) -> Result<Self> {
        if let Some(&max) = indices.iter().max() {
            if max >= dimensionality {
                debug!(dimensionality, max, "index does not fit dimensionality");
                return Err(VectorError::invalid_dimension(
                    dimensionality,
                    max.saturating_add(1),
                ));
            }
        }
        Self::from_bit_set(BitVec::from_indices(indices.iter().copied()), dimensionality)
    }

    /// Builds a vector with dimensionality `values.len()`, where bit `i` is set iff `values[i]`
    /// is one
    pub fn from_bit_array(values: &[Bit]) -> Self {
        values.iter().copied().collect()
    }

    /// Same as [`BitVector::from_bit_array`], for plain `bool`s
    pub fn from_bools(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }

    /// The all-zero vector of the given dimensionality
    pub fn zeros(dimensionality: usize) -> Self {
        Self::derived(BitVec::default(), dimensionality)
    }

    /// Creates a new random `BitVector` of the given dimensionality
    pub fn random(rng: &mut impl rand::Rng, dimensionality: usize) -> Self {
        let mut bits = BitVec::random(rng, min_blocks(dimensionality));
        bits.truncate(dimensionality);
        Self::derived(bits, dimensionality)
    }

    /// Assembles a result of the algebra. Callers guarantee the bits fit or deliberately keep
    /// bit-set growth past `dimensionality`.
    #[inline]
    fn derived(bits: BitVec, dimensionality: usize) -> Self {
        trace!(dimensionality, blocks = bits.len(), "derived bit vector");
        BitVector {
            bits,
            dimensionality,
            id: None,
        }
    }

    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Returns the bit for a 1-based `dimension`
    ///
    /// The dimension is used as a storage index without subtracting one: `value(d)` reads
    /// bit `d`. In particular `value(dimensionality())` reads past the last declared bit.
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] unless `1 <= dimension <= dimensionality()`
    pub fn value(&self, dimension: usize) -> Result<Bit> {
        if dimension < 1 || dimension > self.dimensionality {
            return Err(VectorError::index_out_of_range(
                dimension,
                self.dimensionality,
            ));
        }
        Ok(Bit::from(self.bits.bit(dimension)))
    }

    /// Snapshot of bits `0..dimensionality()`
    pub fn values(&self) -> Vec<Bit> {
        (0..self.dimensionality)
            .map(|i| Bit::from(self.bits.bit(i)))
            .collect()
    }

    /// Gets the bit at 0-based position `index`
    ///
    /// There is no bounds check; positions that were never stored read as `false`.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        self.bits.bit(index)
    }

    /// Checks that the lowest `indices.len()` bits are all set. Only the length of `indices`
    /// is consulted, not its contents.
    pub fn are_set(&self, indices: &[usize]) -> bool {
        (0..indices.len()).all(|i| self.bits.bit(i))
    }

    /// Indices of all set bits, ascending
    pub fn set_bits(&self) -> Vec<usize> {
        self.ones().collect()
    }

    /// Lazy ascending iterator over the indices of all set bits
    #[inline]
    pub fn ones(&self) -> Ones<'_> {
        self.bits.ones()
    }

    /// Returns the number of 1s in the vector (Hamming weight)
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Projects each bit to `1.0` or `0.0`, in index order
    pub fn vector(&self) -> Vec<f64> {
        (0..self.dimensionality)
            .map(|i| if self.bits.bit(i) { 1.0 } else { 0.0 })
            .collect()
    }

    /// Returns an immutable reference to the underlying bit set
    #[inline]
    pub fn as_bit_set(&self) -> &BitSlice {
        &self.bits
    }

    #[inline]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    #[inline]
    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    /// Flips every bit in `[0, dimensionality)`
    pub fn negate(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.flip_range(0, self.dimensionality);
        Self::derived(bits, self.dimensionality)
    }

    /// A vector of equal dimensionality containing only zeros
    pub fn null_vector(&self) -> Self {
        Self::zeros(self.dimensionality)
    }

    /// Returns a copy of this vector if `k` is nonzero, the null vector otherwise
    pub fn scale(&self, k: f64) -> Self {
        if k == 0.0 {
            self.null_vector()
        } else {
            self.copy()
        }
    }

    /// XOR of this vector and `other`
    ///
    /// The result is rebuilt from `other`'s values, so its dimensionality is `other`'s. This
    /// vector's stored bits are then XORed in with bit-set growth: bits at or above `other`'s
    /// dimensionality survive in storage (see [`BitVector::is_set`]) but are outside
    /// [`BitVector::values`].
    pub fn combine(&self, other: &BitVector) -> Self {
        if self.dimensionality != other.dimensionality {
            debug!(
                receiver = self.dimensionality,
                other = other.dimensionality,
                "combining bit vectors of different dimensionality"
            );
        }
        let mut result = BitVector::from_bit_array(&other.values());
        result.bits.xor_in(&self.bits);
        result
    }

    /// A new vector with the same bits, dimensionality and identity token
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut dimensionality = 0;
        let bits: BitVec = iter.into_iter().inspect(|_| dimensionality += 1).collect();
        Self::derived(bits, dimensionality)
    }
}

impl FromIterator<Bit> for BitVector {
    fn from_iter<T: IntoIterator<Item = Bit>>(iter: T) -> Self {
        iter.into_iter().map(Bit::bit_value).collect()
    }
}

/// Formats the vector for display
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.dimensionality {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Bit::from(self.bits.bit(i)))?;
        }
        write!(f, "]")
    }
}

/// Equal dimensionality and equal set bits; the identity token is ignored
impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.dimensionality == other.dimensionality && self.bits.same_bits(&other.bits)
    }
}

impl Eq for BitVector {}

impl FeatureVector for BitVector {
    type Value = Bit;

    fn dimensionality(&self) -> usize {
        BitVector::dimensionality(self)
    }

    fn value(&self, dimension: usize) -> Result<Bit> {
        BitVector::value(self, dimension)
    }

    fn values(&self) -> Vec<Bit> {
        BitVector::values(self)
    }

    fn vector(&self) -> Vec<f64> {
        BitVector::vector(self)
    }

    fn scale(&self, k: f64) -> Self {
        BitVector::scale(self, k)
    }

    fn negate(&self) -> Self {
        BitVector::negate(self)
    }

    fn null_vector(&self) -> Self {
        BitVector::null_vector(self)
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        Ok(BitVector::combine(self, other))
    }

    fn copy(&self) -> Self {
        BitVector::copy(self)
    }

    fn id(&self) -> Option<u64> {
        BitVector::id(self)
    }

    fn set_id(&mut self, id: Option<u64>) {
        BitVector::set_id(self, id)
    }
}
