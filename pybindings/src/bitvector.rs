use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use bitfeature::{BitVector, VectorError};
use rand::{rngs::SmallRng, SeedableRng};

fn to_py_err(err: VectorError) -> PyErr {
    match err {
        VectorError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

#[pyclass(name = "BitVector")]
#[derive(Clone)]
pub struct PyBitVector {
    pub(crate) inner: BitVector,
}

#[pymethods]
impl PyBitVector {
    /// Creates a new BitVector of the given dimensionality initialized to zero
    #[new]
    pub fn new(dimensionality: usize) -> Self {
        PyBitVector {
            inner: BitVector::zeros(dimensionality),
        }
    }

    /// Creates a new BitVector of the given dimensionality initialized to zero
    #[staticmethod]
    pub fn zeros(dimensionality: usize) -> Self {
        Self::new(dimensionality)
    }

    /// Creates a BitVector from a list of bools
    #[staticmethod]
    pub fn from_list(data: Vec<bool>) -> Self {
        PyBitVector {
            inner: BitVector::from_bools(&data),
        }
    }

    /// Creates a BitVector with the given bits set. Fails if an index does not fit the
    /// dimensionality.
    #[staticmethod]
    pub fn from_indices(indices: Vec<usize>, dimensionality: usize) -> PyResult<Self> {
        let inner = BitVector::from_indices(&indices, dimensionality).map_err(to_py_err)?;
        Ok(PyBitVector { inner })
    }

    /// Creates a new random BitVector of the given dimensionality
    #[staticmethod]
    #[pyo3(signature = (dimensionality, seed=None))]
    pub fn random(dimensionality: usize, seed: Option<u64>) -> Self {
        let mut rng = if let Some(s) = seed {
            SmallRng::seed_from_u64(s)
        } else {
            SmallRng::from_os_rng()
        };

        PyBitVector {
            inner: BitVector::random(&mut rng, dimensionality),
        }
    }

    #[getter]
    pub fn dimensionality(&self) -> usize {
        self.inner.dimensionality()
    }

    #[getter]
    pub fn id(&self) -> Option<u64> {
        self.inner.id()
    }

    #[setter]
    pub fn set_id(&mut self, id: Option<u64>) {
        self.inner.set_id(id);
    }

    /// Gets the bit for a 1-based dimension (reads storage bit `dimension`)
    pub fn value(&self, dimension: usize) -> PyResult<bool> {
        self.inner
            .value(dimension)
            .map(|b| b.bit_value())
            .map_err(to_py_err)
    }

    /// Converts the vector to a list of bools
    pub fn values(&self) -> Vec<bool> {
        self.inner.values().into_iter().map(bool::from).collect()
    }

    /// Gets the bit at 0-based position `index`
    pub fn is_set(&self, index: usize) -> bool {
        self.inner.is_set(index)
    }

    /// Checks that the lowest `len(indices)` bits are set
    pub fn are_set(&self, indices: Vec<usize>) -> bool {
        self.inner.are_set(&indices)
    }

    /// Indices of the set bits, ascending
    pub fn set_bits(&self) -> Vec<usize> {
        self.inner.set_bits()
    }

    /// Number of set bits
    pub fn cardinality(&self) -> usize {
        self.inner.cardinality()
    }

    /// The bits as a list of floats (1.0 or 0.0)
    pub fn vector(&self) -> Vec<f64> {
        self.inner.vector()
    }

    pub fn negate(&self) -> Self {
        self.inner.negate().into()
    }

    pub fn null_vector(&self) -> Self {
        self.inner.null_vector().into()
    }

    pub fn scale(&self, k: f64) -> Self {
        self.inner.scale(k).into()
    }

    /// XOR with `other`; the result has the dimensionality of `other`
    pub fn combine(&self, other: &PyBitVector) -> Self {
        self.inner.combine(&other.inner).into()
    }

    /// Returns a copy of the vector, including its id
    pub fn copy(&self) -> Self {
        self.inner.copy().into()
    }

    /// XOR operation using the ^ operator
    pub fn __xor__(&self, other: &PyBitVector) -> Self {
        self.combine(other)
    }

    /// Vector equality comparison
    pub fn __eq__(&self, other: &PyBitVector) -> bool {
        self.inner == other.inner
    }

    /// Vector inequality comparison
    pub fn __ne__(&self, other: &PyBitVector) -> bool {
        !self.__eq__(other)
    }

    /// Returns the dimensionality (for len() function)
    pub fn __len__(&self) -> usize {
        self.inner.dimensionality()
    }

    /// String representation of the vector
    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    /// Python representation of the vector
    pub fn __repr__(&self) -> String {
        format!("BitVector(dimensionality={})", self.inner.dimensionality())
    }
}

impl From<BitVector> for PyBitVector {
    fn from(inner: BitVector) -> Self {
        PyBitVector { inner }
    }
}

impl From<PyBitVector> for BitVector {
    fn from(py_vector: PyBitVector) -> Self {
        py_vector.inner
    }
}
