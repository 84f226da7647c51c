//! Physical data types
//!
//! This module provides a flexible container for physical quantities
//! that can be scalars, vectors, or matrices depending on the problem's
//! dimensionality.
//!
//! The container is what lets a smoothing function accept "a number or an
//! array" and hand back the same kind of thing: a `Scalar` stays a `Scalar`,
//! a radial `Vector` stays a `Vector` of the same length.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array, ArrayD, IxDyn};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::numerics::parallel_threshold;

/// Physical data container supporting scalar to n-dimensional arrays
///
/// # Storage Types
///
/// - **Scalar**: Single uniform value (0D)
/// - **Vector**: 1D array (radial profile on the disk grid)
/// - **Matrix**: 2D array (radius × dust species, radius × azimuth)
/// - **Array**: 3D+ multidimensional array (general n-D grids)
///
/// # Examples
///
/// ```rust
/// use snowline_rs::physics::PhysicalData;
///
/// // Radial temperature profile with 4 cells
/// let temperature = PhysicalData::from_vec(vec![300.0, 200.0, 150.0, 100.0]);
/// assert_eq!(temperature.len(), 4);
///
/// // Single evaluation point
/// let offset = PhysicalData::from_scalar(0.0);
/// assert!(offset.is_scalar());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalData {
    /// Scalar value (0D)
    ///
    /// Use for: single evaluation points, uniform quantities
    Scalar(f64),

    /// Vector (1D)
    ///
    /// Use for: radial profiles (radius grid, gas temperature)
    Vector(DVector<f64>),

    /// Matrix (2D)
    ///
    /// Use for:
    /// - radius + dust mass bins: A[radius, mass]
    /// - 2D disk grids: A[radius, azimuth]
    Matrix(DMatrix<f64>),

    /// Multidimensional array (3D+)
    ///
    /// Index convention follows the grid: geometric dimensions first,
    /// then species or parameters.
    Array(ArrayD<f64>),
}

impl PhysicalData {

    // ======================================= constructors =======================================

    /// Create from scalar
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Create from vector
    pub fn from_vec(vector: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(vector))
    }

    /// Create from DVector
    pub fn from_vector(vector: DVector<f64>) -> Self {
        Self::Vector(vector)
    }

    /// Create from DMatrix
    pub fn from_matrix(matrix: DMatrix<f64>) -> Self {
        Self::Matrix(matrix)
    }

    /// Create from array
    pub fn from_array(array: ArrayD<f64>) -> Self {
        Self::Array(array)
    }

    /// Create uniform vector
    pub fn uniform_vector(size: usize, value: f64) -> Self {
        Self::Vector(DVector::from_element(size, value))
    }

    /// Create uniform matrix
    pub fn uniform_matrix(rows: usize, columns: usize, value: f64) -> Self {
        Self::Matrix(DMatrix::from_element(rows, columns, value))
    }

    /// Create uniform n-D array from shape
    pub fn uniform_array(shape: &[usize], value: f64) -> Self {
        Self::Array(Array::from_elem(IxDyn(shape), value))
    }

    // ========================================== Queries ==========================================

    /// Check data is scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check data is a vector
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// Check data is a matrix
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    /// Check data is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Get data dimension
    ///
    /// Returns: 0 (scalar), 1 (vector), 2 (matrix), n (array)
    pub fn ndim(&self) -> usize {
        match self {
            PhysicalData::Scalar(_) => 0,
            PhysicalData::Vector(_) => 1,
            PhysicalData::Matrix(_) => 2,
            PhysicalData::Array(a) => a.ndim(),
        }
    }

    /// Get shape as a vector
    pub fn shape(&self) -> Vec<usize> {
        match self {
            PhysicalData::Scalar(_) => vec![],
            PhysicalData::Vector(v) => vec![v.len()],
            PhysicalData::Matrix(m) => vec![m.nrows(), m.ncols()],
            PhysicalData::Array(a) => a.shape().to_vec(),
        }
    }

    /// Get length (number of elements)
    pub fn len(&self) -> usize {
        match self {
            PhysicalData::Scalar(_) => 1,
            PhysicalData::Vector(v) => v.len(),
            PhysicalData::Matrix(m) => m.len(),
            PhysicalData::Array(a) => a.len(),
        }
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ======================================== Extractions ========================================

    /// Extract as a scalar (panic if not)
    pub fn as_scalar(&self) -> f64 {
        match self {
            PhysicalData::Scalar(value) => *value,
            _ => panic!("Not a scalar value"),
        }
    }

    /// Try to extract as a scalar
    pub fn try_as_scalar(&self) -> Option<f64> {
        match self {
            PhysicalData::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Extract as a DVector (panic if not)
    pub fn as_vector(&self) -> &DVector<f64> {
        match self {
            PhysicalData::Vector(value) => value,
            _ => panic!("Not a vector value"),
        }
    }

    /// Try to extract as a DVector
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            PhysicalData::Vector(value) => Some(value),
            _ => None,
        }
    }

    /// Extract as a DMatrix (panic if not)
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        match self {
            PhysicalData::Matrix(value) => value,
            _ => panic!("Not a matrix value"),
        }
    }

    /// Try to extract as a DMatrix
    pub fn try_as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            PhysicalData::Matrix(value) => Some(value),
            _ => None,
        }
    }

    /// Extract as an array (panic if not)
    pub fn as_array(&self) -> &ArrayD<f64> {
        match self {
            PhysicalData::Array(value) => value,
            _ => panic!("Not an array value"),
        }
    }

    /// Try to extract as an array
    pub fn try_as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            PhysicalData::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Flatten all values into a `Vec<f64>`
    ///
    /// Matrices are flattened in nalgebra's column-major order, arrays in
    /// ndarray's logical order.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            PhysicalData::Scalar(value) => vec![*value],
            PhysicalData::Vector(value) => value.as_slice().to_vec(),
            PhysicalData::Matrix(value) => value.as_slice().to_vec(),
            PhysicalData::Array(value) => value.iter().copied().collect(),
        }
    }

    /// Iterate over every value regardless of storage
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            PhysicalData::Scalar(value) => Box::new(std::iter::once(*value)),
            PhysicalData::Vector(value) => Box::new(value.iter().copied()),
            PhysicalData::Matrix(value) => Box::new(value.iter().copied()),
            PhysicalData::Array(value) => Box::new(value.iter().copied()),
        }
    }

    // ====================================== Apply functions ======================================

    /// Apply a function f to every element in place
    ///
    /// Vectors and matrices larger than [`parallel_threshold()`] are processed
    /// with rayon when the `parallel` feature is enabled.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            PhysicalData::Scalar(value) => *value = f(*value),
            PhysicalData::Vector(value) => apply_slice(value.as_mut_slice(), &f),
            PhysicalData::Matrix(value) => apply_slice(value.as_mut_slice(), &f),
            PhysicalData::Array(value) => value.mapv_inplace(f),
        }
    }

    /// Apply a function f to every element and return the result
    ///
    /// The result has the same variant and shape as `self`.
    ///
    /// ```rust
    /// use snowline_rs::physics::PhysicalData;
    ///
    /// let doubled = PhysicalData::from_scalar(2.0).map(|x| 2.0 * x);
    /// assert_eq!(doubled, PhysicalData::Scalar(4.0));
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let mut mapped = self.clone();
        mapped.apply(f);
        mapped
    }
}

fn apply_slice<F>(values: &mut [f64], f: &F)
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        values.par_iter_mut().for_each(|x| *x = f(*x));
        #[cfg(not(feature = "parallel"))]
        values.iter_mut().for_each(|x| *x = f(*x));
    } else {
        values.iter_mut().for_each(|x| *x = f(*x));
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Add for PhysicalData {
    type Output = PhysicalData;
    fn add(self, rhs: Self) -> Self::Output {
        use PhysicalData::*;
        match (self, rhs) {

            // Addition with scalar

            (Scalar(x), Scalar(y)) => Scalar(x + y),
            (Scalar(x), Vector(y)) |
            (Vector(y), Scalar(x)) => Vector(y.map(|e| e + x)),
            (Scalar(x), Matrix(y)) |
            (Matrix(y), Scalar(x)) => Matrix(y.map(|e| e + x)),
            (Scalar(x), Array(y)) |
            (Array(y), Scalar(x)) => Array(&y + x),

            // Addition with vectors

            (Vector(x), Vector(y)) => {
                assert_eq!(x.len(), y.len(), "Vector length must match");
                Vector(x + y)
            }

            // Addition with matrices

            (Matrix(x), Matrix(y)) => {
                assert_eq!(x.shape(), y.shape(), "Matrices dimensions must match");
                Matrix(x + y)
            }

            // Addition with arrays

            (Array(x), Array(y)) => {
                assert_eq!(x.shape(), y.shape(), "Arrays dimensions must match");
                Array(&x + &y)
            }

            _ => panic!("Cannot add different PhysicalData types other than with scalar"),
        }
    }
}

impl std::ops::Sub for PhysicalData {
    type Output = PhysicalData;
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs * -1.0
    }
}

impl std::ops::Sub<f64> for PhysicalData {
    type Output = PhysicalData;
    fn sub(self, offset: f64) -> Self::Output {
        self.map(|x| x - offset)
    }
}

impl std::ops::Mul<f64> for PhysicalData {
    type Output = PhysicalData;
    fn mul(self, scalar: f64) -> Self::Output {
        match self {
            PhysicalData::Scalar(x) => PhysicalData::Scalar(x * scalar),
            PhysicalData::Vector(x) => PhysicalData::Vector(x * scalar),
            PhysicalData::Matrix(x) => PhysicalData::Matrix(x * scalar),
            PhysicalData::Array(x) => PhysicalData::Array(&x * scalar),
        }
    }
}

impl std::ops::Mul<PhysicalData> for f64 {
    type Output = PhysicalData;
    fn mul(self, rhs: PhysicalData) -> Self::Output {
        rhs * self
    }
}

// ======================== Display ============================

impl fmt::Display for PhysicalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalData::Scalar(value) => write!(f, "Scalar ({})", value),
            PhysicalData::Vector(value) => write!(f, "Vector [{}]", value.len()),
            PhysicalData::Matrix(value) => write!(f, "Matrix [{} * {}]", value.nrows(), value.ncols()),
            PhysicalData::Array(value) => {
                let str_shape = value.shape()
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" * ");
                write!(f, "Array [{}]", str_shape)
            }
        }
    }
}

// ==================== Tests ====================
