//! Convolution kernel with odd-by-odd dimension validation.

use crate::matrix::Matrix;
use crate::util::{EdgeMapError, EdgeMapResult};

/// Small fixed weight matrix used as the convolution operand.
///
/// Both dimensions of a non-empty kernel must be odd so the kernel has a
/// well-defined center cell. The empty kernel is admitted: convolving with
/// it is the documented degenerate case that yields an empty result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    weights: Matrix,
}

impl Kernel {
    /// Creates a kernel from a weight matrix, rejecting even dimensions.
    pub fn new(weights: Matrix) -> EdgeMapResult<Self> {
        if !weights.is_empty() && (weights.rows() % 2 == 0 || weights.cols() % 2 == 0) {
            return Err(EdgeMapError::EvenKernel {
                rows: weights.rows(),
                cols: weights.cols(),
            });
        }
        Ok(Self { weights })
    }

    /// Creates a 3x3 kernel from fixed weights.
    pub fn from_3x3(weights: [[i32; 3]; 3]) -> Self {
        let data = weights.into_iter().flatten().collect();
        Self {
            weights: Matrix::new(data, 3, 3).expect("3x3 buffer has 9 elements"),
        }
    }

    /// Returns the empty kernel.
    pub fn empty() -> Self {
        Self {
            weights: Matrix::empty(),
        }
    }

    /// Returns the number of kernel rows.
    pub fn rows(&self) -> usize {
        self.weights.rows()
    }

    /// Returns the number of kernel columns.
    pub fn cols(&self) -> usize {
        self.weights.cols()
    }

    /// Returns true if the kernel has no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the half-extent of the kernel rows (`⌊rows/2⌋`).
    pub fn half_rows(&self) -> usize {
        self.weights.rows() / 2
    }

    /// Returns the half-extent of the kernel columns (`⌊cols/2⌋`).
    pub fn half_cols(&self) -> usize {
        self.weights.cols() / 2
    }

    /// Returns the weight matrix.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }
}
