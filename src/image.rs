//! Immutable image wrapper around one intensity matrix.

use crate::matrix::Matrix;

/// Decoded grayscale image.
///
/// Wraps exactly one intensity matrix and exposes only read access; filters
/// and codecs exchange `Image` values at the pipeline boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    matrix: Matrix,
}

impl Image {
    /// Creates an image from an intensity matrix.
    pub fn new(matrix: Matrix) -> Self {
        Self { matrix }
    }

    /// Returns a borrowed view of the intensity matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Consumes the image, returning its matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Returns the number of pixel rows.
    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    /// Returns the number of pixel columns.
    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }
}
