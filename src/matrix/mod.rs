//! Intensity matrices and convolution kernels.
//!
//! `Matrix` is a rectangular, non-jagged 2D grid of `i32` intensities stored
//! as a flat row-major buffer with explicit `rows`/`cols` bookkeeping. Cells
//! are `i32` rather than `u8` because convolution and squaring overflow an
//! 8-bit range long before the final magnitude is taken. Matrices are value
//! types: every operation consumes borrowed inputs and returns a new owned
//! matrix, so no stage of the pipeline aliases another's storage.

use crate::util::{EdgeMapError, EdgeMapResult};

mod kernel;
pub mod ops;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use kernel::Kernel;

/// Owned rectangular grid of pixel intensities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// The buffer length must be exactly `rows * cols`. A zero-dimension
    /// matrix with an empty buffer is valid; it is the degenerate input of
    /// [`ops::convolve`].
    pub fn new(data: Vec<i32>, rows: usize, cols: usize) -> EdgeMapResult<Self> {
        let needed = rows
            .checked_mul(cols)
            .ok_or(EdgeMapError::InvalidDimensions {
                width: cols as i64,
                height: rows as i64,
            })?;
        if data.len() < needed {
            return Err(EdgeMapError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(EdgeMapError::InvalidDimensions {
                width: cols as i64,
                height: rows as i64,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from nested rows, rejecting ragged input.
    ///
    /// An empty outer vector produces the 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> EdgeMapResult<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(EdgeMapError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Self::new(data, row_count, cols)
    }

    /// Creates an all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> EdgeMapResult<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(EdgeMapError::InvalidDimensions {
                width: cols as i64,
                height: rows as i64,
            })?;
        Ok(Self {
            data: vec![0; len],
            rows,
            cols,
        })
    }

    /// Returns the 0x0 matrix.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns true if `other` has exactly the same shape.
    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Returns the cell at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Returns row `row` as a contiguous slice.
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Returns the flat row-major backing buffer.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub(crate) fn from_row_buffers(rows: Vec<Vec<i32>>, cols: usize) -> Self {
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Self {
            data,
            rows: row_count,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_short_buffer() {
        let err = Matrix::new(vec![1, 2, 3], 2, 2).err().unwrap();
        assert_eq!(err, EdgeMapError::BufferTooSmall { needed: 4, got: 3 });
    }

    #[test]
    fn new_rejects_long_buffer() {
        let err = Matrix::new(vec![0; 5], 2, 2).err().unwrap();
        assert_eq!(
            err,
            EdgeMapError::InvalidDimensions {
                width: 2,
                height: 2,
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).err().unwrap();
        assert_eq!(
            err,
            EdgeMapError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn accessors_match_row_major_layout() {
        let m = Matrix::new(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1).unwrap(), &[4, 5, 6]);
        assert_eq!(m.get(0, 2), Some(3));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn zeros_validates_dimensions() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.as_slice(), &[0; 6]);

        let err = Matrix::zeros(usize::MAX, 2).err().unwrap();
        assert!(matches!(err, EdgeMapError::InvalidDimensions { .. }));
    }

    #[test]
    fn empty_matrix_is_valid() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m, Matrix::empty());
    }
}
