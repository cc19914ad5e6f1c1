//! Pure matrix operations: convolution and elementwise algebra.
//!
//! Every operation borrows its inputs and returns a new owned matrix, so the
//! pipeline never mutates shared state. Convolution zero-pads at borders by
//! skipping out-of-range terms instead of materializing a padded copy.

use crate::matrix::{Kernel, Matrix};
use crate::util::{EdgeMapError, EdgeMapResult};

/// Computes one output row of the convolution.
///
/// Shared by the scalar and row-parallel paths so they stay cell-for-cell
/// identical.
pub(crate) fn convolve_row(kernel: &Kernel, matrix: &Matrix, i: usize) -> Vec<i32> {
    let rows = matrix.rows() as isize;
    let cols = matrix.cols();
    let half_rows = kernel.half_rows() as isize;
    let half_cols = kernel.half_cols() as isize;
    let weights = kernel.weights();

    let mut out = Vec::with_capacity(cols);
    for j in 0..cols {
        let mut acc = 0i32;
        for m in -half_rows..=half_rows {
            let src_row = i as isize + m;
            if src_row < 0 || src_row >= rows {
                continue;
            }
            let img_row = matrix.row(src_row as usize).expect("row within bounds");
            let kernel_row = weights
                .row((m + half_rows) as usize)
                .expect("kernel row within bounds");
            for n in -half_cols..=half_cols {
                let src_col = j as isize + n;
                if src_col < 0 || src_col >= cols as isize {
                    continue;
                }
                acc += kernel_row[(n + half_cols) as usize] * img_row[src_col as usize];
            }
        }
        out.push(acc);
    }
    out
}

/// Convolves `matrix` with `kernel`, producing a same-size output.
///
/// For every cell `(i, j)` the result is the weighted sum of the kernel
/// neighborhood centered there; terms falling outside the matrix contribute
/// zero. An empty kernel or empty matrix yields the empty matrix, which is a
/// defined degenerate case rather than an error.
pub fn convolve(kernel: &Kernel, matrix: &Matrix) -> Matrix {
    if kernel.is_empty() || matrix.is_empty() {
        return Matrix::empty();
    }
    let rows: Vec<Vec<i32>> = (0..matrix.rows())
        .map(|i| convolve_row(kernel, matrix, i))
        .collect();
    Matrix::from_row_buffers(rows, matrix.cols())
}

/// Elementwise addition of two same-shaped matrices.
pub fn sum(a: &Matrix, b: &Matrix) -> EdgeMapResult<Matrix> {
    if !a.same_shape(b) {
        return Err(EdgeMapError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::new(data, a.rows(), a.cols())
}

/// Elementwise squaring.
pub fn square(matrix: &Matrix) -> Matrix {
    let data = matrix.as_slice().iter().map(|x| x * x).collect();
    Matrix::new(data, matrix.rows(), matrix.cols()).expect("shape is unchanged")
}

/// Elementwise `floor(sqrt(x))`, failing on the first negative cell.
pub fn integer_sqrt(matrix: &Matrix) -> EdgeMapResult<Matrix> {
    let cols = matrix.cols();
    let mut data = Vec::with_capacity(matrix.as_slice().len());
    for (idx, &value) in matrix.as_slice().iter().enumerate() {
        if value < 0 {
            return Err(EdgeMapError::SqrtOfNegative {
                row: idx / cols,
                col: idx % cols,
                value,
            });
        }
        data.push(isqrt(value));
    }
    Matrix::new(data, matrix.rows(), cols)
}

/// Returns a matrix with the row order reversed top-to-bottom.
///
/// Used to correct bottom-up raster storage into top-down order; applying it
/// twice returns the original matrix.
pub fn reverse_rows(matrix: &Matrix) -> Matrix {
    let rows: Vec<Vec<i32>> = (0..matrix.rows())
        .rev()
        .map(|i| matrix.row(i).expect("row within bounds").to_vec())
        .collect();
    Matrix::from_row_buffers(rows, matrix.cols())
}

/// Exact integer square root for non-negative inputs.
///
/// Starts from the float estimate and adjusts, since `f64::sqrt` can land on
/// the wrong side of an integer boundary near perfect squares.
fn isqrt(value: i32) -> i32 {
    debug_assert!(value >= 0);
    let v = value as u64;
    let mut r = (value as f64).sqrt() as u64;
    while r * r > v {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= v {
        r += 1;
    }
    r as i32
}
