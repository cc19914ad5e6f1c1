//! Sobel gradient-magnitude filter.
//!
//! Convolves with the horizontal and vertical Sobel kernel pair and combines
//! the directional responses into `floor(sqrt(gx² + gy²))` per cell. No
//! thresholding or non-maximum suppression is applied: the output is a raw
//! magnitude map, not a binarized edge mask.

use crate::filter::Filter;
use crate::matrix::{ops, Kernel, Matrix};
use crate::trace::{trace_event, trace_span};
use crate::util::EdgeMapResult;

const SOBEL_KERNEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Edge detector approximating gradient magnitude with 3x3 kernels.
pub struct SobelFilter {
    kx: Kernel,
    ky: Kernel,
    parallel: bool,
}

impl SobelFilter {
    /// Creates a sequential Sobel filter.
    pub fn new() -> Self {
        Self {
            kx: Kernel::from_3x3(SOBEL_KERNEL_X),
            ky: Kernel::from_3x3(SOBEL_KERNEL_Y),
            parallel: false,
        }
    }

    /// Enables or disables row-parallel convolution.
    ///
    /// Has no effect unless the `rayon` feature is compiled in; results are
    /// identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[cfg(feature = "rayon")]
    fn convolve(&self, kernel: &Kernel, matrix: &Matrix) -> Matrix {
        if self.parallel {
            crate::matrix::rayon::convolve_par(kernel, matrix)
        } else {
            ops::convolve(kernel, matrix)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn convolve(&self, kernel: &Kernel, matrix: &Matrix) -> Matrix {
        // Flag is accepted but inert without the rayon feature.
        let _ = self.parallel;
        ops::convolve(kernel, matrix)
    }
}

impl Default for SobelFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for SobelFilter {
    fn apply(&self, matrix: &Matrix) -> EdgeMapResult<Matrix> {
        let _span = trace_span!(
            "sobel_apply",
            rows = matrix.rows(),
            cols = matrix.cols(),
            parallel = self.parallel
        )
        .entered();

        let gx = self.convolve(&self.kx, matrix);
        let gy = self.convolve(&self.ky, matrix);
        let magnitude = ops::integer_sqrt(&ops::sum(&ops::square(&gx), &ops::square(&gy))?)?;
        trace_event!(
            "sobel_done",
            rows = magnitude.rows(),
            cols = magnitude.cols()
        );
        Ok(magnitude)
    }
}
