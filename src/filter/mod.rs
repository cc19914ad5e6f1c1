//! Image filters behind a single-capability trait.

use crate::matrix::Matrix;
use crate::util::EdgeMapResult;

pub mod hough;
pub mod sobel;

pub use hough::HoughFilter;
pub use sobel::SobelFilter;

/// Capability shared by all filters: map one intensity matrix to another.
pub trait Filter {
    /// Applies the filter, producing a same-size output matrix.
    fn apply(&self, matrix: &Matrix) -> EdgeMapResult<Matrix>;
}
