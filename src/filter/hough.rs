//! Hough line-detection filter variant (unimplemented).

use crate::filter::Filter;
use crate::matrix::Matrix;
use crate::util::{EdgeMapError, EdgeMapResult};

/// Named extension point for line detection via a global transform.
///
/// No detection algorithm is specified for this variant; applying it fails
/// with [`EdgeMapError::NotImplemented`].
#[derive(Default)]
pub struct HoughFilter;

impl HoughFilter {
    /// Creates the filter.
    pub fn new() -> Self {
        Self
    }
}

impl Filter for HoughFilter {
    fn apply(&self, _matrix: &Matrix) -> EdgeMapResult<Matrix> {
        Err(EdgeMapError::NotImplemented("hough line detection"))
    }
}
