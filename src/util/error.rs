//! Error types for edgemap.

use thiserror::Error;

/// Result alias for edgemap operations.
pub type EdgeMapResult<T> = std::result::Result<T, EdgeMapError>;

/// Errors that can occur while decoding, filtering, or serializing images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeMapError {
    /// A byte buffer is shorter than the header or pixel plane requires.
    #[error("buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A bitmap header carries a non-positive width or height.
    #[error("invalid dimensions: width {width}, height {height}")]
    InvalidDimensions { width: i64, height: i64 },
    /// A matrix was constructed from rows of unequal length.
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A non-empty convolution kernel has an even dimension.
    #[error("kernel dimensions must be odd: got {rows}x{cols}")]
    EvenKernel { rows: usize, cols: usize },
    /// An elementwise operation received differently shaped matrices.
    #[error("dimension mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    /// Integer square root of a negative cell value.
    #[error("square root of negative value {value} at ({row}, {col})")]
    SqrtOfNegative { row: usize, col: usize, value: i32 },
    /// A text grid does not conform to the `"rows cols"` + rows format.
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },
    /// An underlying file operation failed.
    #[error("i/o error: {reason}")]
    Io { reason: String },
    /// Placeholder for unfinished filter variants.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
