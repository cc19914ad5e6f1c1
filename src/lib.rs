//! Edgemap decodes grayscale bitmaps, applies Sobel edge detection via 2D
//! convolution, and serializes the result as a plain text grid.
//!
//! The pipeline is a single offline pass: bytes are decoded into an
//! intensity [`Matrix`], filtered through the [`Filter`] capability, and
//! written back out. All stages are pure functions over owned values, with
//! optional row-parallel convolution via the `rayon` feature.

pub mod bmp;
pub mod filter;
pub mod gridio;
pub mod image;
pub mod matrix;
pub(crate) mod trace;
pub mod util;

pub use filter::{Filter, HoughFilter, SobelFilter};
pub use image::Image;
pub use matrix::{Kernel, Matrix};
pub use util::{EdgeMapError, EdgeMapResult};

pub use matrix::ops::{convolve, integer_sqrt, reverse_rows, square, sum};
