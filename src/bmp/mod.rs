//! Minimal bitmap container decoder.
//!
//! Consumes the fixed-layout subset of the BMP format this pipeline cares
//! about: a little-endian `i32` width at byte 0x12, height at byte 0x16, and
//! an uncompressed 8-bit-per-pixel plane starting at byte 0x36 with rows
//! stored bottom-up. Header fields are parsed into an explicit [`BmpHeader`]
//! with the buffer length validated before every read, so a truncated or
//! nonsensical file surfaces as a structured error instead of an
//! out-of-bounds access.

use crate::image::Image;
use crate::matrix::{ops, Matrix};
use crate::trace::{trace_event, trace_span};
use crate::util::{EdgeMapError, EdgeMapResult};
use std::fs;
use std::path::Path;

/// Byte offset of the little-endian `i32` width field.
const WIDTH_OFFSET: usize = 0x12;
/// Byte offset of the little-endian `i32` height field.
const HEIGHT_OFFSET: usize = 0x16;
/// Byte offset of the first pixel; everything before it is header.
const PIXEL_PLANE_OFFSET: usize = 0x36;

/// Parsed bitmap header fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
}

impl BmpHeader {
    /// Parses and validates the header portion of a bitmap buffer.
    ///
    /// Rejects buffers shorter than the 0x36-byte header and non-positive
    /// width or height.
    pub fn parse(bytes: &[u8]) -> EdgeMapResult<Self> {
        if bytes.len() < PIXEL_PLANE_OFFSET {
            return Err(EdgeMapError::BufferTooSmall {
                needed: PIXEL_PLANE_OFFSET,
                got: bytes.len(),
            });
        }
        let width = read_i32_le(bytes, WIDTH_OFFSET);
        let height = read_i32_le(bytes, HEIGHT_OFFSET);
        if width <= 0 || height <= 0 {
            return Err(EdgeMapError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        Ok(Self {
            width: width as usize,
            height: height as usize,
        })
    }

    /// Returns the buffer length the pixel plane requires.
    fn required_len(&self) -> EdgeMapResult<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|v| v.checked_add(PIXEL_PLANE_OFFSET))
            .ok_or(EdgeMapError::InvalidDimensions {
                width: self.width as i64,
                height: self.height as i64,
            })
    }
}

/// Decodes a bitmap byte buffer into a top-down grayscale image.
///
/// Rows in the pixel plane are stored bottom-up, so the assembled matrix is
/// row-reversed before wrapping. Pixel rows use a `width` stride.
pub fn decode(bytes: &[u8]) -> EdgeMapResult<Image> {
    let _span = trace_span!("bmp_decode", len = bytes.len()).entered();

    let header = BmpHeader::parse(bytes)?;
    let needed = header.required_len()?;
    if bytes.len() < needed {
        return Err(EdgeMapError::BufferTooSmall {
            needed,
            got: bytes.len(),
        });
    }
    trace_event!("bmp_header", width = header.width, height = header.height);

    let mut data = Vec::with_capacity(header.width * header.height);
    for i in 0..header.height {
        let start = PIXEL_PLANE_OFFSET + i * header.width;
        let row = &bytes[start..start + header.width];
        data.extend(row.iter().map(|&byte| i32::from(byte)));
    }
    let bottom_up = Matrix::new(data, header.height, header.width)?;
    Ok(Image::new(ops::reverse_rows(&bottom_up)))
}

/// Reads a bitmap file from disk and decodes it.
pub fn load<P: AsRef<Path>>(path: P) -> EdgeMapResult<Image> {
    let bytes = fs::read(path).map_err(|err| EdgeMapError::Io {
        reason: err.to_string(),
    })?;
    decode(&bytes)
}

fn read_i32_le(bytes: &[u8], offset: usize) -> i32 {
    let field: [u8; 4] = bytes[offset..offset + 4]
        .try_into()
        .expect("offset within validated header");
    i32::from_le_bytes(field)
}
