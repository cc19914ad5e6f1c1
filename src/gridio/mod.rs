//! Plain-text matrix grid codec.
//!
//! The format is one header line `"<rows> <cols>"` followed by `rows` lines
//! of `cols` space-separated integers. Integers round-trip exactly, so a
//! write-then-read reproduces the matrix bit-for-bit. The `0 0` header is
//! valid and denotes the empty matrix.

use crate::image::Image;
use crate::matrix::Matrix;
use crate::util::{EdgeMapError, EdgeMapResult};
use std::fs;
use std::path::Path;

fn malformed(reason: impl Into<String>) -> EdgeMapError {
    EdgeMapError::MalformedGrid {
        reason: reason.into(),
    }
}

/// Parses a text grid into an image.
pub fn parse_grid(text: &str) -> EdgeMapResult<Image> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| malformed("missing header line"))?;
    let mut fields = header.split_whitespace();
    let rows: usize = fields
        .next()
        .ok_or_else(|| malformed("missing row count"))?
        .parse()
        .map_err(|_| malformed(format!("invalid row count in header {header:?}")))?;
    let cols: usize = fields
        .next()
        .ok_or_else(|| malformed("missing column count"))?
        .parse()
        .map_err(|_| malformed(format!("invalid column count in header {header:?}")))?;
    if fields.next().is_some() {
        return Err(malformed(format!("trailing fields in header {header:?}")));
    }
    let cells = rows
        .checked_mul(cols)
        .ok_or_else(|| malformed(format!("dimensions {rows}x{cols} overflow")))?;

    // The header is untrusted; cap the pre-allocation so an absurd but
    // well-formed header fails on the missing rows, not on the allocator.
    let mut data = Vec::with_capacity(cells.min(1 << 16));
    for i in 0..rows {
        let line = lines
            .next()
            .ok_or_else(|| malformed(format!("expected {rows} rows, got {i}")))?;
        let mut count = 0usize;
        for field in line.split_whitespace() {
            let value: i32 = field
                .parse()
                .map_err(|_| malformed(format!("invalid cell {field:?} in row {i}")))?;
            data.push(value);
            count += 1;
        }
        if count != cols {
            return Err(malformed(format!(
                "row {i} has {count} columns, expected {cols}"
            )));
        }
    }
    if lines.any(|line| !line.trim().is_empty()) {
        return Err(malformed("trailing content after last row"));
    }

    let matrix = Matrix::new(data, rows, cols)?;
    Ok(Image::new(matrix))
}

/// Formats an image as a text grid.
pub fn format_grid(image: &Image) -> String {
    let matrix = image.matrix();
    let mut out = format!("{} {}\n", matrix.rows(), matrix.cols());
    for i in 0..matrix.rows() {
        let row = matrix.row(i).expect("row within bounds");
        let fields: Vec<String> = row.iter().map(|value| value.to_string()).collect();
        out.push_str(&fields.join(" "));
        out.push('\n');
    }
    out
}

/// Reads and parses a text grid file.
pub fn read_grid<P: AsRef<Path>>(path: P) -> EdgeMapResult<Image> {
    let text = fs::read_to_string(path).map_err(|err| EdgeMapError::Io {
        reason: err.to_string(),
    })?;
    parse_grid(&text)
}

/// Writes an image to a text grid file.
pub fn write_grid<P: AsRef<Path>>(path: P, image: &Image) -> EdgeMapResult<()> {
    fs::write(path, format_grid(image)).map_err(|err| EdgeMapError::Io {
        reason: err.to_string(),
    })
}
