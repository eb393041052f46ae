use crate::foundation::core::Dims;
use crate::foundation::error::{PascalError, PascalResult};
use crate::raster::frame::Frame;
use crate::triangle::generate::Row;

/// Expand each entry into a column of exactly `width` cells, most significant digit first.
///
/// Non-digit characters are dropped, short entries are zero-filled on the left, and long entries
/// keep only their leading `width` digits. Any digit other than `0` is a lit cell.
pub fn expand_columns<S: AsRef<str>>(row: &[S], width: usize) -> Vec<u8> {
    let mut cells = Vec::with_capacity(row.len() * width);
    for entry in row {
        let digits: Vec<u8> = entry
            .as_ref()
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| u8::from(b != b'0'))
            .collect();

        if digits.len() >= width {
            cells.extend_from_slice(&digits[..width]);
        } else {
            cells.resize(cells.len() + (width - digits.len()), 0);
            cells.extend_from_slice(&digits);
        }
    }
    cells
}

/// Zero padding `(before, after)` applied around a row of `row_len` entries.
///
/// The gap is measured in entries and multiplied by the raster height, so it only balances the
/// frame exactly when width and height are equal.
pub fn center_padding(row_len: usize, dims: Dims) -> (usize, usize) {
    let width = dims.width as usize;
    let height = dims.height as usize;
    if row_len >= width {
        return (0, 0);
    }
    let gap = width - row_len;
    ((gap / 2) * height, gap.div_ceil(2) * height)
}

/// Start offset into the padded buffer when the frame overflows.
///
/// The offset is half the overflow of the *unpadded* buffer (which may be negative), moved
/// forward by half a column whenever it would not land on a column boundary, then truncated
/// toward zero. A small negative overflow is pulled back to a usable offset by that nudge; one
/// that stays negative is a [`PascalError::RasterSizeMismatch`].
pub fn overflow_offset(unpadded_len: usize, dims: Dims) -> PascalResult<usize> {
    let capacity = dims.cells();
    let width = dims.width as isize;
    let overflow = unpadded_len as isize - capacity as isize;

    // Twice the offset, so odd overflows and odd widths stay exact.
    let mut doubled = overflow;
    if width > 0 && overflow.rem_euclid(2 * width) != 0 {
        doubled += width;
    }
    usize::try_from(doubled / 2)
        .map_err(|_| PascalError::raster_size_mismatch(capacity, unpadded_len))
}

/// Map one row onto a `dims.width x dims.height` frame of on/off cells.
///
/// Fails with [`PascalError::InvalidArgument`] for zero dimensions and with
/// [`PascalError::RasterSizeMismatch`] when padding/truncation cannot yield exactly
/// `width * height` cells.
pub fn rasterize_digits<S: AsRef<str>>(row: &[S], dims: Dims) -> PascalResult<Frame> {
    dims.validate("raster dimensions")?;
    let capacity = dims.cells();

    let columns = expand_columns(row, dims.width as usize);
    let (before, after) = center_padding(row.len(), dims);

    let mut padded = Vec::with_capacity(before + columns.len() + after);
    padded.resize(before, 0);
    padded.extend_from_slice(&columns);
    padded.resize(padded.len() + after, 0);

    let start = if padded.len() > capacity {
        overflow_offset(columns.len(), dims)?
    } else {
        0
    };

    let available = padded.len().saturating_sub(start);
    if available < capacity {
        return Err(PascalError::raster_size_mismatch(capacity, available));
    }
    padded.drain(..start);
    padded.truncate(capacity);

    Frame::from_cells(dims, padded)
}

/// [`rasterize_digits`] over a generated [`Row`].
pub fn rasterize(row: &Row, dims: Dims) -> PascalResult<Frame> {
    rasterize_digits(&row.to_binary_strings(), dims)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/layout.rs"]
mod tests;
