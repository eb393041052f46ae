use std::path::Path;

use anyhow::Context as _;
use image::GrayImage;

use crate::foundation::core::{Dims, Interpolation};
use crate::foundation::error::{PascalError, PascalResult};

/// A `width x height` grid of on/off cells derived from one row.
///
/// Cells are row-major with `width` cells per line; each line is one entry's binary column
/// before rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    dims: Dims,
    cells: Vec<u8>,
}

impl Frame {
    /// Wrap a cell buffer, which must hold exactly `dims.cells()` values in `{0, 1}`.
    pub fn from_cells(dims: Dims, cells: Vec<u8>) -> PascalResult<Self> {
        if cells.len() != dims.cells() {
            return Err(PascalError::raster_size_mismatch(dims.cells(), cells.len()));
        }
        if cells.iter().any(|&c| c > 1) {
            return Err(PascalError::invalid_argument(
                "frame cells must be 0 or 1",
            ));
        }
        Ok(Self { dims, cells })
    }

    /// Raster dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Borrow the flat cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of lit cells.
    pub fn lit(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Grayscale image of the raw raster (0 -> black, 1 -> white), not yet rotated.
    pub fn to_gray_image(&self) -> PascalResult<GrayImage> {
        let data = self.cells.iter().map(|&c| c * 255).collect();
        GrayImage::from_raw(self.dims.width, self.dims.height, data).ok_or_else(|| {
            PascalError::raster_size_mismatch(self.dims.cells(), self.cells.len())
        })
    }
}

/// A rotated, scaled 8-bit grayscale frame ready for encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLuma8 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Luma8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameLuma8 {
    /// Borrow the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Copy into an [`image::GrayImage`].
    pub fn to_gray_image(&self) -> PascalResult<GrayImage> {
        GrayImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            PascalError::encoding(format!(
                "frame buffer holds {} bytes, expected {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> PascalResult<()> {
        let write = || -> PascalResult<()> {
            crate::encode::gif::ensure_parent_dir(path)?;
            image::save_buffer_with_format(
                path,
                &self.data,
                self.width,
                self.height,
                image::ColorType::L8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
            Ok(())
        };
        write().map_err(crate::encode::gif::into_encoding)
    }
}

/// Rotate a raster 90 degrees clockwise and resize it to `output`.
///
/// After rotation each binary column runs top to bottom with the least significant bit last.
pub fn scale_frame(
    frame: &Frame,
    output: Dims,
    interpolation: Interpolation,
) -> PascalResult<FrameLuma8> {
    output.validate("output dimensions")?;
    let raw = frame.to_gray_image()?;
    let rotated = image::imageops::rotate90(&raw);
    let scaled = image::imageops::resize(
        &rotated,
        output.width,
        output.height,
        interpolation.filter(),
    );
    Ok(FrameLuma8 {
        width: scaled.width(),
        height: scaled.height(),
        data: scaled.into_raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
