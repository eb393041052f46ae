use crate::foundation::error::{PascalError, PascalResult};

/// Zero-based row index into the triangle; also the frame index in the animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RowIndex(pub u64);

/// Width/height pair in pixels (or raster cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dims {
    /// Horizontal size.
    pub width: u32,
    /// Vertical size.
    pub height: u32,
}

impl Dims {
    /// Build dimensions, rejecting zero on either axis.
    pub fn new(width: u32, height: u32) -> PascalResult<Self> {
        let dims = Self { width, height };
        dims.validate("dimensions")?;
        Ok(dims)
    }

    /// Fail with [`PascalError::InvalidArgument`] when either axis is zero.
    pub fn validate(self, what: &str) -> PascalResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PascalError::invalid_argument(format!(
                "{what} must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Total cell count (`width * height`).
    pub fn cells(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Resampling filter used when scaling a raster up to the output size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Hard pixel edges.
    #[default]
    Nearest,
    /// Lanczos (window 3) smoothing.
    Smooth,
}

impl Interpolation {
    /// Pick the mode from a "smooth" flag.
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth { Self::Smooth } else { Self::Nearest }
    }

    pub(crate) fn filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Smooth => image::imageops::FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
