/// Convenience result type used across the crate.
pub type PascalResult<T> = Result<T, PascalError>;

/// Top-level error taxonomy used by the triangle, raster and encode APIs.
#[derive(thiserror::Error, Debug)]
pub enum PascalError {
    /// Non-positive frame count, duration or dimensions, or otherwise unusable input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Centering/truncation arithmetic could not produce a full raster.
    #[error("raster size mismatch: expected {expected} cells, got {actual}")]
    RasterSizeMismatch {
        /// Required cell count (`width * height`).
        expected: usize,
        /// Cell count actually available after truncation.
        actual: usize,
    },

    /// The image/animation collaborator could not produce the output artifact.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PascalError {
    /// Build a [`PascalError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`PascalError::RasterSizeMismatch`] value.
    pub fn raster_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::RasterSizeMismatch { expected, actual }
    }

    /// Build a [`PascalError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`PascalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<image::ImageError> for PascalError {
    fn from(err: image::ImageError) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
