use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Dims, Interpolation};
use crate::foundation::error::{PascalError, PascalResult};

/// Default display time of each frame, in seconds.
pub const DEFAULT_FRAME_DURATION_SECS: f64 = 0.5;
/// Default raster size (cells per binary column x per-column multiplier).
pub const DEFAULT_SOURCE_DIMS: Dims = Dims {
    width: 100,
    height: 100,
};
/// Default output frame size in pixels.
pub const DEFAULT_OUTPUT_DIMS: Dims = Dims {
    width: 400,
    height: 400,
};

/// Everything that shapes one animation.
///
/// JSON form (only `frame_count` is required):
///
/// ```json
/// { "frame_count": 64, "frame_duration_secs": 0.25,
///   "source": { "width": 64, "height": 64 },
///   "output": { "width": 512, "height": 512 },
///   "interpolation": "smooth" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Number of triangle rows, one frame each.
    pub frame_count: u32,
    /// Display time of each frame, in seconds.
    #[serde(default = "default_frame_duration_secs")]
    pub frame_duration_secs: f64,
    /// Raster size each row is mapped onto.
    #[serde(default = "default_source")]
    pub source: Dims,
    /// Size of the encoded frames.
    #[serde(default = "default_output")]
    pub output: Dims,
    /// Resampling filter for the raster-to-output resize.
    #[serde(default)]
    pub interpolation: Interpolation,
}

fn default_frame_duration_secs() -> f64 {
    DEFAULT_FRAME_DURATION_SECS
}

fn default_source() -> Dims {
    DEFAULT_SOURCE_DIMS
}

fn default_output() -> Dims {
    DEFAULT_OUTPUT_DIMS
}

impl RenderConfig {
    /// Config with default timing and sizes for `frame_count` rows.
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count,
            frame_duration_secs: DEFAULT_FRAME_DURATION_SECS,
            source: DEFAULT_SOURCE_DIMS,
            output: DEFAULT_OUTPUT_DIMS,
            interpolation: Interpolation::Nearest,
        }
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(s: &str) -> PascalResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| PascalError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> PascalResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject non-positive counts, durations and sizes.
    pub fn validate(&self) -> PascalResult<()> {
        if self.frame_count == 0 {
            return Err(PascalError::invalid_argument("frame_count must be >= 1"));
        }
        if !self.frame_duration_secs.is_finite() || self.frame_duration_secs <= 0.0 {
            return Err(PascalError::invalid_argument(format!(
                "frame_duration_secs must be positive, got {}",
                self.frame_duration_secs
            )));
        }
        self.source.validate("source dimensions")?;
        self.output.validate("output dimensions")?;
        Ok(())
    }

    /// Output path used when none is given: `pascals_triangle_{frame_count}.gif`.
    pub fn default_file_name(&self) -> String {
        format!("pascals_triangle_{}.gif", self.frame_count)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
