//! Pascal's triangle, one row per frame, rendered in binary as a looping GIF.
//!
//! Each entry of a row is written as a binary number and becomes one column of pixels, with the
//! least significant bit at the bottom; lit pixels are ones. The pipeline is:
//!
//! 1. **Generate**: `n -> Triangle` (rows of arbitrary-width binary entries)
//! 2. **Rasterize**: `Row -> Frame` (fixed `width x height` on/off cells with centering and
//!    overflow truncation)
//! 3. **Scale**: `Frame -> FrameLuma8` (rotate so bits run vertically, resize to output size)
//! 4. **Encode**: stream frames in row order into a [`FrameSink`], e.g. [`GifSink`]
//!
//! Everything up to encoding is pure; the GIF only appears on disk once it is complete.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Render configuration and defaults.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Row rasterization and scaling.
pub mod raster;
/// Rendering pipeline.
pub mod render;
/// Triangle generation.
pub mod triangle;

pub use crate::foundation::core::{Dims, Interpolation, RowIndex};
pub use crate::foundation::error::{PascalError, PascalResult};

pub use crate::config::{
    DEFAULT_FRAME_DURATION_SECS, DEFAULT_OUTPUT_DIMS, DEFAULT_SOURCE_DIMS, RenderConfig,
};
pub use crate::encode::gif::{GifSink, GifSinkOpts, ensure_parent_dir};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::raster::frame::{Frame, FrameLuma8, scale_frame};
pub use crate::raster::layout::{
    center_padding, expand_columns, overflow_offset, rasterize, rasterize_digits,
};
pub use crate::render::pipeline::{
    RenderReport, RenderStats, RenderThreading, RenderToGifOpts, render_frames, render_into_sink,
    render_row, render_to_gif,
};
pub use crate::triangle::binary::BinaryEntry;
pub use crate::triangle::generate::{Row, Triangle, generate};
