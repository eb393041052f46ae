//! Row-to-raster mapping.
//!
//! A row of binary entries becomes a `width x height` grid of on/off cells (see [`layout`]),
//! which is then turned into an 8-bit grayscale image, rotated so the least significant bit sits
//! at the bottom, and scaled to the output size (see [`frame`]).

/// Raster frames and image-side transforms.
pub mod frame;
/// Column expansion, centering and overflow truncation.
pub mod layout;
