//! Encoding sinks.
//!
//! Sinks consume rendered frames in row order and are driven by the render pipeline.

/// Animated GIF output.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
