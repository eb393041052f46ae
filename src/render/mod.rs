//! Triangle-to-animation pipeline.

/// Row rendering, sequencing and GIF output.
pub mod pipeline;
