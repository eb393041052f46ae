use crate::foundation::core::RowIndex;
use crate::foundation::error::PascalResult;
use crate::raster::frame::FrameLuma8;

/// Configuration provided to a [`FrameSink`] at the start of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Display time of each frame, in seconds.
    pub frame_duration_secs: f64,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming rendered frames in row order.
///
/// Ordering contract: `push_frame` is called in strictly increasing [`RowIndex`] order, starting
/// at row 0. `end` is only called after every frame was pushed successfully; a sink dropped
/// without `end` must not leave an output artifact behind.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PascalResult<()>;
    /// Push one frame in strictly increasing row order.
    fn push_frame(&mut self, idx: RowIndex, frame: &FrameLuma8) -> PascalResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PascalResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(RowIndex, FrameLuma8)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(RowIndex, FrameLuma8)] {
        &self.frames
    }

    /// Take the captured frames, dropping their indices.
    pub fn into_frames(self) -> Vec<FrameLuma8> {
        self.frames.into_iter().map(|(_, f)| f).collect()
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PascalResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: RowIndex, frame: &FrameLuma8) -> PascalResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PascalResult<()> {
        self.finished = true;
        Ok(())
    }
}
