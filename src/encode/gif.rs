use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::RowIndex;
use crate::foundation::error::{PascalError, PascalResult};
use crate::raster::frame::FrameLuma8;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Quantizer speed in `1..=30`; lower is slower and more accurate.
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for outputting a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            speed: 10,
        }
    }
}

/// Sink that encodes frames into an infinitely looping animated GIF.
///
/// Frames are encoded as they arrive into an in-memory buffer. The file only appears on disk in
/// `end`, written next to the destination and renamed into place, so a failed or abandoned run
/// never leaves a partial GIF behind.
pub struct GifSink {
    opts: GifSinkOpts,

    encoder: Option<GifEncoder<SharedBuffer>>,
    buffer: SharedBuffer,
    delay: Option<Delay>,
    cfg: Option<SinkConfig>,
    last_idx: Option<RowIndex>,
    frames_written: u64,
}

impl GifSink {
    /// Create a new sink targeting `opts.out_path`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            buffer: SharedBuffer::default(),
            delay: None,
            cfg: None,
            last_idx: None,
            frames_written: 0,
        }
    }

}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> PascalResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(PascalError::invalid_argument(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(PascalError::invalid_argument(format!(
                "gif frames are limited to {max}x{max}, got {}x{}",
                cfg.width,
                cfg.height,
                max = u16::MAX
            )));
        }
        if !cfg.frame_duration_secs.is_finite() || cfg.frame_duration_secs <= 0.0 {
            return Err(PascalError::invalid_argument(format!(
                "frame duration must be positive, got {}",
                cfg.frame_duration_secs
            )));
        }
        if !(1..=30).contains(&self.opts.speed) {
            return Err(PascalError::invalid_argument(format!(
                "gif speed must be in 1..=30, got {}",
                self.opts.speed
            )));
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(PascalError::invalid_argument(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        self.buffer = SharedBuffer::default();
        let mut encoder = GifEncoder::new_with_speed(self.buffer.clone(), self.opts.speed);
        encoder.set_repeat(Repeat::Infinite)?;

        self.delay = Some(Delay::from_saturating_duration(Duration::from_secs_f64(
            cfg.frame_duration_secs,
        )));
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: RowIndex, frame: &FrameLuma8) -> PascalResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| PascalError::encoding("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(PascalError::encoding(
                "gif sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(PascalError::invalid_argument(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let delay = self
            .delay
            .ok_or_else(|| PascalError::encoding("gif sink not started"))?;
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(PascalError::encoding("gif sink is already finalized"));
        };

        let rgba = DynamicImage::ImageLuma8(frame.to_gray_image()?).into_rgba8();
        encoder.encode_frame(image::Frame::from_parts(rgba, 0, 0, delay))?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> PascalResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| PascalError::encoding("gif sink not started"))?;
        let expected = self
            .cfg
            .as_ref()
            .map(|cfg| cfg.frame_count)
            .ok_or_else(|| PascalError::encoding("gif sink not started"))?;
        if self.frames_written == 0 {
            return Err(PascalError::encoding("gif sink received no frames"));
        }
        if self.frames_written != expected {
            return Err(PascalError::encoding(format!(
                "gif sink received {} of {expected} frames",
                self.frames_written
            )));
        }
        // Dropping the encoder writes the GIF trailer into the buffer.
        drop(encoder);

        let bytes = self.buffer.take()?;
        write_atomically(&self.opts.out_path, &bytes)?;

        tracing::debug!(
            path = %self.opts.out_path.display(),
            frames = self.frames_written,
            bytes = bytes.len(),
            "wrote gif"
        );
        self.cfg = None;
        Ok(())
    }
}

/// Growable byte buffer shared between the sink and the encoder that writes into it.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn take(&self) -> PascalResult<Vec<u8>> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| PascalError::encoding("gif buffer lock poisoned"))?;
        Ok(std::mem::take(&mut *guard))
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| std::io::Error::other("gif buffer lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Write `bytes` to a sibling temp file, then rename it over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> PascalResult<()> {
    ensure_parent_dir(path).map_err(into_encoding)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| {
            PascalError::invalid_argument(format!(
                "output path '{}' has no file name",
                path.display()
            ))
        })?
        .to_string_lossy();
    let tmp = path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()));

    let guard = TempFileGuard(Some(tmp.clone()));
    let write = || -> anyhow::Result<()> {
        let mut file = std::fs::File::create(&tmp)
            .with_context(|| format!("create temp file '{}'", tmp.display()))?;
        file.write_all(bytes)
            .with_context(|| format!("write temp file '{}'", tmp.display()))?;
        file.sync_all()
            .with_context(|| format!("sync temp file '{}'", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("move output into place at '{}'", path.display()))?;
        Ok(())
    };
    write().map_err(|e| PascalError::encoding(format!("{e:#}")))?;
    guard.disarm();
    Ok(())
}

/// Report IO failures while publishing an artifact as [`PascalError::Encoding`].
pub(crate) fn into_encoding(err: PascalError) -> PascalError {
    match err {
        PascalError::Other(e) => PascalError::encoding(format!("{e:#}")),
        other => other,
    }
}

/// Removes a temporary file on drop unless disarmed.
struct TempFileGuard(Option<PathBuf>);

impl TempFileGuard {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> PascalResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
