use std::path::PathBuf;

use rayon::prelude::*;

use crate::{
    config::RenderConfig,
    encode::gif::{GifSink, GifSinkOpts},
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::RowIndex,
    foundation::error::{PascalError, PascalResult},
    raster::frame::{FrameLuma8, scale_frame},
    raster::layout::rasterize,
    triangle::generate::{Row, Triangle, generate},
};

/// Rasterize and scale a single row with the sizes and filter from `cfg`.
pub fn render_row(row: &Row, cfg: &RenderConfig) -> PascalResult<FrameLuma8> {
    let frame = rasterize(row, cfg.source)?;
    scale_frame(&frame, cfg.output, cfg.interpolation)
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Frames rendered and handed to the sink.
    pub frames: u64,
    /// Chunks scheduled.
    pub chunks: u64,
}

/// Render every row of a `cfg.frame_count`-row triangle, in row order.
pub fn render_frames(
    cfg: &RenderConfig,
    threading: &RenderThreading,
) -> PascalResult<Vec<FrameLuma8>> {
    let mut sink = crate::encode::sink::InMemorySink::new();
    render_into_sink(cfg, threading, &mut sink)?;
    Ok(sink.into_frames())
}

/// Render all rows and stream them into `sink` in strictly increasing row order.
///
/// The config is validated before any work starts. On error `sink.end()` is never called, so a
/// sink that only publishes in `end` leaves nothing behind.
#[tracing::instrument(
    skip_all,
    fields(frame_count = cfg.frame_count, parallel = threading.parallel)
)]
pub fn render_into_sink(
    cfg: &RenderConfig,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> PascalResult<RenderStats> {
    cfg.validate()?;
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let triangle = generate(cfg.frame_count as usize)?;
    sink.begin(SinkConfig {
        width: cfg.output.width,
        height: cfg.output.height,
        frame_duration_secs: cfg.frame_duration_secs,
        frame_count: triangle.len() as u64,
    })?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut stats = RenderStats::default();
    let mut chunk_start = 0usize;
    while chunk_start < triangle.len() {
        let chunk_end = (chunk_start + chunk_size).min(triangle.len());
        let frames = match pool.as_ref() {
            Some(pool) => render_chunk_parallel(&triangle, chunk_start..chunk_end, cfg, pool)?,
            None => render_chunk_sequential(&triangle, chunk_start..chunk_end, cfg)?,
        };

        for (offset, frame) in frames.iter().enumerate() {
            sink.push_frame(RowIndex((chunk_start + offset) as u64), frame)?;
        }
        tracing::debug!(
            start = chunk_start,
            end = chunk_end,
            "rendered chunk"
        );

        stats.frames += frames.len() as u64;
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    sink.end()?;
    Ok(stats)
}

/// Options for [`render_to_gif`].
#[derive(Clone, Debug)]
pub struct RenderToGifOpts {
    /// Whether to overwrite `out_path` if it already exists.
    pub overwrite: bool,
    /// Render threading/chunking configuration.
    pub threading: RenderThreading,
}

impl Default for RenderToGifOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Where the animation was written and what it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    /// Path of the finished GIF.
    pub out_path: PathBuf,
    /// Rendering counters.
    pub stats: RenderStats,
}

/// Render the whole triangle into an infinitely looping GIF at `out_path`.
///
/// Either the complete animation is written or no file is created.
pub fn render_to_gif(
    cfg: &RenderConfig,
    out_path: impl Into<PathBuf>,
    opts: &RenderToGifOpts,
) -> PascalResult<RenderReport> {
    let out_path = out_path.into();
    let mut sink_opts = GifSinkOpts::new(&out_path);
    sink_opts.overwrite = opts.overwrite;
    let mut sink = GifSink::new(sink_opts);

    let stats = render_into_sink(cfg, &opts.threading, &mut sink)?;
    tracing::info!(
        path = %out_path.display(),
        frames = stats.frames,
        "animation written"
    );
    Ok(RenderReport { out_path, stats })
}

fn render_chunk_sequential(
    triangle: &Triangle,
    rows: std::ops::Range<usize>,
    cfg: &RenderConfig,
) -> PascalResult<Vec<FrameLuma8>> {
    triangle.rows()[rows]
        .iter()
        .map(|row| render_row(row, cfg))
        .collect()
}

fn render_chunk_parallel(
    triangle: &Triangle,
    rows: std::ops::Range<usize>,
    cfg: &RenderConfig,
    pool: &rayon::ThreadPool,
) -> PascalResult<Vec<FrameLuma8>> {
    // Indexed collect keeps row order regardless of which worker finishes first.
    let rendered = pool.install(|| {
        triangle.rows()[rows]
            .par_iter()
            .map(|row| render_row(row, cfg))
            .collect::<Vec<_>>()
    });

    let mut frames = Vec::with_capacity(rendered.len());
    for item in rendered {
        frames.push(item?);
    }
    Ok(frames)
}

fn build_thread_pool(threads: Option<usize>) -> PascalResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PascalError::invalid_argument(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PascalError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
