use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Dims, Interpolation};

fn small_cfg(frames: u32) -> RenderConfig {
    RenderConfig {
        frame_count: frames,
        frame_duration_secs: 0.1,
        source: Dims::new(8, 8).unwrap(),
        output: Dims::new(16, 16).unwrap(),
        interpolation: Interpolation::Nearest,
    }
}

#[test]
fn sink_receives_rows_in_order() {
    let cfg = small_cfg(10);
    let threading = RenderThreading {
        chunk_size: 3,
        ..RenderThreading::default()
    };
    let mut sink = InMemorySink::new();
    let stats = render_into_sink(&cfg, &threading, &mut sink).unwrap();

    assert_eq!(stats.frames, 10);
    assert_eq!(stats.chunks, 4);
    assert!(sink.is_finished());

    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (0..10).collect::<Vec<_>>());

    let sink_cfg = sink.config().unwrap();
    assert_eq!((sink_cfg.width, sink_cfg.height), (16, 16));
    assert_eq!(sink_cfg.frame_count, 10);
}

#[test]
fn frames_match_single_row_rendering() {
    let cfg = small_cfg(6);
    let frames = render_frames(&cfg, &RenderThreading::default()).unwrap();
    let triangle = generate(6).unwrap();
    for (row, frame) in triangle.rows().iter().zip(&frames) {
        assert_eq!(&render_row(row, &cfg).unwrap(), frame);
    }
}

#[test]
fn parallel_matches_sequential() {
    let cfg = small_cfg(24);
    let seq = render_frames(&cfg, &RenderThreading::default()).unwrap();
    let par = render_frames(
        &cfg,
        &RenderThreading {
            parallel: true,
            chunk_size: 5,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn rasterization_failure_aborts_before_end() {
    // Taller-than-wide rasters cannot be filled by short rows.
    let mut cfg = small_cfg(4);
    cfg.source = Dims::new(4, 8).unwrap();
    let mut sink = InMemorySink::new();
    let err = render_into_sink(&cfg, &RenderThreading::default(), &mut sink).unwrap_err();
    assert!(matches!(err, PascalError::RasterSizeMismatch { .. }));
    assert!(!sink.is_finished());
}

#[test]
fn invalid_config_fails_before_sink_begins() {
    let mut sink = InMemorySink::new();
    let err = render_into_sink(&small_cfg(0), &RenderThreading::default(), &mut sink).unwrap_err();
    assert!(matches!(err, PascalError::InvalidArgument(_)));
    assert!(sink.config().is_none());
}

#[test]
fn zero_threads_is_rejected() {
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames(&small_cfg(2), &threading).is_err());
}

#[test]
fn zero_chunk_size_still_renders() {
    let threading = RenderThreading {
        chunk_size: 0,
        ..RenderThreading::default()
    };
    let frames = render_frames(&small_cfg(3), &threading).unwrap();
    assert_eq!(frames.len(), 3);
}
