use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use pascal_gif::{Dims, Interpolation, RenderConfig, RenderThreading, RenderToGifOpts, RowIndex};

#[derive(Parser, Debug)]
#[command(
    name = "pascal-gif",
    version,
    about = "Render Pascal's triangle in binary as a looping GIF"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the animation as a GIF, one frame per row.
    Render(RenderArgs),
    /// Render a single row as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct SizeArgs {
    /// Raster size each row is mapped onto (default 100 100).
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pixel_dim: Option<Vec<u32>>,

    /// Output frame size in pixels (default 400 400).
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    frame_dim: Option<Vec<u32>>,

    /// Smooth edges when upscaling (Lanczos instead of nearest neighbour).
    #[arg(long, visible_alias = "interpol", default_value_t = false)]
    smooth: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Total number of frames, i.e. triangle rows (e.g. 120).
    #[arg(long, visible_alias = "frames")]
    num_frames: Option<u32>,

    /// Seconds each frame is shown (default 0.5).
    #[arg(long, visible_alias = "frame-rate")]
    frame_duration: Option<f64>,

    #[command(flatten)]
    size: SizeArgs,

    /// JSON render config; command-line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output GIF path (default `pascals_triangle_<frames>.gif`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Row index (0-based).
    #[arg(long)]
    row: u32,

    #[command(flatten)]
    size: SizeArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = match (&args.config, args.num_frames) {
        (Some(path), _) => RenderConfig::from_path(path)?,
        (None, Some(n)) => RenderConfig::new(n),
        (None, None) => anyhow::bail!("--num-frames is required unless --config is given"),
    };
    if let Some(n) = args.num_frames {
        cfg.frame_count = n;
    }
    if let Some(secs) = args.frame_duration {
        cfg.frame_duration_secs = secs;
    }
    apply_sizes(&mut cfg, &args.size)?;
    cfg.validate()?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(cfg.default_file_name()));
    let opts = RenderToGifOpts {
        overwrite: !args.no_overwrite,
        threading: RenderThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
    };

    let report = pascal_gif::render_to_gif(&cfg, &out, &opts)
        .with_context(|| format!("render '{}'", out.display()))?;
    eprintln!("wrote {}", report.out_path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let rows = args
        .row
        .checked_add(1)
        .context("--row is too large")?;
    let mut cfg = RenderConfig::new(rows);
    apply_sizes(&mut cfg, &args.size)?;
    cfg.validate()?;

    let triangle = pascal_gif::generate(rows as usize)?;
    let row = triangle
        .row(RowIndex(u64::from(args.row)))
        .context("row out of range")?;
    let frame = pascal_gif::render_row(row, &cfg)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn apply_sizes(cfg: &mut RenderConfig, size: &SizeArgs) -> anyhow::Result<()> {
    if let Some(dim) = &size.pixel_dim {
        cfg.source = dims_arg(dim, "--pixel-dim")?;
    }
    if let Some(dim) = &size.frame_dim {
        cfg.output = dims_arg(dim, "--frame-dim")?;
    }
    if size.smooth {
        cfg.interpolation = Interpolation::Smooth;
    }
    Ok(())
}

fn dims_arg(values: &[u32], flag: &str) -> anyhow::Result<Dims> {
    let [width, height] = values else {
        anyhow::bail!("{flag} takes exactly two values");
    };
    Dims::new(*width, *height).with_context(|| format!("invalid {flag}"))
}
