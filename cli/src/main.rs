//! Host binary for the two-knob sketch engine: replays recorded knob scripts
//! and previews, exports, or submits the resulting drawing.

mod script;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use sketch::consts::{COARSE_STEP, FINE_STEP};
use sketch::engine::{Action, SketchEngine};
use sketch::geom::Rect;
use sketch::input::RotationSample;
use sketch::render::Bitmap;
use uplink::SubmitClient;

use crate::script::ScriptEvent;

/// ASCII preview raster size, columns × rows.
const PREVIEW_COLS: u32 = 64;
const PREVIEW_ROWS: u32 = 32;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script line {line}: {source}")]
    BadScriptLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("script line {line} out of order: {source}")]
    OutOfOrder {
        line: usize,
        #[source]
        source: sketch::engine::EngineError,
    },
    #[error("submit failed: {0}")]
    Submit(#[from] uplink::SubmitError),
}

#[derive(Parser, Debug)]
#[command(name = "sketch-cli", about = "Two-knob sketch toy script replayer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a knob script and preview or export the drawing.
    Replay(ReplayArgs),
    /// Replay a knob script and submit the snapshot for translation.
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
struct DrawOpts {
    /// Path to a JSONL knob script.
    script: PathBuf,

    /// Drawing surface edge length in surface units.
    #[arg(long, default_value_t = 100.0)]
    surface: f64,

    /// Use the coarse 5-unit pen step instead of the fine 1-unit step.
    #[arg(long)]
    coarse: bool,
}

#[derive(Debug, Args)]
struct ReplayArgs {
    #[command(flatten)]
    draw: DrawOpts,

    /// Write the drawing as a binary PGM file instead of printing an ASCII
    /// preview. Rendered at one pixel per surface unit.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SubmitArgs {
    #[command(flatten)]
    draw: DrawOpts,

    /// Translation service endpoint.
    #[arg(long, env = "SKETCH_SUBMIT_URL", default_value = "http://127.0.0.1:7000/")]
    endpoint: String,

    /// Write the returned replacement image to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Replay(args) => {
            let engine = replay_script(&args.draw)?;
            if let Some(path) = args.out {
                let edge = px_edge(args.draw.surface);
                write_pgm(&engine.snapshot(edge, edge), &path)?;
                println!("wrote {}", path.display());
            } else {
                print!("{}", ascii_preview(&engine.snapshot(PREVIEW_COLS, PREVIEW_ROWS)));
            }
            println!(
                "{} strokes, cursor {:?}",
                engine.doc().stroke_count(),
                engine.doc().cursor()
            );
            Ok(())
        }
        Command::Submit(args) => {
            let engine = replay_script(&args.draw)?;
            let edge = px_edge(args.draw.surface);
            let snapshot = engine.snapshot(edge, edge).for_upload();

            let client = SubmitClient::new(args.endpoint);
            let translation = client.submit(&snapshot).await?;
            println!("predicted: {}", translation.predicted);
            if let Some(path) = args.out {
                std::fs::write(&path, &translation.image)?;
                println!("wrote {} ({} bytes)", path.display(), translation.image.len());
            }
            Ok(())
        }
    }
}

/// One pixel per surface unit, endpoints inclusive.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn px_edge(surface: f64) -> u32 {
    (surface.max(1.0).round() as u32) + 1
}

/// Drive a fresh engine through every event in the script file.
fn replay_script(opts: &DrawOpts) -> Result<SketchEngine, CliError> {
    let bounds = Rect::new(0.0, 0.0, opts.surface, opts.surface);
    let magnitude = if opts.coarse { COARSE_STEP } else { FINE_STEP };
    let mut engine = SketchEngine::with_magnitude(bounds, magnitude);

    let file = File::open(&opts.script)?;
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: ScriptEvent = serde_json::from_str(&line)
            .map_err(|source| CliError::BadScriptLine { line: idx + 1, source })?;
        match event {
            ScriptEvent::Down { knob } => engine.on_drag_start(knob),
            ScriptEvent::Move { knob, angle } => {
                let action = engine
                    .on_drag_move(RotationSample { knob, angle_radians: angle })
                    .map_err(|source| CliError::OutOfOrder { line: idx + 1, source })?;
                if action == Action::PenBlocked {
                    tracing::debug!(line = idx + 1, "pen blocked at the surface edge");
                }
            }
            ScriptEvent::Up => engine.on_drag_end(),
            ScriptEvent::Clear => {
                engine.clear();
            }
        }
    }
    Ok(engine)
}

/// Render the bitmap as rows of `#` (ink) and `.` (paper).
fn ascii_preview(bitmap: &Bitmap) -> String {
    let mut out = String::with_capacity(((bitmap.width + 1) * bitmap.height) as usize);
    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            out.push(if bitmap.get(x, y) < 0x80 { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Write the bitmap as a binary PGM (P5) file.
fn write_pgm(bitmap: &Bitmap, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "P5\n{} {}\n255\n", bitmap.width, bitmap.height)?;
    file.write_all(&bitmap.pixels)?;
    Ok(())
}
