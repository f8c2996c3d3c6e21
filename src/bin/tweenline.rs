use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tweenline", version)]
struct Cli {
    /// Emit debug logs on stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and commit an animation document, reporting the first error.
    Check(DocArgs),
    /// Print the normalized motion queues and tempo table as JSON.
    Dump(DocArgs),
    /// Print the evaluated state of every shape at one tick as JSON.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct DocArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Tick to evaluate.
    #[arg(long)]
    tick: u64,
}

#[derive(serde::Serialize)]
struct ShapeDump {
    name: String,
    kind: tweenline::ShapeKind,
    motions: tweenline::MotionQueue,
}

#[derive(serde::Serialize)]
struct Dump {
    bounds: tweenline::Bounds,
    shapes: Vec<ShapeDump>,
    tempos: tweenline::TempoTable,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_state(path: &Path) -> anyhow::Result<tweenline::AnimationState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read animation '{}'", path.display()))?;
    let doc = tweenline::AnimationDoc::from_json_str(&text)
        .with_context(|| format!("parse animation '{}'", path.display()))?;
    let state = doc
        .build()
        .with_context(|| format!("build animation '{}'", path.display()))?;
    Ok(state)
}

fn cmd_check(args: DocArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let shapes = state.shapes_ordered();
    let mut motions = 0usize;
    for shape in &shapes {
        motions += state.motions_for(shape)?.len();
    }
    eprintln!(
        "ok: {} shapes, {} motions, {} tempos",
        shapes.len(),
        motions,
        state.tempos().len()
    );
    Ok(())
}

fn cmd_dump(args: DocArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let shapes = state
        .shapes_ordered()
        .into_iter()
        .map(|shape| {
            let motions = state.motions_for(&shape)?;
            Ok(ShapeDump {
                name: shape.name,
                kind: shape.kind,
                motions,
            })
        })
        .collect::<tweenline::TweenlineResult<Vec<_>>>()?;

    let dump = Dump {
        bounds: state.bounds(),
        shapes,
        tempos: state.tempos(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&dump).context("serialize dump")?
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let state = load_state(&args.in_path)?;
    let frame = tweenline::Evaluator::eval_tick(&state, tweenline::Tick(args.tick))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&frame).context("serialize frame")?
    );
    Ok(())
}
