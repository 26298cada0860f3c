use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser, Debug)]
#[command(name = "scrollmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every section of a scene at one scroll position.
    Sample(SampleArgs),
    /// Evaluate a scene over a range of scroll positions, one JSON line per step.
    Sweep(SweepArgs),
    /// Print a built-in preset scene as JSON.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in pixels (defaults to the scene's viewport).
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels (defaults to the scene's viewport).
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Document scroll position in pixels.
    #[arg(long, allow_negative_numbers = true)]
    scroll: f64,

    #[command(flatten)]
    viewport: ViewportArgs,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First scroll position.
    #[arg(long, allow_negative_numbers = true)]
    from: f64,

    /// Last scroll position (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    to: f64,

    /// Distance between samples.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    #[command(flatten)]
    viewport: ViewportArgs,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name.
    name: String,
}

const MAX_SWEEP_STEPS: f64 = 1_000_000.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn load(in_path: &Path) -> anyhow::Result<scrollmotion::Scene> {
    scrollmotion::Scene::from_path(in_path)
        .with_context(|| format!("load scene '{}'", in_path.display()))
}

fn viewport_for(
    scene: &scrollmotion::Scene,
    args: &ViewportArgs,
) -> anyhow::Result<scrollmotion::Viewport> {
    let base = scene.viewport();
    let vp = scrollmotion::Viewport::new(
        args.width.unwrap_or(base.width),
        args.height.unwrap_or(base.height),
    )
    .context("invalid viewport")?;
    Ok(vp)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = load(&args.in_path)?;
    let vp = viewport_for(&scene, &args.viewport)?;
    anyhow::ensure!(args.scroll.is_finite(), "--scroll must be finite");

    let mut out = std::io::stdout().lock();
    for sample in scene.sample(args.scroll, vp) {
        serde_json::to_writer(&mut out, &sample).context("write sample")?;
        writeln!(out).context("write sample")?;
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let scene = load(&args.in_path)?;
    let vp = viewport_for(&scene, &args.viewport)?;
    anyhow::ensure!(
        args.from.is_finite() && args.to.is_finite(),
        "--from and --to must be finite"
    );
    anyhow::ensure!(
        args.step.is_finite() && args.step > 0.0,
        "--step must be finite and > 0"
    );
    let steps = ((args.to - args.from).abs() / args.step).floor();
    anyhow::ensure!(
        steps <= MAX_SWEEP_STEPS,
        "sweep of {steps} steps is too large"
    );
    let dir = if args.to >= args.from { 1.0 } else { -1.0 };
    tracing::debug!(steps, from = args.from, to = args.to, "sweep");

    let mut out = std::io::stdout().lock();
    for i in 0..=(steps as u64) {
        let y = args.from + dir * (i as f64) * args.step;
        let line = serde_json::json!({
            "scroll_y": y,
            "sections": scene.sample(y, vp),
        });
        serde_json::to_writer(&mut out, &line).context("write sweep line")?;
        writeln!(out).context("write sweep line")?;
    }
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let v = scrollmotion_std::presets::preset_value(&args.name).with_context(|| {
        format!(
            "unknown preset '{}' (expected one of: {})",
            args.name,
            scrollmotion_std::presets::NAMES.join(", ")
        )
    })?;
    // only validated presets are printed
    scrollmotion_std::presets::preset_scene(&args.name)
        .with_context(|| format!("validate preset '{}'", args.name))?;
    let s = serde_json::to_string_pretty(&v).context("serialize preset")?;
    println!("{s}");
    Ok(())
}
