use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "facerig", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default idle frame as a PNG.
    FirstFrame(FirstFrameArgs),
    /// Drive the tick loop headlessly and write frames as PNGs.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct AvatarArgs {
    /// Directory holding the sprite files.
    #[arg(long)]
    resources: PathBuf,

    /// Working resolution width in pixels.
    #[arg(long)]
    width: u32,

    /// Working resolution height in pixels.
    #[arg(long)]
    height: u32,

    /// Avatar config JSON. Defaults to the built-in sprite set.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FirstFrameArgs {
    #[command(flatten)]
    avatar: AvatarArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    avatar: AvatarArgs,

    /// Number of ticks to run.
    #[arg(long)]
    frames: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Write every N-th frame only.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Scripted input, applied before the given tick: `TICK:state=NAME` or `TICK:talking=BOOL`.
    #[arg(long = "event")]
    events: Vec<ScriptEvent>,

    /// Log throughput every N ticks.
    #[arg(long, default_value_t = 300)]
    log_every: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ScriptAction {
    State(String),
    Talking(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ScriptEvent {
    tick: u64,
    action: ScriptAction,
}

impl FromStr for ScriptEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tick, action) = s
            .split_once(':')
            .ok_or_else(|| format!("expected TICK:KEY=VALUE, got '{s}'"))?;
        let tick = tick
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid tick '{tick}': {e}"))?;
        let (key, value) = action
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE after tick, got '{action}'"))?;
        let action = match key.trim() {
            "state" => ScriptAction::State(value.trim().to_owned()),
            "talking" => ScriptAction::Talking(
                value
                    .trim()
                    .parse::<bool>()
                    .map_err(|e| format!("invalid talking flag '{value}': {e}"))?,
            ),
            other => return Err(format!("unknown event key '{other}'")),
        };
        Ok(Self { tick, action })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::FirstFrame(args) => cmd_first_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_avatar(args: &AvatarArgs) -> anyhow::Result<(facerig::Resolution, facerig::AvatarConfig)> {
    let resolution = facerig::Resolution::new(args.width, args.height)?;
    let config = match &args.config {
        Some(path) => facerig::AvatarConfig::from_json_file(path)
            .with_context(|| format!("load avatar config '{}'", path.display()))?,
        None => facerig::AvatarConfig::default(),
    };
    let sprites = config.sprite_files();
    tracing::info!(
        %resolution,
        resources = %args.resources.display(),
        sprites = sprites.len(),
        "loading avatar"
    );
    tracing::debug!(files = ?sprites, "avatar sprite files");
    Ok((resolution, config))
}

fn write_png(path: &Path, frame: &facerig::PixelBuffer) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_first_frame(args: FirstFrameArgs) -> anyhow::Result<()> {
    let (resolution, config) = load_avatar(&args.avatar)?;
    let frame =
        facerig::static_first_frame_with_config(&args.avatar.resources, resolution, &config)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.every > 0, "--every must be > 0");
    let (resolution, config) = load_avatar(&args.avatar)?;
    let mut generator =
        facerig::FrameGenerator::with_config(resolution, &args.avatar.resources, &config)?;
    let controls = generator.controls();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut events = args.events.clone();
    events.sort_by_key(|e| e.tick);
    let mut pending = events.iter().peekable();

    let started = Instant::now();
    let mut window_start = Instant::now();
    let mut written = 0u64;
    for tick in 0..args.frames {
        while let Some(event) = pending.next_if(|e| e.tick <= tick) {
            match &event.action {
                ScriptAction::State(name) => {
                    if let Err(e) = controls.set_state(name) {
                        tracing::warn!(tick, error = %e, "ignoring scripted state change");
                    }
                }
                ScriptAction::Talking(talking) => controls.set_talking(*talking),
            }
        }

        let frame = generator.next_frame()?;
        if tick % args.every == 0 {
            write_png(&args.out_dir.join(format!("frame_{tick:05}.png")), frame)?;
            written += 1;
        }

        if args.log_every > 0 && (tick + 1) % args.log_every == 0 {
            let secs = window_start.elapsed().as_secs_f64().max(1e-9);
            tracing::info!(
                tick,
                animation = %controls.active(),
                fps = (args.log_every as f64 / secs).round(),
                "tick loop throughput"
            );
            window_start = Instant::now();
        }
    }

    tracing::info!(
        frames = args.frames,
        written,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "render finished"
    );
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}
