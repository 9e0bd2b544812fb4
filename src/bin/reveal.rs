use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the scroll hero at a single progress value.
    Scroll(ScrollArgs),
    /// Evaluate the scroll hero at evenly spaced progress values.
    Sweep(SweepArgs),
    /// Print the declarative entrance choreography.
    Choreography(ConfigArgs),
    /// Print the resolved entrance schedule against the intro page.
    Schedule(ConfigArgs),
    /// Fit the logo mask path into its container.
    Logo(LogoArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Optional config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Scroll progress; clamped to [0, 1].
    #[arg(long)]
    progress: f64,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of samples, including both ends.
    #[arg(long, default_value_t = 21)]
    samples: usize,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct LogoArgs {
    /// Container rectangle as `x,y,width,height`.
    #[arg(long)]
    container: String,

    /// SVG path data of the logo mask.
    #[arg(long = "path-d")]
    path_d: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scroll(args) => cmd_scroll(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Choreography(args) => cmd_choreography(args),
        Command::Schedule(args) => cmd_schedule(args),
        Command::Logo(args) => cmd_logo(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<reveal::RevealConfig> {
    let cfg = match path {
        Some(p) => reveal::RevealConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => reveal::RevealConfig::default(),
    };
    cfg.validate().context("validate config")?;
    Ok(cfg)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.config.as_deref())?;
    let frame = reveal::ScrollFrame::evaluate(&cfg.scroll, reveal::Progress::new(args.progress));
    print_json(&frame)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.samples < 2 {
        anyhow::bail!("--samples must be at least 2, got {}", args.samples);
    }
    let cfg = load_config(args.config.config.as_deref())?;
    let last = (args.samples - 1) as f64;
    let frames: Vec<reveal::ScrollFrame> = (0..args.samples)
        .map(|i| reveal::ScrollFrame::evaluate(&cfg.scroll, reveal::Progress::new(i as f64 / last)))
        .collect();
    print_json(&frames)
}

fn cmd_choreography(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    print_json(&cfg.intro)
}

fn cmd_schedule(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let timeline = reveal::Timeline::build(&cfg.intro, &reveal::Scene::intro_page())
        .context("build entrance timeline")?;
    print_json(&timeline)
}

#[derive(serde::Serialize)]
struct LogoOut {
    transform: String,
    fit: reveal::LogoFit,
}

fn cmd_logo(args: LogoArgs) -> anyhow::Result<()> {
    let container = parse_rect(&args.container)?;
    let bbox = reveal::path_bbox_from_svg(&args.path_d).context("measure logo path")?;
    let fit = reveal::LogoFit::compute(container, bbox)?;
    print_json(&LogoOut {
        transform: fit.to_svg_transform(),
        fit,
    })
}

fn parse_rect(s: &str) -> anyhow::Result<reveal::Rect> {
    let parts = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parse rectangle '{s}'"))?;
    let [x, y, w, h] = parts[..] else {
        anyhow::bail!("rectangle must be 'x,y,width,height', got '{s}'");
    };
    Ok(reveal::Rect::new(x, y, x + w, y + h))
}
