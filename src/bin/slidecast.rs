use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use slidecast::build::{resolve_clips, schedule_clips};
use slidecast::content::{read_items_json, render_description};
use slidecast::{
    BlockFace, BuildConfig, BuildRequest, DescriptionHeader, FfmpegAudio, FontResource,
    ParleyFont, SlideFont, VideoBuild,
};

#[derive(Parser, Debug)]
#[command(name = "slidecast", version, about = "Narrated news slideshow videos")]
struct Cli {
    /// Build configuration JSON (defaults apply to missing fields).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full video (requires `ffmpeg` and `ffprobe` on PATH).
    Render(RenderArgs),
    /// Render slide PNGs only.
    Slides(SlidesArgs),
    /// Probe narration and print the schedule as JSON.
    Timeline(TimelineArgs),
    /// Write the plain-text video description.
    Describe(DescribeArgs),
}

#[derive(Args, Debug)]
struct ItemsArg {
    /// Items JSON, as written by the content stages.
    #[arg(long)]
    items: PathBuf,
}

#[derive(Args, Debug)]
struct NarrationArgs {
    /// Narration for the cover slide.
    #[arg(long)]
    cover_audio: PathBuf,

    /// Narration for the ending slide.
    #[arg(long)]
    ending_audio: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    items: ItemsArg,

    #[command(flatten)]
    narration: NarrationArgs,

    /// Date printed on the cover (default: today, `YYYYMMDD`).
    #[arg(long)]
    date: Option<String>,

    /// Font file used for every slide.
    #[arg(long)]
    font: PathBuf,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    /// Where to save a copy of the cover slide.
    #[arg(long)]
    cover: PathBuf,
}

#[derive(Parser, Debug)]
struct SlidesArgs {
    #[command(flatten)]
    items: ItemsArg,

    /// Date printed on the cover (default: today, `YYYYMMDD`).
    #[arg(long)]
    date: Option<String>,

    /// Font file; without one, characters are drawn as blocks.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output directory for `slide_000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    items: ItemsArg,

    #[command(flatten)]
    narration: NarrationArgs,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    items: ItemsArg,

    /// Date in the title line (default: today, `YYYYMMDD`).
    #[arg(long)]
    date: Option<String>,

    /// Output text file.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BuildConfig::from_path(path)?,
        None => BuildConfig::default(),
    };
    slidecast::logging::init_logging(&config.logging);

    match cli.cmd {
        Command::Render(args) => cmd_render(&config, args),
        Command::Slides(args) => cmd_slides(&config, args),
        Command::Timeline(args) => cmd_timeline(&config, args),
        Command::Describe(args) => cmd_describe(args),
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

fn cmd_render(config: &BuildConfig, args: RenderArgs) -> anyhow::Result<()> {
    let items = read_items_json(&args.items.items)?;
    let date = args.date.unwrap_or_else(today);
    let font = FontResource::load(&args.font)?;
    let mut face = ParleyFont::new(&font)?;

    let ffmpeg = FfmpegAudio;
    let mut build = VideoBuild::new(config, &mut face, &ffmpeg, &ffmpeg);
    let report = build.run_to_file(
        &BuildRequest {
            items: &items,
            cover_audio: &args.narration.cover_audio,
            ending_audio: &args.narration.ending_audio,
            date: &date,
            cover_path: &args.cover,
        },
        &args.out,
    )?;

    eprintln!(
        "wrote {} ({:.2}s, {} frames)",
        args.out.display(),
        report.timeline.total_duration().as_secs_f64(),
        report.stats.frames_total
    );
    Ok(())
}

fn cmd_slides(config: &BuildConfig, args: SlidesArgs) -> anyhow::Result<()> {
    config.validate()?;
    let items = read_items_json(&args.items.items)?;
    let date = args.date.unwrap_or_else(today);

    let mut face: Box<dyn SlideFont> = match &args.font {
        Some(path) => Box::new(ParleyFont::new(&FontResource::load(path)?)?),
        None => Box::new(BlockFace::default()),
    };
    let ffmpeg = FfmpegAudio;
    let mut build = VideoBuild::new(config, face.as_mut(), &ffmpeg, &ffmpeg);
    let paths = build.render_slides_into(&items, &date, &args.out_dir)?;

    eprintln!("wrote {} slides to {}", paths.len(), args.out_dir.display());
    Ok(())
}

fn cmd_timeline(config: &BuildConfig, args: TimelineArgs) -> anyhow::Result<()> {
    config.validate()?;
    let items = read_items_json(&args.items.items)?;
    let clips = resolve_clips(
        &FfmpegAudio,
        &items,
        &args.narration.cover_audio,
        &args.narration.ending_audio,
    )?;
    let timeline = schedule_clips(config.silence()?, &clips)?;

    let json = serde_json::to_string_pretty(&timeline).context("serialize timeline")?;
    println!("{json}");
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let items = read_items_json(&args.items.items)?;
    let date = args.date.unwrap_or_else(today);
    let text = render_description(&items, &date, &DescriptionHeader::default());
    write_text(&args.out, &text)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
