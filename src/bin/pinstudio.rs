use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "pinstudio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canvas derived for an image size as JSON.
    Canvas(CanvasArgs),
    /// Replay an editor event script over an image and write the pin submission JSON.
    Compose(ComposeArgs),
    /// List the size presets offered for an orientation.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
struct CanvasArgs {
    /// Source image width in pixels.
    #[arg(long)]
    width: u32,

    /// Source image height in pixels.
    #[arg(long)]
    height: u32,

    /// Switch the canvas to this orientation after the first derivation.
    #[arg(long, value_enum)]
    orientation: Option<OrientationChoice>,

    /// Size preset to apply (`original` or a ratio such as `16:9`).
    #[arg(long)]
    size: Option<String>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Uploaded image; its dimensions are read from the file.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Image dimensions as `WIDTHxHEIGHT`, when no file is at hand.
    #[arg(long, value_parser = parse_dimensions)]
    size: Option<(u32, u32)>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Editor event script (JSON).
    #[arg(long)]
    script: PathBuf,

    /// Editor defaults (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pin title.
    #[arg(long, default_value = "")]
    title: String,

    /// Pin description.
    #[arg(long, default_value = "")]
    description: String,

    /// Skip the submission consistency check.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    #[arg(long, value_enum, default_value_t = OrientationChoice::Portrait)]
    orientation: OrientationChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationChoice {
    Portrait,
    Landscape,
}

impl From<OrientationChoice> for pinstudio::Orientation {
    fn from(choice: OrientationChoice) -> Self {
        match choice {
            OrientationChoice::Portrait => Self::Portrait,
            OrientationChoice::Landscape => Self::Landscape,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Canvas(args) => cmd_canvas(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Presets(args) => cmd_presets(args),
    }
}

fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn load_source(args: &SourceArgs) -> anyhow::Result<pinstudio::SourceImage> {
    let (url, (width, height)) = match (&args.image, args.size) {
        (Some(path), _) => {
            let dims = image::image_dimensions(path)
                .with_context(|| format!("read image dimensions '{}'", path.display()))?;
            (path.display().to_string(), dims)
        }
        (None, Some(dims)) => (String::new(), dims),
        (None, None) => anyhow::bail!("either --image or --size is required"),
    };
    Ok(pinstudio::SourceImage::new(url, width, height)?)
}

fn cmd_canvas(args: CanvasArgs) -> anyhow::Result<()> {
    let source = pinstudio::SourceImage::new("", args.width, args.height)?;
    let mut session = pinstudio::EditSession::new(source, pinstudio::EditorConfig::default());
    session.open_editor();
    if let Some(o) = args.orientation {
        session.options().set_orientation(o.into());
    }
    if let Some(name) = args.size.as_deref() {
        let preset = pinstudio::SizePreset::from_name(name)?;
        session.options().set_size(preset);
    }

    let canvas = pinstudio::CanvasOptions::from(session.store().canvas());
    println!("{}", serde_json::to_string_pretty(&canvas)?);
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let source = load_source(&args.source)?;
    let config = match &args.config {
        Some(path) => pinstudio::EditorConfig::from_path(path)?,
        None => pinstudio::EditorConfig::default(),
    };
    let script = pinstudio::EditorScript::from_path(&args.script)?;

    let mut session = pinstudio::EditSession::new(source, config);
    session.open_editor();
    session
        .replay(&script)
        .with_context(|| format!("replay '{}'", args.script.display()))?;

    let form = pinstudio::PinForm {
        title: args.title,
        description: args.description,
        ..pinstudio::PinForm::default()
    };
    let submission = session.snapshot(form);
    if !args.no_validate {
        submission.validate()?;
    }
    let json = submission.to_json_pretty()?;

    match &args.out {
        Some(path) => write_output(path, &json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for preset in pinstudio::size_choices(args.orientation.into()) {
        writeln!(out, "{preset}")?;
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
