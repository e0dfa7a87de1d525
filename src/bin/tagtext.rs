use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tagtext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out markup and print the cells and line widths as JSON.
    Layout(LayoutArgs),
    /// Evaluate effects at a point in time and print per-cell params as JSON.
    Frame(FrameArgs),
    /// Print the wrapped text, one row per layout line.
    Ascii(LayoutArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Markup text. Mutually exclusive with `--in`.
    #[arg(long, conflicts_with = "in_path")]
    text: Option<String>,

    /// Read markup text from a file.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Block config JSON (text size, wrap width, theme).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap width in pixels; overrides the config.
    #[arg(long)]
    wrap: Option<f32>,

    /// Text size; overrides the config.
    #[arg(long)]
    size: Option<f32>,

    /// Monospace advance in ems.
    #[arg(long, default_value_t = 0.6)]
    advance_em: f32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Clock value in milliseconds.
    #[arg(long, default_value_t = 0)]
    time: u64,

    /// Horizontal alignment.
    #[arg(long, value_enum, default_value_t = AlignH::Left)]
    align: AlignH,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignH {
    Left,
    Center,
    Right,
}

#[derive(serde::Serialize)]
struct LayoutDump<'a> {
    width: f32,
    height: f32,
    line_widths: &'a [f32],
    cells: &'a [tagtext::CharCell],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Ascii(args) => cmd_ascii(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<tagtext::BlockConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = tagtext::BlockConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn build_block(args: &LayoutArgs) -> anyhow::Result<tagtext::TextBlock> {
    let text = match (&args.text, &args.in_path) {
        (Some(t), _) => t.clone(),
        (None, Some(p)) => {
            std::fs::read_to_string(p).with_context(|| format!("read text '{}'", p.display()))?
        }
        (None, None) => anyhow::bail!("either --text or --in is required"),
    };

    let mut cfg = match &args.config {
        Some(p) => read_config(p)?,
        None => tagtext::BlockConfig::default(),
    };
    if let Some(w) = args.wrap {
        cfg.wrap_width = Some(w);
    }
    if let Some(s) = args.size {
        cfg.text_size = s;
    }

    let measure = tagtext::MonospaceMeasure {
        advance_em: args.advance_em,
        ..tagtext::MonospaceMeasure::default()
    };
    Ok(tagtext::TextBlock::new(Arc::new(measure), &text, cfg)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let block = build_block(&args)?;
    let dump = LayoutDump {
        width: block.width(),
        height: block.height(),
        line_widths: block.line_widths(),
        cells: block.cells(),
    };
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut block = build_block(&args.layout)?;
    block.set_anim_offset(0);

    let h = match args.align {
        AlignH::Left => tagtext::HAlign::Left,
        AlignH::Center => tagtext::HAlign::Center,
        AlignH::Right => tagtext::HAlign::Right,
    };
    let registry = tagtext::EffectRegistry::with_builtins();
    let plan = block.frame(
        &registry,
        args.time,
        tagtext::Point::ORIGIN,
        tagtext::Align::new(h, tagtext::VAlign::Top),
    );
    println!("{}", serde_json::to_string_pretty(&plan.params)?);
    Ok(())
}

fn cmd_ascii(args: LayoutArgs) -> anyhow::Result<()> {
    let block = build_block(&args)?;
    let mut rows = vec![String::new(); block.line_count()];
    for cell in block.cells() {
        if let Some(row) = rows.get_mut(cell.line) {
            row.push(cell.glyph);
        }
    }
    for row in rows {
        println!("{row}");
    }
    Ok(())
}
