#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::struct_excessive_bools)]

mod options;
pub use options::*;

use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use icy_glyph_engine::{
    export, get_preset, insert_header, render, samples, Color, ExportConfig, ExportFormat, OutputWidth, PresetId, RenderOptions,
};

pub type GlyphResult<T> = anyhow::Result<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Png,
    Svg,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Png => ExportFormat::Image,
            FormatArg::Svg => ExportFormat::Vector,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Renders text as neon ASCII banner art and exports it as text, PNG or SVG.", long_about = None)]
pub struct Args {
    /// Text to render. Read from --input or stdin when missing.
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// File to read the text from
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Render one of the built-in samples (see --list-samples)
    #[arg(long, value_name = "NAME", conflicts_with_all = ["text", "input"])]
    sample: Option<String>,

    /// Font preset (see --list-presets)
    #[arg(long, short)]
    preset: Option<String>,

    /// Foreground: neon-green, cyan, magenta, white or a hex color
    #[arg(long, value_name = "COLOR")]
    fg: Option<Color>,

    /// Background: black, deep-grey or a hex color
    #[arg(long, value_name = "COLOR")]
    bg: Option<Color>,

    /// Blank columns between glyphs
    #[arg(long, value_name = "N")]
    letter_spacing: Option<usize>,

    /// Blank rows between wrapped lines
    #[arg(long, value_name = "N")]
    line_height: Option<usize>,

    /// Wrap input lines after N characters
    #[arg(long, short, value_name = "no-wrap|N")]
    width: Option<OutputWidth>,

    /// Bake a neon glow into PNG/SVG output
    #[arg(long, conflicts_with = "no_glow")]
    glow: bool,

    /// Disable the glow even if the options file enables it
    #[arg(long)]
    no_glow: bool,

    #[arg(long, value_name = "COLOR")]
    glow_color: Option<Color>,

    /// Glow reach in pixels, capped at 32
    #[arg(long, value_name = "PX")]
    glow_radius: Option<u32>,

    /// Pixel size of one character cell in PNG/SVG output
    #[arg(long, value_name = "PX")]
    cell_size: Option<u32>,

    /// Put the MAQSADBEK banner above the output
    #[arg(long)]
    header: bool,

    /// Output format, guessed from --output when missing
    #[arg(long, short, value_enum)]
    format: Option<FormatArg>,

    /// Output file, stdout when missing
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Options file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Store the effective settings as new defaults
    #[arg(long)]
    save_options: bool,

    #[arg(long)]
    list_presets: bool,

    #[arg(long)]
    list_samples: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Merges command line flags over the stored options.
    fn settings(&self, options: &Options, sample_preset: Option<&str>) -> GlyphResult<(RenderOptions, ExportConfig)> {
        let preset_id = self.preset.as_deref().or(sample_preset).unwrap_or(&options.preset);
        let preset = get_preset(preset_id)?;

        let foreground = self.fg.unwrap_or(options.foreground);
        let render_options = RenderOptions {
            preset: preset.id().to_string(),
            letter_spacing: self.letter_spacing.or(options.letter_spacing).unwrap_or(preset.default_letter_spacing()),
            line_height: self.line_height.or(options.line_height).unwrap_or(preset.default_line_height()),
            output_width: self.width.unwrap_or(OutputWidth::columns(options.output_width.unwrap_or(0))),
            foreground,
            background: self.bg.unwrap_or(options.background),
        };

        let export_config = ExportConfig {
            cell_size: self.cell_size.unwrap_or(options.cell_size),
            glow_enabled: (options.glow || self.glow) && !self.no_glow,
            glow_color: self.glow_color.or(options.glow_color).unwrap_or(foreground),
            glow_radius: self.glow_radius.unwrap_or(options.glow_radius),
            ..ExportConfig::from_options(&render_options)
        };
        Ok((render_options, export_config))
    }

    fn export_format(&self) -> ExportFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output.as_deref().and_then(ExportFormat::from_path).unwrap_or(ExportFormat::Text)
    }

    fn read_text(&self) -> GlyphResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()));
        }
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    let logger = Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start());
    if let Err(err) = &logger {
        eprintln!("Failed to start logger: {err}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> GlyphResult<()> {
    if args.list_presets {
        for id in PresetId::ALL {
            let preset = id.preset();
            println!("{:<20}{} ({} rows)", id.id(), preset.name(), preset.height());
        }
        return Ok(());
    }
    if args.list_samples {
        for sample in samples::SAMPLES {
            println!("{:<12}{:<20}{}", sample.name, sample.preset, sample.text.replace('\n', " / "));
        }
        return Ok(());
    }

    let options = match &args.config {
        Some(path) => Options::load_from(path)?,
        None => Options::load_options().unwrap_or_else(|err| {
            log::warn!("Ignoring options file: {err:#}");
            Options::default()
        }),
    };

    let (text, sample_preset) = match &args.sample {
        Some(name) => {
            let Some(sample) = samples::get_sample(name) else {
                bail!("Unknown sample '{name}' (see --list-samples)");
            };
            (sample.text.to_string(), Some(sample.preset))
        }
        None => (args.read_text()?, None),
    };

    let (render_options, export_config) = args.settings(&options, sample_preset)?;
    let mut art = render(&text, &render_options)?;
    if args.header {
        art = insert_header(&art);
    }
    log::debug!("art is {}x{}", art.width(), art.height());

    let format = args.export_format();
    let payload = export(&art, format, &export_config)?;
    match &args.output {
        Some(path) => payload.save(path)?,
        None => {
            if format.is_binary() {
                bail!("{} output needs --output FILE", format.name());
            }
            let mut stdout = io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            if !payload.as_bytes().ends_with(b"\n") {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if args.save_options {
        let stored = Options {
            preset: render_options.preset.clone(),
            foreground: render_options.foreground,
            background: render_options.background,
            letter_spacing: Some(render_options.letter_spacing),
            line_height: Some(render_options.line_height),
            output_width: render_options.output_width.cap(),
            glow: export_config.glow_enabled,
            glow_color: Some(export_config.glow_color),
            glow_radius: export_config.glow_radius,
            cell_size: export_config.cell_size,
        };
        stored.store_options()?;
    }
    Ok(())
}
