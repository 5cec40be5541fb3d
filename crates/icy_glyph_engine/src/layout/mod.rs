//! Text to glyph layout.
//!
//! [`render`] turns input text into a [`RenderedArt`]:
//!
//! 1. the text is split into input lines at line breaks,
//! 2. each input line is wrapped into character lines when an output width is set,
//! 3. every character line is composed glyph by glyph into `preset.height()` rows,
//! 4. the row blocks are stacked with `line_height` blank rows in between,
//! 5. all rows are right padded to a rectangle.
//!
//! # Example
//!
//! ```
//! use icy_glyph_engine::{render, RenderOptions};
//!
//! let options = RenderOptions::for_preset("minimal").unwrap();
//! let art = render("HI", &options).unwrap();
//! assert_eq!(3, art.height());
//! ```

use std::{fmt::Display, iter::repeat, num::NonZeroUsize, str::FromStr};

use crate::{
    font::{get_preset, PresetId, BANNER_TEXT},
    Color, EngineError, Result,
};

mod rendered_art;
mod wrap;

pub use rendered_art::RenderedArt;
pub use wrap::wrap_line;

/// Column cap applied to input lines before glyph expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputWidth {
    #[default]
    NoWrap,
    Columns(NonZeroUsize),
}

impl OutputWidth {
    /// `0` means no wrapping.
    pub fn columns(columns: usize) -> Self {
        NonZeroUsize::new(columns).map_or(OutputWidth::NoWrap, OutputWidth::Columns)
    }

    pub fn cap(&self) -> Option<usize> {
        match self {
            OutputWidth::NoWrap => None,
            OutputWidth::Columns(columns) => Some(columns.get()),
        }
    }
}

impl Display for OutputWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputWidth::NoWrap => write!(f, "no-wrap"),
            OutputWidth::Columns(columns) => write!(f, "{columns}"),
        }
    }
}

impl FromStr for OutputWidth {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "no-wrap" | "nowrap" | "none" => Ok(OutputWidth::NoWrap),
            _ => s
                .parse::<NonZeroUsize>()
                .map(OutputWidth::Columns)
                .map_err(|_| EngineError::InvalidOutputWidth { value: s.to_string() }),
        }
    }
}

/// Caller supplied parameters of a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Preset id, resolved on every render so typos surface as errors.
    pub preset: String,
    /// Blank columns between adjacent glyphs.
    pub letter_spacing: usize,
    /// Blank rows between stacked character lines.
    pub line_height: usize,
    pub output_width: OutputWidth,
    pub foreground: Color,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let preset = PresetId::Block.preset();
        Self {
            preset: preset.id().to_string(),
            letter_spacing: preset.default_letter_spacing(),
            line_height: preset.default_line_height(),
            output_width: OutputWidth::NoWrap,
            foreground: Color::NEON_GREEN,
            background: Color::BLACK,
        }
    }
}

impl RenderOptions {
    /// Options using the spacing defaults of the given preset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPreset`] if `preset` isn't registered.
    pub fn for_preset(preset: &str) -> Result<Self> {
        let preset = get_preset(preset)?;
        Ok(Self {
            preset: preset.id().to_string(),
            letter_spacing: preset.default_letter_spacing(),
            line_height: preset.default_line_height(),
            ..Default::default()
        })
    }
}

/// Lays out `text` with the preset and spacing from `options`.
///
/// Empty text gives an empty art (no lines, width 0). A trailing line break
/// doesn't add a trailing block. Characters the preset doesn't know render
/// as its blank glyph.
///
/// # Errors
///
/// Returns [`EngineError::UnknownPreset`] if `options.preset` isn't registered.
pub fn render(text: &str, options: &RenderOptions) -> Result<RenderedArt> {
    let preset = get_preset(&options.preset)?;

    let mut input_lines: Vec<&str> = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect();
    while input_lines.last().is_some_and(|line| line.is_empty()) {
        input_lines.pop();
    }
    if input_lines.is_empty() {
        return Ok(RenderedArt::empty(options.clone()));
    }

    let char_lines: Vec<String> = input_lines
        .iter()
        .flat_map(|line| match options.output_width.cap() {
            Some(cap) => wrap_line(line, cap),
            None => vec![(*line).to_string()],
        })
        .collect();

    let mut rows = Vec::with_capacity(char_lines.len() * (preset.height() + options.line_height));
    for (i, line) in char_lines.iter().enumerate() {
        if i > 0 {
            rows.extend(repeat(String::new()).take(options.line_height));
        }
        rows.extend(preset.compose(line, options.letter_spacing));
    }

    let art = RenderedArt::from_rows(rows, options.clone());
    log::debug!(
        "rendered {} char line(s) with '{}' into {}x{}",
        char_lines.len(),
        preset.id(),
        art.width(),
        art.height()
    );
    Ok(art)
}

/// Puts the MAQSADBEK banner above `art`.
///
/// The banner rows come first, then the header preset's line height in blank
/// rows, then the rows of `art` unchanged. Both blocks are right padded to the
/// wider of the two. An empty `art` gets the banner alone.
pub fn insert_header(art: &RenderedArt) -> RenderedArt {
    let header = PresetId::PixelBlockHeader.preset();
    let mut rows = header.glyph_set_render(BANNER_TEXT);
    if !art.is_empty() {
        rows.extend(repeat(String::new()).take(header.default_line_height()));
        rows.extend(art.lines().iter().cloned());
    }
    RenderedArt::from_rows(rows, art.options().clone())
}
