//! Glyph preset registry.
//!
//! The preset set is closed: [`PresetId`] enumerates every preset and each one
//! resolves to an immutable [`Preset`] built once on first use.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{EngineError, Result};

pub mod banner;
pub mod bitmap;
mod styles;

pub use banner::{Banner, BANNER_ROWS, BANNER_TEXT};
use bitmap::{PixelGrid, BITMAPS, BITMAP_CELL_WIDTH};

/// One character cell of a preset. All rows have the same width in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
    width: usize,
}

impl Glyph {
    pub fn from_rows(rows: Vec<String>) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let rows = rows.into_iter().map(|row| pad_right(row, width)).collect();
        Self { rows, width }
    }

    /// All space glyph with the size of `rows`.
    fn blank(rows: &[String]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Self {
            rows: vec![" ".repeat(width); rows.len()],
            width,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    Block,
    Outline,
    Cyber,
    PixelGrid,
    Minimal,
    PixelBlockHeader,
}

impl PresetId {
    /// All presets, in registry order.
    pub const ALL: [PresetId; 6] = [
        PresetId::Block,
        PresetId::Outline,
        PresetId::Cyber,
        PresetId::PixelGrid,
        PresetId::Minimal,
        PresetId::PixelBlockHeader,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PresetId::Block => "block",
            PresetId::Outline => "outline",
            PresetId::Cyber => "cyber",
            PresetId::PixelGrid => "pixel-grid",
            PresetId::Minimal => "minimal",
            PresetId::PixelBlockHeader => "pixel-block-header",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PresetId::Block => "Block",
            PresetId::Outline => "Outline",
            PresetId::Cyber => "Cyber",
            PresetId::PixelGrid => "Pixel Grid",
            PresetId::Minimal => "Minimal",
            PresetId::PixelBlockHeader => "Pixel-Block Header Style",
        }
    }

    pub fn preset(self) -> &'static Preset {
        &PRESETS[self as usize]
    }
}

impl Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for PresetId {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PresetId::ALL
            .iter()
            .find(|id| id.id() == s)
            .copied()
            .ok_or_else(|| EngineError::unknown_preset(s))
    }
}

/// A named, immutable glyph set with its default layout parameters.
#[derive(Debug)]
pub struct Preset {
    id: PresetId,
    height: usize,
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
    default_letter_spacing: usize,
    default_line_height: usize,
    banner: Option<Banner>,
}

impl Preset {
    fn build(id: PresetId) -> Self {
        let style: fn(&PixelGrid) -> Vec<String> = match id {
            PresetId::Block | PresetId::PixelBlockHeader => styles::block,
            PresetId::Outline => styles::outline,
            PresetId::Cyber => styles::cyber,
            PresetId::PixelGrid => styles::pixel_grid,
            PresetId::Minimal => styles::minimal,
        };
        let (default_letter_spacing, default_line_height) = match id {
            PresetId::Cyber => (0, 1),
            PresetId::Minimal => (1, 0),
            _ => (1, 1),
        };

        // styles may draw unlit pixels, a glyph without lit pixels stays blank
        let make_glyph = |grid: &PixelGrid| {
            let rows = style(grid);
            if grid.is_blank() {
                Glyph::blank(&rows)
            } else {
                Glyph::from_rows(rows)
            }
        };
        let glyphs: HashMap<char, Glyph> = BITMAPS.iter().map(|(ch, bitmap)| (*ch, make_glyph(&PixelGrid::new(bitmap)))).collect();
        let fallback = make_glyph(&PixelGrid::blank(BITMAP_CELL_WIDTH));
        let height = fallback.height();
        let banner = matches!(id, PresetId::PixelBlockHeader).then_some(banner::MAQSADBEK);

        Self {
            id,
            height,
            glyphs,
            fallback,
            default_letter_spacing,
            default_line_height,
            banner,
        }
    }

    pub fn id(&self) -> PresetId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Glyph height shared by every glyph of the preset.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn default_letter_spacing(&self) -> usize {
        self.default_letter_spacing
    }

    pub fn default_line_height(&self) -> usize {
        self.default_line_height
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn fallback(&self) -> &Glyph {
        &self.fallback
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch) || self.glyphs.contains_key(&ch.to_ascii_uppercase())
    }

    /// Glyph for `ch`; lower case letters use their upper case glyph and
    /// anything unsupported gets the blank fallback.
    pub fn glyph(&self, ch: char) -> &Glyph {
        self.glyphs
            .get(&ch)
            .or_else(|| self.glyphs.get(&ch.to_ascii_uppercase()))
            .unwrap_or(&self.fallback)
    }

    /// Composes one character line into `height()` rows, putting
    /// `letter_spacing` blank columns between adjacent glyphs.
    pub fn compose(&self, line: &str, letter_spacing: usize) -> Vec<String> {
        if let Some(banner) = self.banner.as_ref().filter(|banner| banner.matches(line)) {
            return banner.rows().iter().map(|row| (*row).to_string()).collect();
        }

        let mut rows = vec![String::new(); self.height];
        let spacer = " ".repeat(letter_spacing);
        for (i, ch) in line.chars().enumerate() {
            let glyph = self.glyph(ch);
            for (row, glyph_row) in rows.iter_mut().zip(glyph.rows()) {
                if i > 0 {
                    row.push_str(&spacer);
                }
                row.push_str(glyph_row);
            }
        }
        rows
    }

    /// Composes `text` as a single character line with the default letter spacing.
    pub fn glyph_set_render(&self, text: &str) -> Vec<String> {
        self.compose(text, self.default_letter_spacing)
    }
}

lazy_static::lazy_static! {
    static ref PRESETS: Vec<Preset> = PresetId::ALL.iter().map(|id| Preset::build(*id)).collect();
}

/// Looks up a preset by its id (`block`, `outline`, ...).
///
/// # Errors
///
/// Returns [`EngineError::UnknownPreset`] if `id` isn't registered.
pub fn get_preset(id: &str) -> Result<&'static Preset> {
    Ok(id.parse::<PresetId>()?.preset())
}

pub(crate) fn pad_right(mut row: String, width: usize) -> String {
    let len = row.chars().count();
    if len < width {
        row.push_str(&" ".repeat(width - len));
    }
    row
}
