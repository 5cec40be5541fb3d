//! The fixed MAQSADBEK banner of the pixel-block-header preset.
//!
//! The banner is stored as finished rows rather than composed from glyphs so
//! it reproduces exactly, character for character.

/// Text that triggers the banner.
pub const BANNER_TEXT: &str = "MAQSADBEK";

#[rustfmt::skip]
pub const BANNER_ROWS: [&str; 5] = [
    "███████  ███    ███   █████   ███████   ██████   ██████  ███████ ██   ██",
    "██       ████  ████  ██   ██  ██       ██    ██ ██       ██      ██   ██",
    "█████    ██ ████ ██  ███████  █████    ██    ██ ██   ███ ███████ ███████",
    "██       ██  ██  ██  ██   ██  ██       ██    ██ ██    ██      ██ ██   ██",
    "███████  ██      ██  ██   ██  ███████   ██████   ██████  ███████ ██   ██",
];

/// A precomputed row block substituted for one specific character line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    text: &'static str,
    rows: &'static [&'static str],
}

impl Banner {
    pub const fn new(text: &'static str, rows: &'static [&'static str]) -> Self {
        Self { text, rows }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Width of the widest banner row in chars.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    pub fn matches(&self, line: &str) -> bool {
        line.eq_ignore_ascii_case(self.text)
    }
}

pub const MAQSADBEK: Banner = Banner::new(BANNER_TEXT, &BANNER_ROWS);
