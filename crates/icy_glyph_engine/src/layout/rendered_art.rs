use crate::font::pad_right;

use super::RenderOptions;

/// Rectangular grid of characters produced by one layout call.
///
/// Every line holds exactly `width` chars (space padded) and there are
/// `height` lines. Widths count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    lines: Vec<String>,
    width: usize,
    options: RenderOptions,
}

impl RenderedArt {
    /// Builds the art from raw rows, right padding all of them to the widest one.
    pub fn from_rows(rows: Vec<String>, options: RenderOptions) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let lines = rows.into_iter().map(|row| pad_right(row, width)).collect();
        Self { lines, width, options }
    }

    pub fn empty(options: RenderOptions) -> Self {
        Self {
            lines: Vec::new(),
            width: 0,
            options,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The options this art was rendered with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Grid positions `(row, col)` of every non-space character.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lines.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, ch)| *ch != ' ')
                .map(move |(col, _)| (row, col))
        })
    }
}
