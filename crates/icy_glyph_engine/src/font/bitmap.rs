//! Hand-drawn 5 row bitmap font all presets derive their glyphs from.
//!
//! `#` marks a lit pixel. Widths vary per character but every row of one
//! character has the same width.

pub const BITMAP_HEIGHT: usize = 5;

/// Width of a standard cell, used for the blank fallback glyph.
pub const BITMAP_CELL_WIDTH: usize = 5;

pub type Bitmap = [&'static str; BITMAP_HEIGHT];

#[rustfmt::skip]
pub const BITMAPS: &[(char, Bitmap)] = &[
    ('A', [" ### ", "#   #", "#####", "#   #", "#   #"]),
    ('B', ["#### ", "#   #", "#### ", "#   #", "#### "]),
    ('C', [" ####", "#    ", "#    ", "#    ", " ####"]),
    ('D', ["#### ", "#   #", "#   #", "#   #", "#### "]),
    ('E', ["#####", "#    ", "#### ", "#    ", "#####"]),
    ('F', ["#####", "#    ", "#### ", "#    ", "#    "]),
    ('G', [" ####", "#    ", "#  ##", "#   #", " ####"]),
    ('H', ["#   #", "#   #", "#####", "#   #", "#   #"]),
    ('I', ["###", " # ", " # ", " # ", "###"]),
    ('J', ["  ###", "   # ", "   # ", "#  # ", " ##  "]),
    ('K', ["#   #", "#  # ", "###  ", "#  # ", "#   #"]),
    ('L', ["#    ", "#    ", "#    ", "#    ", "#####"]),
    ('M', ["#   #", "## ##", "# # #", "#   #", "#   #"]),
    ('N', ["#   #", "##  #", "# # #", "#  ##", "#   #"]),
    ('O', [" ### ", "#   #", "#   #", "#   #", " ### "]),
    ('P', ["#### ", "#   #", "#### ", "#    ", "#    "]),
    ('Q', [" ### ", "#   #", "# # #", "#  # ", " ## #"]),
    ('R', ["#### ", "#   #", "#### ", "#  # ", "#   #"]),
    ('S', [" ####", "#    ", " ### ", "    #", "#### "]),
    ('T', ["#####", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('U', ["#   #", "#   #", "#   #", "#   #", " ### "]),
    ('V', ["#   #", "#   #", "#   #", " # # ", "  #  "]),
    ('W', ["#   #", "#   #", "# # #", "## ##", "#   #"]),
    ('X', ["#   #", " # # ", "  #  ", " # # ", "#   #"]),
    ('Y', ["#   #", " # # ", "  #  ", "  #  ", "  #  "]),
    ('Z', ["#####", "   # ", "  #  ", " #   ", "#####"]),

    ('0', [" ### ", "#  ##", "# # #", "##  #", " ### "]),
    ('1', [" # ", "## ", " # ", " # ", "###"]),
    ('2', [" ### ", "#   #", "  ## ", " #   ", "#####"]),
    ('3', ["#### ", "    #", " ### ", "    #", "#### "]),
    ('4', ["#   #", "#   #", "#####", "    #", "    #"]),
    ('5', ["#####", "#    ", "#### ", "    #", "#### "]),
    ('6', [" ### ", "#    ", "#### ", "#   #", " ### "]),
    ('7', ["#####", "    #", "   # ", "  #  ", "  #  "]),
    ('8', [" ### ", "#   #", " ### ", "#   #", " ### "]),
    ('9', [" ### ", "#   #", " ####", "    #", " ### "]),

    (' ', ["   ", "   ", "   ", "   ", "   "]),
    ('.', [" ", " ", " ", " ", "#"]),
    (',', ["  ", "  ", "  ", " #", "# "]),
    ('!', ["#", "#", "#", " ", "#"]),
    ('?', ["### ", "   #", " ## ", "    ", " #  "]),
    ('-', ["   ", "   ", "###", "   ", "   "]),
    ('_', ["    ", "    ", "    ", "    ", "####"]),
    (':', [" ", "#", " ", "#", " "]),
    (';', ["  ", " #", "  ", " #", "# "]),
    ('\'', ["#", "#", " ", " ", " "]),
    ('"', ["# #", "# #", "   ", "   ", "   "]),
    ('(', [" #", "# ", "# ", "# ", " #"]),
    (')', ["# ", " #", " #", " #", "# "]),
    ('[', ["##", "# ", "# ", "# ", "##"]),
    (']', ["##", " #", " #", " #", "##"]),
    ('/', ["    #", "   # ", "  #  ", " #   ", "#    "]),
    ('\\', ["#    ", " #   ", "  #  ", "   # ", "    #"]),
    ('+', ["   ", " # ", "###", " # ", "   "]),
    ('=', ["   ", "###", "   ", "###", "   "]),
    ('*', ["   ", "# #", " # ", "# #", "   "]),
    ('#', [" # # ", "#####", " # # ", "#####", " # # "]),
    ('@', [" ### ", "# ###", "# # #", "# ###", " ##  "]),
    ('&', [" ##  ", "#  # ", " ## #", "#  # ", " ## #"]),
    ('%', ["##  #", "## # ", "  #  ", " # ##", "#  ##"]),
    ('<', ["  #", " # ", "#  ", " # ", "  #"]),
    ('>', ["#  ", " # ", "  #", " # ", "#  "]),
];

/// Pixel access on a bitmap, treating everything outside of it as dark.
pub struct PixelGrid {
    pixels: Vec<Vec<bool>>,
    width: usize,
}

impl PixelGrid {
    pub fn new(bitmap: &Bitmap) -> Self {
        let pixels: Vec<Vec<bool>> = bitmap.iter().map(|row| row.chars().map(|ch| ch == '#').collect()).collect();
        let width = pixels.first().map_or(0, Vec::len);
        Self { pixels, width }
    }

    pub fn blank(width: usize) -> Self {
        Self {
            pixels: vec![vec![false; width]; BITMAP_HEIGHT],
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    /// True if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|lit| !lit)
    }

    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.pixels.get(y as usize).and_then(|row| row.get(x as usize)).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmaps_are_rectangular() {
        for (ch, bitmap) in BITMAPS {
            let width = bitmap[0].chars().count();
            assert!(width > 0, "'{ch}' has no columns");
            for row in bitmap {
                assert_eq!(width, row.chars().count(), "ragged row in '{ch}'");
                assert!(row.chars().all(|c| c == '#' || c == ' '), "stray pixel char in '{ch}'");
            }
        }
    }

    #[test]
    fn test_no_duplicate_characters() {
        let mut seen = std::collections::HashSet::new();
        for (ch, _) in BITMAPS {
            assert!(seen.insert(*ch), "'{ch}' defined twice");
        }
    }

    #[test]
    fn test_covers_letters_and_digits() {
        for ch in ('A'..='Z').chain('0'..='9') {
            assert!(BITMAPS.iter().any(|(c, _)| *c == ch), "missing '{ch}'");
        }
    }

    #[test]
    fn test_pixel_grid_bounds() {
        let grid = PixelGrid::new(&[" # ", "# #", "   ", "   ", "###"]);
        assert_eq!(3, grid.width());
        assert!(grid.is_lit(1, 0));
        assert!(!grid.is_lit(0, 0));
        assert!(!grid.is_lit(-1, 1));
        assert!(!grid.is_lit(3, 4));
        assert!(!grid.is_lit(0, 5));
    }

    #[test]
    fn test_blank_grid() {
        assert!(PixelGrid::blank(BITMAP_CELL_WIDTH).is_blank());
        assert!(!PixelGrid::new(&["#", " ", " ", " ", " "]).is_blank());
    }
}
