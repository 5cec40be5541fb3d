//! Rules turning a bitmap into the rows of a preset glyph.

use super::bitmap::PixelGrid;

const FULL_BLOCK: char = '█';
const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';
const DARK_SHADE: char = '▓';
const LIGHT_SHADE: char = '░';
const GRID_ON: char = '■';
const GRID_OFF: char = '·';

/// Every lit pixel becomes two full blocks so cells look square in a terminal.
pub fn block(grid: &PixelGrid) -> Vec<String> {
    rows(grid, |grid, y| {
        let mut row = String::new();
        for x in 0..grid.width() as i32 {
            let ch = if grid.is_lit(x, y) { FULL_BLOCK } else { ' ' };
            row.push(ch);
            row.push(ch);
        }
        row
    })
}

/// Strokes traced with line characters picked from the pixel neighbourhood.
pub fn outline(grid: &PixelGrid) -> Vec<String> {
    rows(grid, |grid, y| (0..grid.width() as i32).map(|x| stroke_char(grid, x, y)).collect())
}

fn stroke_char(grid: &PixelGrid, x: i32, y: i32) -> char {
    if !grid.is_lit(x, y) {
        return ' ';
    }
    let horizontal = grid.is_lit(x - 1, y) || grid.is_lit(x + 1, y);
    let vertical = grid.is_lit(x, y - 1) || grid.is_lit(x, y + 1);
    match (horizontal, vertical) {
        (true, true) => '+',
        (true, false) => '-',
        (false, true) => '|',
        (false, false) => {
            let falling = grid.is_lit(x - 1, y - 1) || grid.is_lit(x + 1, y + 1);
            let rising = grid.is_lit(x + 1, y - 1) || grid.is_lit(x - 1, y + 1);
            match (falling, rising) {
                (true, true) => 'x',
                (true, false) => '\\',
                (false, true) => '/',
                (false, false) => 'o',
            }
        }
    }
}

/// Dark shade pixels with a light shade drop shadow one column to the right.
/// The glyph is one column wider than its bitmap to hold the shadow.
pub fn cyber(grid: &PixelGrid) -> Vec<String> {
    rows(grid, |grid, y| {
        (0..=grid.width() as i32)
            .map(|x| {
                if grid.is_lit(x, y) {
                    DARK_SHADE
                } else if grid.is_lit(x - 1, y) {
                    LIGHT_SHADE
                } else {
                    ' '
                }
            })
            .collect()
    })
}

/// Every pixel drawn, lit or not, separated by a space.
pub fn pixel_grid(grid: &PixelGrid) -> Vec<String> {
    rows(grid, |grid, y| {
        let mut row = String::new();
        for x in 0..grid.width() as i32 {
            if x > 0 {
                row.push(' ');
            }
            row.push(if grid.is_lit(x, y) { GRID_ON } else { GRID_OFF });
        }
        row
    })
}

/// Two bitmap rows per text row using half blocks: a 5 row bitmap folds into 3.
pub fn minimal(grid: &PixelGrid) -> Vec<String> {
    (0..grid.height().div_ceil(2) as i32)
        .map(|pair| {
            let (top, bottom) = (pair * 2, pair * 2 + 1);
            (0..grid.width() as i32)
                .map(|x| match (grid.is_lit(x, top), grid.is_lit(x, bottom)) {
                    (true, true) => FULL_BLOCK,
                    (true, false) => UPPER_HALF,
                    (false, true) => LOWER_HALF,
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect()
}

fn rows(grid: &PixelGrid, row_fn: impl Fn(&PixelGrid, i32) -> String) -> Vec<String> {
    (0..grid.height() as i32).map(|y| row_fn(grid, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t_bitmap() -> PixelGrid {
        PixelGrid::new(&["###", " # ", " # ", " # ", " # "])
    }

    #[test]
    fn test_block_doubles_pixels() {
        assert_eq!(vec!["██████", "  ██  ", "  ██  ", "  ██  ", "  ██  "], block(&t_bitmap()));
    }

    #[test]
    fn test_outline_strokes() {
        assert_eq!(vec!["-+-", " | ", " | ", " | ", " | "], outline(&t_bitmap()));
        let diagonal = PixelGrid::new(&["#  ", " # ", "  #", "   ", "  #"]);
        assert_eq!(vec!["\\  ", " \\ ", "  \\", "   ", "  o"], outline(&diagonal));
    }

    #[test]
    fn test_cyber_shadow() {
        assert_eq!(vec!["▓▓▓░", " ▓░ ", " ▓░ ", " ▓░ ", " ▓░ "], cyber(&t_bitmap()));
    }

    #[test]
    fn test_pixel_grid() {
        assert_eq!(vec!["■ ■ ■", "· ■ ·", "· ■ ·", "· ■ ·", "· ■ ·"], pixel_grid(&t_bitmap()));
    }

    #[test]
    fn test_minimal_folds_rows() {
        assert_eq!(vec!["▀█▀", " █ ", " ▀ "], minimal(&t_bitmap()));
    }
}
