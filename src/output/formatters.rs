//! Formatting utilities for terminal output

use crate::core::{Cell, CellType};
use colored::{ColoredString, Colorize};

/// Tile background for a cell type, as RGB
#[must_use]
pub const fn tile_color(kind: CellType) -> (u8, u8, u8) {
    match kind {
        CellType::Correct => (0x6a, 0xaa, 0x64),
        CellType::Present => (0xc9, 0xb4, 0x58),
        CellType::Absent => (0x78, 0x7c, 0x7e),
    }
}

/// Tile text: the letter padded to three columns
#[must_use]
pub fn tile_text(cell: &Cell) -> String {
    format!(" {} ", cell.ch)
}

/// Render one cell as a colored tile
#[must_use]
pub fn render_cell(cell: &Cell) -> ColoredString {
    let (r, g, b) = tile_color(cell.kind);
    tile_text(cell).bold().white().on_truecolor(r, g, b)
}

/// Render a row of cells as adjacent tiles
#[must_use]
pub fn render_row(row: &[Cell]) -> String {
    row.iter().map(|c| render_cell(c).to_string()).collect()
}
