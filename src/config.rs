use std::time::Duration;

use ratatui::style::Color;

use crate::snake::Cell;

/// Board layout shared by the simulation and the renderer.
///
/// `cell_count` is the number of cells along each axis of the square board.
/// `cell_size` is the width of one cell in terminal columns (one row tall),
/// and `offset` is the blank margin kept around the bordered board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    pub cell_size: u16,
    pub cell_count: u16,
    pub offset: u16,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            cell_count: DEFAULT_CELL_COUNT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl GridGeometry {
    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cell_count) * usize::from(self.cell_count)
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        let count = i32::from(self.cell_count);
        (0..count).contains(&cell.x) && (0..count).contains(&cell.y)
    }

    /// Board width in terminal columns, border excluded.
    #[must_use]
    pub fn board_width(self) -> u16 {
        self.cell_count.saturating_mul(self.cell_size)
    }

    /// Board height in terminal rows, border excluded.
    #[must_use]
    pub fn board_height(self) -> u16 {
        self.cell_count
    }

    /// Maps a board cell to its column/row offset inside the board area.
    ///
    /// Returns `None` for cells off the board.
    #[must_use]
    pub fn cell_to_screen(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }

        let x = u16::try_from(cell.x).ok()?.checked_mul(self.cell_size)?;
        let y = u16::try_from(cell.y).ok()?;
        Some((x, y))
    }
}

/// Cells along each side of the board.
pub const DEFAULT_CELL_COUNT: u16 = 25;

/// Terminal columns per cell; two columns keep cells roughly square.
pub const DEFAULT_CELL_SIZE: u16 = 2;

/// Blank terminal cells around the board border.
pub const DEFAULT_OFFSET: u16 = 1;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Delay between frames of the draw/input loop (about 60 per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const GAME_TITLE: &str = "Retro Snake";

/// Light green background.
pub const COLOR_FIELD: Color = Color::Rgb(173, 204, 96);

/// Dark green used for the snake, border and text.
pub const COLOR_INK: Color = Color::Rgb(43, 51, 24);

/// Food color.
pub const COLOR_FOOD: Color = Color::Rgb(196, 58, 38);

pub const GLYPH_SNAKE_SEGMENT: &str = "█";
pub const GLYPH_FOOD: &str = "●";
