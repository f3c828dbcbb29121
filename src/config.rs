use ratatui::style::Color;

use crate::error::{Result, SnakeError};
use crate::input::Direction;
use crate::snake::Position;

/// Reference board width in pixels.
pub const BOARD_WIDTH_PX: u16 = 600;

/// Reference board height in pixels.
pub const BOARD_HEIGHT_PX: u16 = 400;

/// Edge length of one grid cell in pixels.
pub const UNIT_SIZE_PX: u16 = 20;

/// Fixed tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Smallest grid on which the starting snake and a food cell can coexist.
pub const MIN_GRID_CELLS_PER_AXIS: u16 = 4;

/// Starting snake segments, head first.
pub const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 5, y: 5 },
    Position { x: 4, y: 5 },
    Position { x: 3, y: 5 },
];

/// Starting movement direction.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Terminal columns used to draw one logical cell.
pub const CELL_WIDTH_COLS: u16 = 2;

/// Terminal rows used to draw one logical cell.
pub const CELL_HEIGHT_ROWS: u16 = 1;

/// Glyph for an occupied cell (snake or food).
pub const GLYPH_FILLED_CELL: &str = "██";

/// Glyph for an empty cell of the background grid.
pub const GLYPH_EMPTY_CELL: &str = "· ";

pub const COLOR_BACKGROUND: Color = Color::Black;
pub const COLOR_GRID: Color = Color::DarkGray;
pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_FOOD: Color = Color::Red;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the grid from a pixel board and a square unit cell.
    #[must_use]
    pub fn from_pixels(width_px: u16, height_px: u16, unit_px: u16) -> Self {
        debug_assert!(unit_px > 0);
        Self {
            width: width_px / unit_px,
            height: height_px / unit_px,
        }
    }

    /// The 30 x 20 reference grid.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_pixels(BOARD_WIDTH_PX, BOARD_HEIGHT_PX, UNIT_SIZE_PX)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Checks that a session can be started on this grid.
    ///
    /// Both axes must hold at least [`MIN_GRID_CELLS_PER_AXIS`] cells and every
    /// starting segment must lie inside the grid.
    pub fn validate(self) -> Result<Self> {
        let too_small = || SnakeError::GridTooSmall {
            cols: self.width,
            rows: self.height,
        };

        if self.width < MIN_GRID_CELLS_PER_AXIS || self.height < MIN_GRID_CELLS_PER_AXIS {
            return Err(too_small());
        }

        if !INITIAL_SNAKE
            .iter()
            .all(|segment| segment.is_within_bounds(self))
        {
            return Err(too_small());
        }

        Ok(self)
    }
}
