use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{
    CELL_HEIGHT_ROWS, CELL_WIDTH_COLS, COLOR_BACKGROUND, COLOR_FOOD, COLOR_GRID, COLOR_SNAKE,
    GLYPH_EMPTY_CELL, GLYPH_FILLED_CELL, GridSize,
};
use crate::game::GameState;
use crate::snake::{Position, Snake};

/// Read-only slice of the game handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub grid: GridSize,
    /// Terminal columns and rows per logical cell.
    pub cell_size: (u16, u16),
    pub snake: &'a Snake,
    pub food: Position,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn of(state: &'a GameState) -> Self {
        Self {
            grid: state.bounds(),
            cell_size: (CELL_WIDTH_COLS, CELL_HEIGHT_ROWS),
            snake: &state.snake,
            food: state.food.position,
        }
    }
}

/// Draws the grid, snake and food centered in the frame.
///
/// Returns the terminal area covered by the board so overlays can be placed
/// on top of it.
pub fn render(frame: &mut Frame<'_>, view: BoardView<'_>) -> Rect {
    let area = frame.area();
    frame.render_widget(
        Block::new().style(Style::new().bg(COLOR_BACKGROUND)),
        area,
    );

    let board = board_area(area, view);
    render_grid(frame, board, view);

    for segment in view.snake.segments() {
        fill_cell(frame, board, view, *segment, Style::new().fg(COLOR_SNAKE));
    }
    fill_cell(frame, board, view, view.food, Style::new().fg(COLOR_FOOD));

    board
}

fn render_grid(frame: &mut Frame<'_>, board: Rect, view: BoardView<'_>) {
    let style = Style::new().fg(COLOR_GRID).bg(COLOR_BACKGROUND);
    let buffer = frame.buffer_mut();

    for y in 0..i32::from(view.grid.height) {
        for x in 0..i32::from(view.grid.width) {
            if let Some((col, row)) = cell_to_terminal(board, view, Position { x, y }) {
                buffer.set_string(col, row, GLYPH_EMPTY_CELL, style);
            }
        }
    }
}

fn fill_cell(frame: &mut Frame<'_>, board: Rect, view: BoardView<'_>, cell: Position, style: Style) {
    let Some((col, row)) = cell_to_terminal(board, view, cell) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(col, row, GLYPH_FILLED_CELL, style.bg(COLOR_BACKGROUND));
}

fn board_area(area: Rect, view: BoardView<'_>) -> Rect {
    let (cell_width, cell_height) = view.cell_size;
    let width = view.grid.width.saturating_mul(cell_width).min(area.width);
    let height = view.grid.height.saturating_mul(cell_height).min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Top-left terminal cell of `position`, or `None` if it is clipped.
fn cell_to_terminal(board: Rect, view: BoardView<'_>, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(view.grid) {
        return None;
    }

    let (cell_width, cell_height) = view.cell_size;
    let x = board
        .x
        .checked_add(u16::try_from(position.x).ok()?.checked_mul(cell_width)?)?;
    let y = board
        .y
        .checked_add(u16::try_from(position.y).ok()?.checked_mul(cell_height)?)?;

    if x.checked_add(cell_width)? > board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}
