use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self::new(spawn_position(rng, bounds, snake))
    }
}

/// Picks a uniformly random free cell by rejection sampling.
///
/// Every cell of the grid is an equally likely candidate; candidates covered by
/// the snake are redrawn. The snake must leave at least one cell free.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    debug_assert!(
        snake.len() < bounds.total_cells(),
        "spawn_position: no free cells on the board ({}x{})",
        bounds.width,
        bounds.height,
    );

    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
