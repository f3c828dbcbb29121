use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, INITIAL_DIRECTION, INITIAL_SNAKE};
use crate::error::Result;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;

/// Whether the session still accepts ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunStatus {
    Running,
    Terminated,
}

/// What one call to [`GameState::advance`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved without eating.
    Moved,
    /// The snake ate the food, grew by one and new food was placed.
    Grew,
    /// This tick ended the game. Reported exactly once per session.
    GameOver,
    /// The game had already ended; nothing changed.
    Idle,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: RunStatus,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Starts a session on `bounds` drawing food positions from `rng`.
    ///
    /// Fails when the grid cannot hold the starting snake.
    pub fn new(bounds: GridSize, mut rng: StdRng) -> Result<Self> {
        let bounds = bounds.validate()?;
        let snake = Snake::from_segments(INITIAL_SNAKE.to_vec(), INITIAL_DIRECTION);
        let food = Food::spawn(&mut rng, bounds, &snake);
        debug!("initial food at {:?}", food.position);

        Ok(Self {
            snake,
            food,
            status: RunStatus::Running,
            tick_count: 0,
            bounds,
            rng,
        })
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self> {
        Self::new(bounds, StdRng::seed_from_u64(seed))
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// The head moves one wrapped cell; landing on the food keeps the tail and
    /// replaces the food. The game ends when the head then overlaps the body.
    pub fn advance(&mut self) -> TickOutcome {
        if self.status == RunStatus::Terminated {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;

        let next_head = self.snake.next_head_position(self.bounds);
        let ate = next_head == self.food.position;
        self.snake.move_forward(self.bounds, ate);

        let head = self.snake.head();
        debug_assert!(
            head.is_within_bounds(self.bounds),
            "head {head:?} escaped the {}x{} grid",
            self.bounds.width,
            self.bounds.height,
        );
        trace!("tick {}: head {head:?}", self.tick_count);

        if self.snake.head_overlaps_body() {
            return self.terminate("self-collision");
        }

        if !ate {
            return TickOutcome::Moved;
        }

        if self.snake.len() == self.bounds.total_cells() {
            return self.terminate("board full");
        }

        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        debug!(
            "food eaten at {head:?}, length {}, new food at {:?}",
            self.snake.len(),
            self.food.position
        );
        TickOutcome::Grew
    }

    /// Requests a new heading for the next tick.
    ///
    /// Returns whether the request was accepted. Reversals of the last move and
    /// any request after the game ended are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status == RunStatus::Terminated {
            return false;
        }

        let accepted = self.snake.request_direction(direction);
        if accepted {
            debug!("direction {direction:?} accepted");
        } else {
            debug!(
                "direction {direction:?} rejected while moving {:?}",
                self.snake.direction()
            );
        }
        accepted
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    fn terminate(&mut self, cause: &str) -> TickOutcome {
        self.status = RunStatus::Terminated;
        info!(
            "Game Over ({cause}) after {} ticks, length {}",
            self.tick_count,
            self.snake.len()
        );
        TickOutcome::GameOver
    }
}
