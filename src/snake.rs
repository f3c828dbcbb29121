use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// One grid cell in logical coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, without wrapping.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }
}

/// Snake body plus the direction filter that steers it.
///
/// `direction` is the heading used by the most recent move. Requests are
/// checked against it and stored in `requested`, which the next move consumes.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    requested: Direction,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            requested: direction,
        }
    }

    /// Asks the snake to turn on its next move.
    ///
    /// Returns `false` and leaves the pending heading untouched when `direction`
    /// reverses the heading of the last move. Otherwise the request replaces any
    /// earlier pending one.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.requested = direction;
        true
    }

    /// Returns where the head lands on the next move, wrapped into `bounds`.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        self.head().step(self.requested).wrapped(bounds)
    }

    /// Moves one cell in the pending direction.
    ///
    /// With `grow` set the tail is kept, so the length increases by one.
    pub fn move_forward(&mut self, bounds: GridSize, grow: bool) {
        let next_head = self.next_head_position(bounds);
        self.direction = self.requested;

        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // `from_segments` and `move_forward` never leave the body empty.
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading of the most recent move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading the next move will use.
    #[must_use]
    pub fn requested_direction(&self) -> Direction {
        self.requested
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
