use std::collections::VecDeque;

use crate::food::occupies;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
///
/// Signed so a head that has just crossed the border is still representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Body the snake starts with and returns to on reset, head first.
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: body cells, heading and pending growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    grow: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the three-cell starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
            grow: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            grow: false,
        }
    }

    /// Restores the starting body and heading and drops any pending growth.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.grow = false;
    }

    /// Queues growth on the next movement tick.
    pub fn request_growth(&mut self) {
        self.grow = true;
    }

    /// Moves one cell in the current direction, keeping the tail when growth
    /// was requested.
    pub fn advance(&mut self) {
        let next_head = self.head().step(self.direction);
        self.body.push_front(next_head);

        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Changes heading unless `direction` reverses the current one.
    ///
    /// Returns whether the change was accepted. The new heading is read on
    /// the next [`Snake::advance`].
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Read-only view of the body, head first.
    #[must_use]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        occupies(&self.body, cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn growth_pending(&self) -> bool {
        self.grow
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
