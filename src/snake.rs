use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Initial body, head first, three cells pointing right.
const START_BODY: [Cell; 3] = [
    Cell { x: 6, y: 5 },
    Cell { x: 5, y: 5 },
    Cell { x: 4, y: 5 },
];

const START_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: ordered body, heading, and pending growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    growing: bool,
}

impl Snake {
    /// Creates a snake in the fixed starting configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(START_BODY),
            direction: START_DIRECTION,
            growing: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            growing: false,
        }
    }

    /// Restores the starting body and heading.
    pub fn reset(&mut self) {
        self.body = VecDeque::from(START_BODY);
        self.direction = START_DIRECTION;
        self.growing = false;
    }

    /// Advances one cell in the current direction.
    ///
    /// A pending growth keeps the tail (net length +1); otherwise the tail
    /// is dropped. The new head is not bounds-checked here; leaving the
    /// board is a valid transient state detected by the game update.
    pub fn step(&mut self) {
        let (dx, dy) = self.direction.delta();
        let next_head = self.head().offset(dx, dy);

        self.body.push_front(next_head);
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Queues growth for the next step.
    pub fn grow_next(&mut self) {
        self.growing = true;
    }

    /// Sets the heading for the next step.
    ///
    /// Callers must reject reversals into the neck before calling; see
    /// `GameState::steer`.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body always contains at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
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

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
