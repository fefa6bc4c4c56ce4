use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed position.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food in a cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Self {
        Self::at(free_cell(rng, grid, snake))
    }

    /// Moves the food to a fresh cell not occupied by the snake.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: Grid, snake: &Snake) {
        self.position = free_cell(rng, grid, snake);
    }
}

/// Draws uniformly random cells until one misses the snake body.
///
/// Each axis is independently uniform over the board, so every free cell is
/// equally likely. Terminates almost surely while the body leaves any cell
/// free; a fully covered board is a broken invariant and asserts.
fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Cell {
    let occupied: HashSet<Cell> = snake.segments().copied().collect();
    assert!(
        occupied.len() < grid.total_cells(),
        "free_cell: snake covers the entire {}x{} board",
        grid.count,
        grid.count,
    );

    let mut candidate = random_cell(rng, grid);
    while occupied.contains(&candidate) {
        candidate = random_cell(rng, grid);
    }
    candidate
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Cell {
    Cell {
        x: rng.gen_range(0..grid.count),
        y: rng.gen_range(0..grid.count),
    }
}
