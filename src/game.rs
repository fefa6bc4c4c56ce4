use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::POINTS_PER_FOOD;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::Snake;

/// Complete mutable game state for one session.
///
/// Two states exist: running and stopped. Any collision stops the game and
/// resets the board; the next accepted directional input re-arms it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub running: bool,
    grid: Grid,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::from_rng(grid, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid: Grid, seed: u64) -> Self {
        Self::from_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn from_rng(grid: Grid, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            running: true,
            grid,
            rng,
        }
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Food is checked before the edge and self collisions, against the
    /// same post-step head; the self check runs after the growth decision
    /// since keeping the tail changes what the head can overlap.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        self.snake.step();
        self.check_food_collision();

        if self.head_escaped_board() {
            self.game_over();
            return;
        }

        if self.snake.head_overlaps_body() {
            self.game_over();
        }
    }

    /// Applies a directional input from the frame driver.
    ///
    /// Reversing into the neck is rejected and leaves the heading
    /// unchanged. Any accepted turn re-arms a stopped game.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.snake.direction().opposite() {
            return;
        }

        self.snake.set_direction(direction);
        self.running = true;
    }

    fn check_food_collision(&mut self) {
        if self.snake.head() == self.food.position {
            self.food.relocate(&mut self.rng, self.grid, &self.snake);
            self.snake.grow_next();
            self.score += POINTS_PER_FOOD;
        }
    }

    /// The head moves one cell per tick, so leaving the board always lands
    /// exactly on the sentinel column or row just outside it.
    fn head_escaped_board(&self) -> bool {
        let head = self.snake.head();
        head.x == -1 || head.x == self.grid.count || head.y == -1 || head.y == self.grid.count
    }

    fn game_over(&mut self) {
        self.snake.reset();
        self.food.relocate(&mut self.rng, self.grid, &self.snake);
        self.running = false;
        self.score = 0;
    }
}
