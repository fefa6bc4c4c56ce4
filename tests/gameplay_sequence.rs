use esnake::food::Food;
use esnake::game::GameState;
use esnake::grid::{Cell, Grid};
use esnake::input::Direction;

#[test]
fn stepwise_food_pickup_wall_collision_and_restart() {
    let mut state = GameState::new_with_seed(Grid::standard(), 42);

    // Plant food directly in front of the starting head at (6,5).
    state.food = Food::at(Cell { x: 7, y: 5 });

    state.update();
    assert!(state.running);
    assert_eq!(state.score, 5);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Cell { x: 7, y: 5 });

    // Park the food out of the snake's path; the queued growth lands now.
    state.food = Food::at(Cell { x: 0, y: 0 });
    state.update();
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Cell { x: 8, y: 5 });
    assert_eq!(state.score, 5);

    // Drive into the right wall: x goes 8..=24 on-board, then 25 kills.
    for expected_x in 9..=24 {
        state.update();
        assert!(state.running);
        assert_eq!(state.snake.head(), Cell { x: expected_x, y: 5 });
    }

    state.update();
    assert!(!state.running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Cell { x: 6, y: 5 });
    assert!(!state.snake.occupies(state.food.position));

    // Stopped game ignores ticks.
    state.update();
    assert_eq!(state.snake.head(), Cell { x: 6, y: 5 });

    // A reversal after the reset (heading is Right again) stays rejected
    // and does not restart the game; a legal turn does.
    state.steer(Direction::Left);
    assert!(!state.running);
    assert_eq!(state.snake.direction(), Direction::Right);

    state.steer(Direction::Up);
    assert!(state.running);

    state.update();
    assert_eq!(state.snake.head(), Cell { x: 6, y: 4 });
}

#[test]
fn self_collision_after_maneuvering_into_a_loop() {
    let mut state = GameState::new_with_seed(Grid::standard(), 7);

    // Grow to length 5 by feeding four cells along the starting row.
    for x in 7..=10 {
        state.food = Food::at(Cell { x, y: 5 });
        state.update();
        assert!(state.running);
    }
    state.food = Food::at(Cell { x: 0, y: 0 });
    state.update();
    assert_eq!(state.snake.len(), 7);
    assert_eq!(state.score, 20);

    // Tight left-handed loop: up, left, down lands the head on the body.
    state.steer(Direction::Up);
    state.update();
    state.steer(Direction::Left);
    state.update();
    state.steer(Direction::Down);
    state.update();

    assert!(!state.running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Cell { x: 6, y: 5 });
}
