//! Integration tests for the game state machine, through the facade crate.

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::types::{Cell, Direction, GameAction, Phase, GRID_HEIGHT, GRID_WIDTH, SPAWN};

#[test]
fn test_session_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.body(), &[SPAWN]);
    assert_eq!(game.score(), 0);

    // Drive straight into the right wall.
    game.set_food(Cell::new(0, 0));
    while game.tick() {}
    assert_eq!(game.phase(), Phase::GameOver);

    // Restart recovers the initial state.
    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.body(), &[SPAWN]);
    assert_eq!(game.score(), 0);
    assert_eq!(game.episode_id(), 1);
}

#[test]
fn test_eat_scenario() {
    // Body [(10,10)], heading right, food at (11,10): one tick eats it.
    let mut game = GameState::new(12345);
    game.set_food(Cell::new(11, 10));

    assert!(game.tick());
    assert_eq!(game.body(), &[Cell::new(11, 10), Cell::new(10, 10)]);
    assert_eq!(game.score(), 1);
    assert!(!game.body().contains(&game.food()));
}

#[test]
fn test_growth_matches_food_eaten() {
    let mut game = GameState::new(99);

    // Lay a food trail down column 10 and follow it.
    game.apply_action(GameAction::Turn(Direction::Down));
    for (eaten, y) in (11..18).enumerate() {
        game.set_food(Cell::new(10, y));
        assert!(game.tick());
        assert_eq!(game.body().len(), 2 + eaten);
        assert_eq!(game.score(), 1 + eaten as u32);
    }
}

#[test]
fn test_turns_steer_the_head() {
    let mut game = GameState::new(5);
    game.set_food(Cell::new(0, 0));
    let start = game.head();

    game.apply_action(GameAction::Turn(Direction::Down));
    game.tick();
    game.apply_action(GameAction::Turn(Direction::Left));
    game.tick();

    assert_eq!(game.head(), start.offset(-1, 1));
}

#[test]
fn test_reversal_request_is_a_no_op() {
    let mut game = GameState::new(5);
    game.set_food(Cell::new(0, 0));

    // Heading starts Right; Left is the reverse.
    assert!(!game.apply_action(GameAction::Turn(Direction::Left)));
    let start = game.head();
    game.tick();
    assert_eq!(game.head(), start.offset(1, 0));
    assert_eq!(game.heading(), Direction::Right);
}

#[test]
fn test_walls_on_three_sides() {
    // Right, Down and Up are all legal turns from the spawn heading.
    for (heading, steps) in [
        (Direction::Right, (GRID_WIDTH - SPAWN.x) as u32),
        (Direction::Down, (GRID_HEIGHT - SPAWN.y) as u32),
        (Direction::Up, (SPAWN.y + 1) as u32),
    ] {
        let mut game = GameState::new(3);
        game.set_food(Cell::new(0, 0));
        game.apply_action(GameAction::Turn(heading));

        for _ in 0..steps - 1 {
            assert!(game.tick(), "died early heading {:?}", heading);
        }
        assert!(!game.tick(), "survived the wall heading {:?}", heading);
        assert_eq!(game.phase(), Phase::GameOver);
    }
}

#[test]
fn test_left_wall_after_a_detour() {
    // Left is the reverse of the spawn heading, so step down first.
    let mut game = GameState::new(3);
    game.set_food(Cell::new(29, 0));

    game.apply_action(GameAction::Turn(Direction::Down));
    assert!(game.tick());
    game.apply_action(GameAction::Turn(Direction::Left));
    for _ in 0..SPAWN.x {
        assert!(game.tick());
    }
    assert!(!game.tick());
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_self_collision_after_growth() {
    let mut game = GameState::new(8);

    // Grow to length 5 along the row.
    for x in 11..15 {
        game.set_food(Cell::new(x, 10));
        assert!(game.tick());
    }
    assert_eq!(game.body().len(), 5);
    game.set_food(Cell::new(0, 0));

    // Curl back into the body: up, left, down lands on (13,10).
    game.apply_action(GameAction::Turn(Direction::Up));
    assert!(game.tick());
    game.apply_action(GameAction::Turn(Direction::Left));
    assert!(game.tick());
    game.apply_action(GameAction::Turn(Direction::Down));
    assert!(!game.tick());
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_snapshot_round() {
    let mut game = GameState::new(12345);
    game.set_food(Cell::new(11, 10));
    game.tick();

    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);

    assert!(snap.playing());
    assert_eq!(snap.body.as_slice(), game.body());
    assert_eq!(snap.food, game.food());
    assert_eq!(snap.score, 1);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Turn(Direction::Down),
        GameAction::Turn(Direction::Left),
        GameAction::Turn(Direction::Up),
    ];

    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for action in script {
        a.apply_action(action);
        b.apply_action(action);
        a.tick();
        b.tick();
    }

    assert_eq!(a.snapshot(), b.snapshot());
}
