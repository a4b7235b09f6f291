use retro_snake::config::GridGeometry;
use retro_snake::food::Food;
use retro_snake::game::{Collision, GameEvent, GameSession, GameStatus};
use retro_snake::input::Direction;
use retro_snake::snake::{Cell, INITIAL_BODY};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let geometry = GridGeometry::default();
    let mut session = GameSession::new_with_seed(geometry, 42);
    session.food = Food::at(Cell::new(7, 9));

    assert_eq!(session.tick(), vec![GameEvent::Eat]);
    assert_eq!(session.score, 1);
    assert_eq!(session.snake.head(), Cell::new(7, 9));
    assert_eq!(session.snake.len(), 3);

    session.food = Food::at(Cell::new(0, 24));
    assert!(session.steer(Direction::Up));
    assert!(session.tick().is_empty());
    assert_eq!(session.snake.len(), 4);
    assert_eq!(session.snake.head(), Cell::new(7, 8));

    for _ in 0..8 {
        assert!(session.tick().is_empty());
    }
    assert_eq!(session.snake.head(), Cell::new(7, 0));
    assert_eq!(session.status, GameStatus::Running);

    assert_eq!(session.tick(), vec![GameEvent::Wall]);
    assert_eq!(session.status, GameStatus::Halted);
    assert_eq!(session.last_collision, Some(Collision::Wall));
    assert_eq!(session.score, 0);
    assert_eq!(session.snake.segments().copied().collect::<Vec<_>>(), INITIAL_BODY);
    assert!(!session.snake.occupies(session.food.position));

    assert!(session.tick().is_empty());
    assert_eq!(session.snake.head(), Cell::new(6, 9));

    session.food = Food::at(Cell::new(0, 24));
    assert!(session.steer(Direction::Down));
    assert_eq!(session.status, GameStatus::Running);
    assert!(session.tick().is_empty());
    assert_eq!(session.snake.head(), Cell::new(6, 10));
}

#[test]
fn food_never_lands_on_the_snake_over_a_long_seeded_run() {
    let geometry = GridGeometry::default();
    let mut session = GameSession::new_with_seed(geometry, 2024);
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for step in 0..2_000usize {
        if step % 7 == 0 {
            let _ = session.steer(turns[(step / 7) % turns.len()]);
        }
        let _ = session.tick();

        assert!(!session.snake.occupies(session.food.position));
        assert!(!session.snake.is_empty());
        if session.is_running() {
            assert!(session.snake.segments().all(|cell| geometry.contains(*cell)));
        }
    }
}
