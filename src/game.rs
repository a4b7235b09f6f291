use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GridGeometry;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;

/// Whether ticks currently advance the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Halted,
}

/// Discrete signals for the audio collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    /// Food was consumed.
    Eat,
    /// The game ended on a collision.
    Wall,
}

/// What ended the previous game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Complete mutable game state for one process lifetime.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub last_collision: Option<Collision>,
    pub tick_count: u64,
    geometry: GridGeometry,
    rng: StdRng,
}

impl GameSession {
    /// Creates a running session with food placed from OS entropy.
    #[must_use]
    pub fn new(geometry: GridGeometry) -> Self {
        Self::with_rng(geometry, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(geometry: GridGeometry, seed: u64) -> Self {
        Self::with_rng(geometry, StdRng::seed_from_u64(seed))
    }

    fn with_rng(geometry: GridGeometry, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, geometry, snake.body());

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            last_collision: None,
            tick_count: 0,
            geometry,
            rng,
        }
    }

    /// Advances the simulation by one tick and returns the events it raised.
    ///
    /// Order: move, food, walls, self. Does nothing while halted.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        self.tick_count += 1;
        self.snake.advance();
        trace!("tick {}: head at {:?}", self.tick_count, self.snake.head());

        if self.snake.head() == self.food.position {
            self.food
                .relocate(&mut self.rng, self.geometry, self.snake.body());
            self.snake.request_growth();
            self.score += 1;
            debug!(
                "food eaten: score {}, next food at {:?}",
                self.score, self.food.position
            );
            events.push(GameEvent::Eat);
        }

        if !self.geometry.contains(self.snake.head()) {
            events.push(self.end_game(Collision::Wall));
            return events;
        }

        if self.snake.head_overlaps_body() {
            events.push(self.end_game(Collision::SelfBite));
        }

        events
    }

    /// Applies a proposed heading and re-arms the session when accepted.
    ///
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.snake.turn(direction) {
            return false;
        }

        self.set_running(true);
        true
    }

    /// Switches between running and halted.
    pub fn set_running(&mut self, running: bool) {
        let status = if running {
            GameStatus::Running
        } else {
            GameStatus::Halted
        };

        if status != self.status {
            debug!("status {:?} -> {status:?}", self.status);
        }
        self.status = status;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    fn end_game(&mut self, collision: Collision) -> GameEvent {
        info!(
            "game over ({collision:?}) after {} ticks: score {}, length {}",
            self.tick_count,
            self.score,
            self.snake.len()
        );

        self.snake.reset();
        self.food
            .relocate(&mut self.rng, self.geometry, self.snake.body());
        self.score = 0;
        self.last_collision = Some(collision);
        self.set_running(false);

        GameEvent::Wall
    }
}
