use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::{
    config::{GameConfig, SelfCollision},
    food::{FoodSpawner, RandomPort},
    heading::Heading,
    state::{CollisionType, GameState, Position, Snake},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The round was already over; nothing changed
    Idle,
    /// The snake moved one cell
    Moved { ate_food: bool },
    /// The move would collide; the round is over
    Collided(CollisionType),
    /// Ticks are held back while a game-over notice is shown
    Suspended,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    spawner: FoodSpawner<R>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with an entropy-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food sequence is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomPort> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let spawner = FoodSpawner::new(rng, config.food_placement);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh round: one cell in the middle, heading right, new food
    pub fn reset(&mut self) -> GameState {
        let grid = self.config.grid();
        let snake = Snake::new(grid.center(), Heading::Right);
        let food = self.spawner.spawn(grid, &snake);

        trace!(?food, "round reset");
        GameState::new(grid, snake, food, self.config.level)
    }

    /// Replace `state` with a fresh round
    pub fn reset_in_place(&mut self, state: &mut GameState) {
        *state = self.reset();
    }

    /// Change heading unless it reverses the current one.
    ///
    /// Returns whether the request was accepted. Rejection is silent.
    pub fn set_heading(&self, state: &mut GameState, requested: Heading) -> bool {
        if state.snake.heading.is_opposite(requested) {
            return false;
        }
        state.snake.heading = requested;
        true
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.running {
            return TickOutcome::Idle;
        }

        let new_head = state.snake.head().moved_in_heading(state.snake.heading);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.running = false;
            debug!(
                ?collision,
                ?new_head,
                length = state.snake.len(),
                "round ended"
            );
            return TickOutcome::Collided(collision);
        }

        let ate_food = new_head == state.food;
        state.snake.push_head(new_head, ate_food);

        if ate_food {
            state.food = self.spawner.spawn(state.grid, &state.snake);
            trace!(food = ?state.food, length = state.snake.len(), "food eaten");
        }

        state.ticks += 1;
        TickOutcome::Moved { ate_food }
    }

    /// Check if moving the head onto `pos` collides with a wall or the body
    pub fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.grid.in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        let body = state.snake.body_segments();
        let solid = match self.config.self_collision {
            SelfCollision::Body => body,
            // Without growth the tail moves away on this same tick
            SelfCollision::FollowTail if pos != state.food => &body[..body.len().saturating_sub(1)],
            SelfCollision::FollowTail => body,
        };

        if solid.contains(&pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
