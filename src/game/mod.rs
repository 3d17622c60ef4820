//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: the grid, the snake, food placement and the per-tick update.

pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use config::{
    ConfigFallback, DEFAULT_HEIGHT, DEFAULT_WIDTH, FoodPlacement, GameConfig, GameOverNotice,
    Level, MAX_SIZE, SelfCollision, StartupValues,
};
pub use engine::{GameEngine, TickOutcome};
pub use food::{FoodSpawner, RandomPort};
pub use grid::Grid;
pub use heading::Heading;
pub use state::{CollisionType, GameState, Position, Snake, Snapshot};
