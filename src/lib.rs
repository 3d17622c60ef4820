//! Grid Snake - a single-player Snake game
//!
//! This library provides:
//! - Core game rules (game module): grid, snake, food, collision, per-tick update
//! - A repeating tick timer with a cancel handle (clock module)
//! - Key routing (input module) and the session tying rules to a render port
//! - A ratatui terminal front end (render and modes modules)

pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
