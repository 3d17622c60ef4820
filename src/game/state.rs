use serde::{Deserialize, Serialize};

use super::config::Level;
use super::grid::Grid;
use super::heading::Heading;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of the cell at column `x`, row `y`
    pub fn from_cell(x: usize, y: usize) -> Self {
        Self {
            x: i32::try_from(x).unwrap_or(i32::MAX),
            y: i32::try_from(y).unwrap_or(i32::MAX),
        }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Neighbouring cell in a heading
    pub fn moved_in_heading(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
    /// Current heading
    pub heading: Heading,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Position, heading: Heading) -> Self {
        Self {
            body: vec![head],
            heading,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` when `body` is empty.
    pub fn from_segments(body: Vec<Position>, heading: Heading) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, heading })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    #[cfg(test)]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put `new_head` in front; the tail stays when growing
    pub(crate) fn push_head(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state for one round
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Position,
    pub level: Level,
    pub running: bool,
    /// Moves made this round
    pub ticks: u32,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, food: Position, level: Level) -> Self {
        Self {
            grid,
            snake,
            food,
            level,
            running: true,
            ticks: 0,
        }
    }

    pub fn heading(&self) -> Heading {
        self.snake.heading
    }

    /// Read-only view handed to the render port
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: self.snake.segments(),
            heading: self.snake.heading,
            food: self.food,
            running: self.running,
            level: self.level,
            ticks: self.ticks,
        }
    }
}

/// Everything a presentation adapter needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    /// Snake cells, head first
    pub snake: &'a [Position],
    pub heading: Heading,
    pub food: Position,
    pub running: bool,
    pub level: Level,
    pub ticks: u32,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_heading(Heading::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in_heading(Heading::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in_heading(Heading::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_heading(Heading::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_push_head() {
        let mut snake = Snake::new(Position::new(5, 5), Heading::Right);

        snake.push_head(Position::new(6, 5), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.push_head(Position::new(7, 5), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.tail(), Position::new(6, 5));
    }

    #[test]
    fn test_body_segments_exclude_head() {
        let snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Heading::Right,
        )
        .unwrap();

        assert_eq!(snake.body_segments(), &[Position::new(4, 5), Position::new(3, 5)]);
        assert!(snake.contains(Position::new(5, 5)));
        assert!(Snake::from_segments(Vec::new(), Heading::Up).is_none());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(
            Grid::new(10, 8),
            Snake::new(Position::new(5, 4), Heading::Right),
            Position::new(1, 1),
            Level::Medium,
        );
        let snapshot = state.snapshot();

        assert_eq!(snapshot.grid, Grid::new(10, 8));
        assert_eq!(snapshot.head(), Position::new(5, 4));
        assert_eq!(snapshot.snake_len(), 1);
        assert_eq!(snapshot.food, Position::new(1, 1));
        assert!(snapshot.running);
        assert_eq!(snapshot.level, Level::Medium);
    }
}
