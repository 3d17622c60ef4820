use serde::{Deserialize, Serialize};

use super::config::MAX_SIZE;
use super::state::Position;

/// Fixed-size board the snake lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

impl Grid {
    /// Each side is clamped to `1..=MAX_SIZE`
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.clamp(1, MAX_SIZE),
            rows: rows.clamp(1, MAX_SIZE),
        }
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        let inside = |coord: i32, len: usize| usize::try_from(coord).is_ok_and(|c| c < len);
        inside(pos.x, self.columns) && inside(pos.y, self.rows)
    }

    /// Cell the snake starts from; rounds down on even sizes
    pub fn center(&self) -> Position {
        Position::from_cell(self.columns / 2, self.rows / 2)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.columns).map(move |x| Position::from_cell(x, y)))
    }
}
