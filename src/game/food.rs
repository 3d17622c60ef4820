use rand::Rng;
use rand::rngs::StdRng;

use super::config::FoodPlacement;
use super::grid::Grid;
use super::state::{Position, Snake};

/// Source of uniform random indices for food placement
pub trait RandomPort {
    /// A uniformly chosen value in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

impl RandomPort for StdRng {
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Picks the cell for the next piece of food
pub struct FoodSpawner<R> {
    rng: R,
    placement: FoodPlacement,
}

impl<R: RandomPort> FoodSpawner<R> {
    pub fn new(rng: R, placement: FoodPlacement) -> Self {
        Self { rng, placement }
    }

    pub fn spawn(&mut self, grid: Grid, snake: &Snake) -> Position {
        match self.placement {
            FoodPlacement::Anywhere => self.spawn_anywhere(grid),
            FoodPlacement::AvoidSnake => self.spawn_avoid_snake(grid, snake),
        }
    }

    fn spawn_anywhere(&mut self, grid: Grid) -> Position {
        let x = self.rng.below(grid.columns);
        let y = self.rng.below(grid.rows);
        Position::from_cell(x, y)
    }

    fn spawn_avoid_snake(&mut self, grid: Grid, snake: &Snake) -> Position {
        let free: Vec<Position> = grid.cells().filter(|pos| !snake.contains(*pos)).collect();

        // Board is full: nowhere left to avoid the snake
        if free.is_empty() {
            return self.spawn_anywhere(grid);
        }

        free[self.rng.below(free.len())]
    }
}

/// Replays a fixed list of values, wrapping each into range
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn below(&mut self, upper: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % upper
    }
}
