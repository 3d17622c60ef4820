use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
/// Largest width or height accepted at startup, in cells
pub const MAX_SIZE: usize = 200;

/// Speed tier; each maps to a fixed tick period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Level for a numeric index (0, 1 or 2)
    pub fn from_index(index: i64) -> Option<Level> {
        match index {
            0 => Some(Level::Easy),
            1 => Some(Level::Medium),
            2 => Some(Level::Hard),
            _ => None,
        }
    }

    /// Time between two moves
    pub fn period(self) -> Duration {
        match self {
            Level::Easy => Duration::from_millis(1000),
            Level::Medium => Duration::from_millis(500),
            Level::Hard => Duration::from_millis(200),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }
}

/// Which body segments count for self-collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SelfCollision {
    /// Every segment behind the head is solid, the tail included
    #[default]
    Body,
    /// The tail is free to enter when it moves away on the same tick
    FollowTail,
}

/// Where new food may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum FoodPlacement {
    /// Any cell, including ones under the snake
    #[default]
    Anywhere,
    /// Only cells the snake does not occupy
    AvoidSnake,
}

/// How the end of a round is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum GameOverNotice {
    /// Banner on the board while the next round already runs
    #[default]
    Inline,
    /// Popup that holds the game until a key is pressed
    Modal,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid, in cells
    pub grid_width: usize,
    /// Height of the game grid, in cells
    pub grid_height: usize,
    /// On-screen width of one cell, in terminal columns
    pub cell_width: u16,
    pub level: Level,
    pub self_collision: SelfCollision,
    pub food_placement: FoodPlacement,
    pub notice: GameOverNotice,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_WIDTH,
            grid_height: DEFAULT_HEIGHT,
            cell_width: 2,
            level: Level::Easy,
            self_collision: SelfCollision::Body,
            food_placement: FoodPlacement::Anywhere,
            notice: GameOverNotice::Inline,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_self_collision(mut self, rule: SelfCollision) -> Self {
        self.self_collision = rule;
        self
    }

    pub fn with_food_placement(mut self, placement: FoodPlacement) -> Self {
        self.food_placement = placement;
        self
    }

    pub fn with_notice(mut self, notice: GameOverNotice) -> Self {
        self.notice = notice;
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn tick_period(&self) -> Duration {
        self.level.period()
    }
}

/// Substitution made while reading startup values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFallback {
    /// Nothing was entered
    Empty,
    /// Fewer than three integers, or a token that is not one
    Malformed(String),
    LevelOutOfRange(i64),
    NonPositiveSize { width: i64, height: i64 },
    OversizedGrid { width: i64, height: i64 },
}

impl fmt::Display for ConfigFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFallback::Empty => write!(
                f,
                "No input provided. \
                 Using default values: width={DEFAULT_WIDTH}, height={DEFAULT_HEIGHT}, level=0"
            ),
            ConfigFallback::Malformed(input) => write!(
                f,
                "Invalid input format {input:?}. \
                 Using default values: width={DEFAULT_WIDTH}, height={DEFAULT_HEIGHT}, level=0"
            ),
            ConfigFallback::LevelOutOfRange(level) => {
                write!(f, "Invalid level {level}. Using default level: 0 (EASY)")
            }
            ConfigFallback::NonPositiveSize { width, height } => write!(
                f,
                "Invalid grid size {width}x{height}. \
                 Using default size: {DEFAULT_WIDTH}x{DEFAULT_HEIGHT}"
            ),
            ConfigFallback::OversizedGrid { width, height } => write!(
                f,
                "Grid size {width}x{height} is larger than {MAX_SIZE}x{MAX_SIZE}. \
                 Using default size: {DEFAULT_WIDTH}x{DEFAULT_HEIGHT}"
            ),
        }
    }
}

/// Width, height and level as chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupValues {
    pub width: usize,
    pub height: usize,
    pub level: Level,
}

impl Default for StartupValues {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            level: Level::Easy,
        }
    }
}

impl StartupValues {
    /// Parse a prompt line of the form `<width> <height> <level>`.
    ///
    /// Never fails: anything unusable is replaced by a default and reported
    /// in the returned list. Tokens after the third are ignored.
    pub fn parse_line(line: &str) -> (Self, Vec<ConfigFallback>) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Self::default(), vec![ConfigFallback::Empty]);
        }

        let numbers: Result<Vec<i64>, _> = trimmed
            .split_whitespace()
            .take(3)
            .map(str::parse::<i64>)
            .collect();

        match numbers.as_deref() {
            Ok(&[width, height, level]) => Self::resolve(width, height, level),
            _ => (
                Self::default(),
                vec![ConfigFallback::Malformed(trimmed.to_string())],
            ),
        }
    }

    /// Validate raw numbers, substituting defaults where needed
    pub fn resolve(width: i64, height: i64, level: i64) -> (Self, Vec<ConfigFallback>) {
        let mut values = Self::default();
        let mut fallbacks = Vec::new();

        let max = MAX_SIZE as i64;
        if width <= 0 || height <= 0 {
            fallbacks.push(ConfigFallback::NonPositiveSize { width, height });
        } else if width > max || height > max {
            fallbacks.push(ConfigFallback::OversizedGrid { width, height });
        } else {
            values.width = width as usize;
            values.height = height as usize;
        }

        match Level::from_index(level) {
            Some(level) => values.level = level,
            None => fallbacks.push(ConfigFallback::LevelOutOfRange(level)),
        }

        (values, fallbacks)
    }

    pub fn into_config(self) -> GameConfig {
        GameConfig::new(self.width, self.height).with_level(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.level, Level::Easy);
        assert_eq!(config.self_collision, SelfCollision::Body);
        assert_eq!(config.food_placement, FoodPlacement::Anywhere);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_level(Level::Hard);
        assert_eq!(config.grid(), Grid::new(15, 12));
        assert_eq!(config.tick_period(), Duration::from_millis(200));
    }

    #[test]
    fn test_level_periods_get_shorter() {
        assert!(Level::Easy.period() > Level::Medium.period());
        assert!(Level::Medium.period() > Level::Hard.period());
        assert_eq!(Level::from_index(0), Some(Level::Easy));
        assert_eq!(Level::from_index(1), Some(Level::Medium));
        assert_eq!(Level::from_index(2), Some(Level::Hard));
        assert_eq!(Level::from_index(3), None);
        assert_eq!(Level::from_index(-1), None);
    }

    #[test]
    fn test_parse_empty_line() {
        let (values, fallbacks) = StartupValues::parse_line("   \n");
        assert_eq!(values, StartupValues::default());
        assert_eq!(fallbacks, vec![ConfigFallback::Empty]);
    }

    #[test]
    fn test_parse_valid_line() {
        let (values, fallbacks) = StartupValues::parse_line("30 15 2\n");
        assert!(fallbacks.is_empty());
        assert_eq!(values.width, 30);
        assert_eq!(values.height, 15);
        assert_eq!(values.level, Level::Hard);
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        let (values, fallbacks) = StartupValues::parse_line("10 10 1 whatever");
        assert!(fallbacks.is_empty());
        assert_eq!(values.level, Level::Medium);
    }

    #[test]
    fn test_parse_malformed_uses_all_defaults() {
        for line in ["abc", "10 10", "10 x 1", "10.5 10 1"] {
            let (values, fallbacks) = StartupValues::parse_line(line);
            assert_eq!(values, StartupValues::default(), "line {line:?}");
            assert!(matches!(fallbacks.as_slice(), [ConfigFallback::Malformed(_)]));
        }
    }

    #[test]
    fn test_level_out_of_range_keeps_size() {
        let (values, fallbacks) = StartupValues::parse_line("12 8 7");
        assert_eq!(values.width, 12);
        assert_eq!(values.height, 8);
        assert_eq!(values.level, Level::Easy);
        assert_eq!(fallbacks, vec![ConfigFallback::LevelOutOfRange(7)]);
    }

    #[test]
    fn test_non_positive_size_falls_back() {
        let (values, fallbacks) = StartupValues::resolve(0, 10, 1);
        assert_eq!(values.width, DEFAULT_WIDTH);
        assert_eq!(values.height, DEFAULT_HEIGHT);
        assert_eq!(values.level, Level::Medium);
        assert_eq!(
            fallbacks,
            vec![ConfigFallback::NonPositiveSize { width: 0, height: 10 }]
        );
    }

    #[test]
    fn test_oversized_grid_falls_back() {
        for line in ["4294967294 1 0", "4294967296 4 0", "100000 100000 0", "10 201 2"] {
            let (values, fallbacks) = StartupValues::parse_line(line);
            assert_eq!(values.width, DEFAULT_WIDTH, "line {line:?}");
            assert_eq!(values.height, DEFAULT_HEIGHT, "line {line:?}");
            assert!(matches!(
                fallbacks.first(),
                Some(ConfigFallback::OversizedGrid { .. })
            ));
        }

        let (values, fallbacks) = StartupValues::parse_line("200 200 2");
        assert!(fallbacks.is_empty());
        assert_eq!((values.width, values.height), (MAX_SIZE, MAX_SIZE));
        assert_eq!(values.level, Level::Hard);
    }

    #[test]
    fn test_into_config() {
        let (values, _) = StartupValues::resolve(8, 6, 1);
        let config = values.into_config();
        assert_eq!(config.grid(), Grid::new(8, 6));
        assert_eq!(config.level, Level::Medium);
    }
}
