use serde::{Deserialize, Serialize};

/// Direction the snake moves on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// The heading pointing the other way
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for one cell in this heading. Rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_symmetric() {
        for heading in Heading::ALL {
            assert_eq!(heading.opposite().opposite(), heading);
            assert!(heading.is_opposite(heading.opposite()));
            assert!(heading.opposite().is_opposite(heading));
            assert!(!heading.is_opposite(heading));
        }
    }

    #[test]
    fn test_perpendicular_headings_are_not_opposite() {
        assert!(!Heading::Up.is_opposite(Heading::Left));
        assert!(!Heading::Up.is_opposite(Heading::Right));
        assert!(!Heading::Left.is_opposite(Heading::Down));
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for heading in Heading::ALL {
            let (dx, dy) = heading.delta();
            let (ox, oy) = heading.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }
}
