// Facing directions for directional sprites

use std::fmt;
use std::str::FromStr;

/// Direction a character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Direction {
    Up,
    Left,
    #[default]
    Down,
    Right,
}

impl Direction {
    /// Every direction, in the standard spritesheet row order
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Get the label used in configs and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
        }
    }

    /// Get the direction facing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction label is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction: {0:?} (expected up, left, down or right)")]
pub struct DirectionParseError(pub String);

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "left" => Ok(Self::Left),
            "down" => Ok(Self::Down),
            "right" => Ok(Self::Right),
            _ => Err(DirectionParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_down() {
        assert_eq!(Direction::default(), Direction::Down);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_rejects_typos() {
        let err = "dwon".parse::<Direction>().unwrap_err();
        assert_eq!(err, DirectionParseError("dwon".to_string()));
        assert!(err.to_string().contains("dwon"));
    }

    #[test]
    fn test_display_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }
}
