use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RopeError};
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl From<Direction> for Point {
    fn from(direction: Direction) -> Point {
        match direction {
            Direction::Up => Point { x: 0, y: -1 },
            Direction::Down => Point { x: 0, y: 1 },
            Direction::Left => Point { x: -1, y: 0 },
            Direction::Right => Point { x: 1, y: 0 },
        }
    }
}

impl TryFrom<&str> for Direction {
    type Error = RopeError;

    fn try_from(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::try_from(c);
        }

        match value.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(RopeError::InvalidDirection(value.to_string())),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = RopeError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            'U' | 'u' => Ok(Direction::Up),
            'D' | 'd' => Ok(Direction::Down),
            'L' | 'l' => Ok(Direction::Left),
            'R' | 'r' => Ok(Direction::Right),
            _ => Err(RopeError::InvalidDirection(value.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        };
        write!(f, "{c}")
    }
}
