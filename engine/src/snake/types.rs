use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
    None,
}

impl Direction {
    /// `None` has no opposite.
    pub fn opposite(self) -> Option<Direction> {
        match self {
            Direction::North => Some(Direction::South),
            Direction::East => Some(Direction::West),
            Direction::South => Some(Direction::North),
            Direction::West => Some(Direction::East),
            Direction::None => None,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == Some(other)
    }

    /// Whether a snake heading `self` may turn to `proposed`. An idle stick
    /// never overrides the heading, and reversing into the neck is refused.
    pub fn accepts_turn(self, proposed: Direction) -> bool {
        proposed != Direction::None && !self.is_opposite(proposed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

impl Cell {
    pub fn is_free(self) -> bool {
        self == Cell::Empty
    }
}
