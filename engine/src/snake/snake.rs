use std::collections::VecDeque;

use crate::error::EngineError;
use super::grid::Grid;
use super::types::{Cell, Direction, Position};

/// Ordered body from head (front) to tail (back).
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Places a snake of `length` segments on `grid`, head at `head`, body laid
    /// out behind it (opposite to `direction`).
    pub fn new(
        grid: &mut Grid,
        head: Position,
        direction: Direction,
        length: usize,
    ) -> Result<Self, EngineError> {
        if length == 0 {
            return Err(EngineError::InvalidSnake("length must be at least 1".to_string()));
        }
        let backwards = match direction.opposite() {
            Some(backwards) => backwards,
            None if length == 1 => Direction::None,
            None => {
                return Err(EngineError::InvalidSnake(
                    "a snake longer than one segment needs a direction".to_string(),
                ));
            }
        };

        grid.put(Cell::SnakeHead, head)?;
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        let mut segment = head;
        for _ in 1..length {
            segment = grid.step(segment, backwards);
            if body.contains(&segment) {
                return Err(EngineError::InvalidSnake("body wraps onto itself".to_string()));
            }
            grid.put(Cell::SnakeBody, segment)?;
            body.push_back(segment);
        }

        Ok(Self { body, direction })
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Applies a new heading for the next move if the turn is allowed.
    pub fn steer(&mut self, proposed: Direction) -> bool {
        if proposed == self.direction || !self.direction.accepts_turn(proposed) {
            return false;
        }
        self.direction = proposed;
        true
    }

    /// Where the head would land heading `direction`. Pure projection.
    pub fn next_head_position(&self, grid: &Grid, direction: Direction) -> Position {
        grid.step(self.head(), direction)
    }

    /// Shifts the body one cell along the current direction. The tail cell is
    /// vacated unless a `grow` left a duplicate segment there.
    pub fn advance(&mut self, grid: &mut Grid) -> Result<(), EngineError> {
        let next_head = self.next_head_position(grid, self.direction);
        let old_head = self.head();

        self.body.push_front(next_head);
        let Some(tail) = self.body.pop_back() else {
            return Err(EngineError::InvalidSnake("snake has no segments".to_string()));
        };
        if !self.body.contains(&tail) {
            grid.put(Cell::Empty, tail)?;
        }
        if self.body.len() > 1 && self.body[1] == old_head {
            grid.put(Cell::SnakeBody, old_head)?;
        }
        grid.put(Cell::SnakeHead, next_head)?;
        Ok(())
    }

    /// Adds a segment on top of the tail; the next `advance` keeps it.
    pub fn grow(&mut self, grid: &mut Grid) -> Result<(), EngineError> {
        let tail = self.tail();
        if self.body.len() > 1 {
            grid.put(Cell::SnakeBody, tail)?;
        }
        self.body.push_back(tail);
        Ok(())
    }

    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}
