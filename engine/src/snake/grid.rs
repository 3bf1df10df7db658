use crate::error::EngineError;
use crate::rng::GameRng;
use super::types::{Cell, Direction, Position};

/// Fixed-size cell store. Each occupied cell belongs to exactly one entity;
/// `put` never vacates anything, so callers keep that invariant themselves.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index_of(&self, pos: Position) -> Result<usize, EngineError> {
        if !self.contains(pos) {
            return Err(EngineError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(pos.row * self.cols + pos.col)
    }

    pub fn get(&self, pos: Position) -> Result<Cell, EngineError> {
        let index = self.index_of(pos)?;
        Ok(self.cells[index])
    }

    pub fn put(&mut self, cell: Cell, pos: Position) -> Result<(), EngineError> {
        let index = self.index_of(pos)?;
        self.cells[index] = cell;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Empty cells in row-major order.
    pub fn free_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.count_free_positions());
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_free() {
                positions.push(Position::new(index / self.cols, index % self.cols));
            }
        }
        positions
    }

    pub fn count_free_positions(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_free()).count()
    }

    /// Callers must make sure `count_free_positions() > 0` first.
    pub fn random_free_position(&self, rng: &mut GameRng) -> Result<Position, EngineError> {
        let free = self.free_positions();
        if free.is_empty() {
            return Err(EngineError::NoFreePosition);
        }
        Ok(free[rng.index(free.len())])
    }

    /// Rows of cells, top to bottom, for renderers.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max {
            0
        } else {
            value + 1
        }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 {
            max - 1
        } else {
            value - 1
        }
    }

    /// The neighbour of `pos` in `direction`, re-entering from the opposite
    /// edge when it would leave the grid.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        match direction {
            Direction::North => Position::new(Self::wrapping_dec(pos.row, self.rows), pos.col),
            Direction::South => Position::new(Self::wrapping_inc(pos.row, self.rows), pos.col),
            Direction::West => Position::new(pos.row, Self::wrapping_dec(pos.col, self.cols)),
            Direction::East => Position::new(pos.row, Self::wrapping_inc(pos.col, self.cols)),
            Direction::None => pos,
        }
    }
}
