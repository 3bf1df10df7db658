use crate::error::EngineError;
use crate::rng::GameRng;
use super::grid::Grid;
use super::types::{Cell, Position};

/// The single collectible of a round. `position` keeps the last placement;
/// `in_canvas` says whether the grid currently shows it.
#[derive(Clone, Debug, Default)]
pub struct Food {
    position: Option<Position>,
    in_canvas: bool,
}

impl Food {
    /// Spawns at a random free cell. The grid must have one.
    pub fn spawn(grid: &mut Grid, rng: &mut GameRng) -> Result<Self, EngineError> {
        let mut food = Self::default();
        let position = grid.random_free_position(rng)?;
        food.place(grid, position)?;
        Ok(food)
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn in_canvas(&self) -> bool {
        self.in_canvas
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.in_canvas && self.position == Some(pos)
    }

    fn place(&mut self, grid: &mut Grid, position: Position) -> Result<(), EngineError> {
        grid.put(Cell::Food, position)?;
        self.position = Some(position);
        self.in_canvas = true;
        Ok(())
    }

    /// Removes the food from the grid. The cell is only vacated if it still
    /// shows food, so a snake head already written there is kept.
    pub fn consume(&mut self, grid: &mut Grid) -> Result<(), EngineError> {
        if let Some(position) = self.position
            && self.in_canvas
            && grid.get(position)? == Cell::Food
        {
            grid.put(Cell::Empty, position)?;
        }
        self.in_canvas = false;
        Ok(())
    }

    /// Moves the food to another free cell. The target is chosen before the
    /// current cell is vacated, so food never reappears where it was.
    pub fn relocate(&mut self, grid: &mut Grid, rng: &mut GameRng) -> Result<(), EngineError> {
        let next = grid.random_free_position(rng)?;
        self.consume(grid)?;
        self.place(grid, next)
    }
}
