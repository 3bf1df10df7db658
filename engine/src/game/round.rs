use crate::error::EngineError;
use crate::log;
use crate::rng::GameRng;
use crate::settings::GameSettings;
use crate::snake::{Food, Grid, Snake};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// What one move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub ate_food: bool,
    pub outcome: Option<RoundOutcome>,
}

/// Grid, snake and food of one playthrough.
#[derive(Clone, Debug)]
pub struct Round {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
}

impl Round {
    pub fn new(settings: &GameSettings, rng: &mut GameRng) -> Result<Self, EngineError> {
        let mut grid = Grid::new(settings.grid.rows, settings.grid.cols);
        let start = &settings.snake;
        let snake = Snake::new(&mut grid, start.head(), start.direction, start.length)?;
        let food = Food::spawn(&mut grid, rng)?;
        log!(
            "Round started: {}x{} grid, snake at ({}, {}) heading {:?}, seed {}",
            grid.rows(),
            grid.cols(),
            start.start_row,
            start.start_col,
            start.direction,
            rng.seed()
        );
        Ok(Self { grid, snake, food })
    }

    pub fn from_parts(grid: Grid, snake: Snake, food: Food) -> Self {
        Self { grid, snake, food }
    }

    /// Moves the snake one cell, eating the food if the head lands on it.
    pub fn advance(&mut self, rng: &mut GameRng) -> Result<MoveReport, EngineError> {
        let next_head = self.snake.next_head_position(&self.grid, self.snake.direction);
        let ate_food = self.food.is_at(next_head);

        if ate_food {
            self.food.consume(&mut self.grid)?;
            self.snake.grow(&mut self.grid)?;
            self.snake.advance(&mut self.grid)?;
            log!(
                "Bite at ({}, {}), length {}",
                next_head.row,
                next_head.col,
                self.snake.len()
            );

            if self.grid.count_free_positions() > 0 {
                self.food.relocate(&mut self.grid, rng)?;
                if let Some(position) = self.food.position() {
                    log!("Food moved to ({}, {})", position.row, position.col);
                }
            }
        } else {
            self.snake.advance(&mut self.grid)?;
        }

        Ok(MoveReport {
            ate_food,
            outcome: self.outcome(),
        })
    }

    /// Lost on self collision; won once every cell is taken and no food could
    /// be placed.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if self.snake.self_collides() {
            Some(RoundOutcome::Lost)
        } else if self.grid.count_free_positions() == 0 && !self.food.in_canvas() {
            Some(RoundOutcome::Won)
        } else {
            None
        }
    }
}
