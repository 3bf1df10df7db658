use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::snake::{Direction, Position};

/// Everything a game reads at startup. Built once and passed by reference to
/// the components that need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameSettings {
    pub sound: SoundSettings,
    pub grid: GridSettings,
    pub snake: SnakeStartSettings,
    pub timing: TimingSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SoundSettings {
    pub effects: MuteSettings,
    pub music: MuteSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MuteSettings {
    pub mute: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { rows: 5, cols: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnakeStartSettings {
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl SnakeStartSettings {
    pub fn head(&self) -> Position {
        Position::new(self.start_row, self.start_col)
    }
}

impl Default for SnakeStartSettings {
    fn default() -> Self {
        Self {
            start_row: 2,
            start_col: 1,
            direction: Direction::East,
            length: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSettings {
    pub move_interval_ms: u32,
    pub poll_interval_ms: u32,
    pub menu_poll_interval_ms: u32,
    pub start_delay_ms: u32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            move_interval_ms: 500,
            poll_interval_ms: 10,
            menu_poll_interval_ms: 50,
            start_delay_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSettings {
    pub allow_speeding: bool,
    pub joystick_threshold: f32,
    pub joystick_max: u16,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            allow_speeding: false,
            joystick_threshold: 0.5,
            joystick_max: (1 << 12) - 1,
        }
    }
}

impl Validate for GridSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows < 2 || self.cols < 2 {
            return Err("grid dimensions must be at least 2x2".to_string());
        }
        if self.rows > 32 || self.cols > 32 {
            return Err("grid dimensions must not exceed 32x32".to_string());
        }
        Ok(())
    }
}

impl Validate for TimingSettings {
    fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".to_string());
        }
        if self.move_interval_ms < self.poll_interval_ms {
            return Err("move_interval_ms must be at least poll_interval_ms".to_string());
        }
        if self.move_interval_ms > 5000 {
            return Err("move_interval_ms must not exceed 5000".to_string());
        }
        if self.menu_poll_interval_ms == 0 {
            return Err("menu_poll_interval_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for InputSettings {
    fn validate(&self) -> Result<(), String> {
        if !(self.joystick_threshold > 0.0 && self.joystick_threshold < 1.0) {
            return Err("joystick_threshold must be between 0 and 1".to_string());
        }
        if self.joystick_max < 2 {
            return Err("joystick_max must be at least 2".to_string());
        }
        Ok(())
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        self.timing.validate()?;
        self.input.validate()?;

        let snake = &self.snake;
        if snake.start_row >= self.grid.rows || snake.start_col >= self.grid.cols {
            return Err("snake start position must lie inside the grid".to_string());
        }
        if snake.length == 0 {
            return Err("snake length must be at least 1".to_string());
        }
        let room = match snake.direction {
            Direction::North | Direction::South => self.grid.rows,
            Direction::East | Direction::West => self.grid.cols,
            Direction::None => {
                return Err("snake direction must not be None".to_string());
            }
        };
        if snake.length > room {
            return Err(format!("snake length must not exceed {} in that direction", room));
        }
        if snake.length >= self.grid.rows * self.grid.cols {
            return Err("snake must leave at least one free cell for food".to_string());
        }
        Ok(())
    }
}
