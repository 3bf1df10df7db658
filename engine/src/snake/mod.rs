mod food;
mod grid;
mod snake;
mod types;

pub use food::Food;
pub use grid::Grid;
pub use snake::Snake;
pub use types::{Cell, Direction, Position};
