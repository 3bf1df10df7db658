pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logger;
pub mod melody;
pub mod menu;
pub mod peripherals;
pub mod rng;
pub mod settings;
pub mod snake;

#[cfg(test)]
mod testing;

pub use error::EngineError;
pub use game::{Game, GameState};
pub use rng::GameRng;
pub use settings::GameSettings;
