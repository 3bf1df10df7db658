use crate::snake::Position;

/// Contract violations inside the engine. None of these can be reached through
/// normal play; callers treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    NoFreePosition,
    NoSelectedOption {
        operation: &'static str,
    },
    InvalidSnake(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::OutOfBounds { position, rows, cols } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} grid",
                position.row, position.col, rows, cols
            ),
            EngineError::NoFreePosition => {
                write!(f, "Random free position requested but there is no free position")
            }
            EngineError::NoSelectedOption { operation } => {
                write!(f, "Can't {} because there is no option currently selected", operation)
            }
            EngineError::InvalidSnake(reason) => write!(f, "Invalid snake: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}
