//! Engine error taxonomy.
//!
//! Only caller faults are errors. Expected gameplay states (occupied cell,
//! placement that captures nothing, no legal moves) are ordinary `None` /
//! empty results.

use super::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(
        "invalid board size {size}: must be an even number between {} and {}",
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    InvalidSize { size: usize },

    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("seat {0} does not exist: a game has seats 0 and 1")]
    InvalidSeat(u8),

    #[error("position {position} is outside the board ({cells} cells)")]
    InvalidPosition { position: usize, cells: usize },

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("the game is already finished")]
    GameFinished,
}
