//! Core engine types: seats, identities, configuration, errors.

pub mod config;
pub mod error;
pub mod identity;
pub mod player;

pub use config::{BoardConfig, ScanOrder, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::EngineError;
pub use identity::Identity;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
