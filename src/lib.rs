//! # reversi-engine
//!
//! A Reversi (Othello) rules engine: board state, move validation,
//! captures, turn order and terminal/tie detection.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: the engine knows nothing about rendering,
//!    input or storage. A caller constructs a [`Board`], feeds it list
//!    positions and renders the returned [`Changes`].
//!
//! 2. **One scan, two uses**: legality and flipping share a single
//!    bracketing routine parameterised by a `(dx, dy)` direction, so a move
//!    is legal exactly when it flips something.
//!
//! 3. **Queries never mutate**: [`Board::possible_moves`],
//!    [`Board::check_victory`] and [`Board::turn_status`] are read-only.
//!    Passing a stuck player is an explicit [`Board::skip_turn`].
//!
//! ## Addressing
//!
//! Cells are `(x, y)` with `x` the column and `y` the row, or a flat list
//! position `x + y * size`. Lookups return `Option<Cell>`: `None` means off
//! the board, a cell with `owner: None` is empty.
//!
//! ## Modules
//!
//! - `core`: seats, identities, configuration, errors
//! - `board`: grid, directions, captures, the [`Board`] engine, snapshots
//! - `rules`: [`Outcome`] and [`TurnStatus`]
//! - `session`: turn-flow controller with automatic passes and win tallies
//!
//! ## Example
//!
//! ```
//! use reversi_engine::{Board, Identity, Outcome, TurnStatus};
//!
//! let mut board = Board::new(
//!     Identity::new("Black").unwrap(),
//!     Identity::new("White").unwrap(),
//!     8,
//! )
//! .unwrap();
//!
//! loop {
//!     match board.turn_status() {
//!         TurnStatus::InProgress => {
//!             let position = board.possible_moves()[0];
//!             board.apply_move(position).unwrap();
//!         }
//!         TurnStatus::AwaitingPass => board.skip_turn(),
//!         TurnStatus::Finished(outcome) => {
//!             assert_ne!(outcome, Outcome::Ongoing);
//!             break;
//!         }
//!     }
//! }
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, EngineError, Identity, PlayerId, PlayerMap, ScanOrder,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub use crate::board::{Board, BoardSnapshot, Cell, Changes, Direction, Position};

pub use crate::rules::{Outcome, TurnStatus};

pub use crate::session::{Session, TurnReport};
