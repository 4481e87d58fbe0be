//! Board state and move rules.
//!
//! - [`position`]: coordinates, flat list positions, cell views
//! - [`direction`]: the eight `(dx, dy)` scan directions
//! - [`grid`]: flat row-major cell storage
//! - [`capture`]: the bracketing scan shared by legality and flipping
//! - [`engine`]: [`Board`], the state machine callers drive
//! - [`snapshot`]: field-level capture and restore

pub mod capture;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod position;
pub mod snapshot;

pub use capture::{Changes, Flips};
pub use direction::Direction;
pub use engine::Board;
pub use grid::Grid;
pub use position::{Cell, Position};
pub use snapshot::BoardSnapshot;
