//! Turn-flow controller over a [`Board`](crate::board::Board).
//!
//! A presentation layer that does not want to drive passes and scoring
//! itself can hand moves to a [`Session`], which applies them, passes a
//! stuck player, scores finished games and keeps win tallies across games.

mod controller;

pub use controller::{Session, TurnReport};
