//! Outcome and turn classification.
//!
//! The board decides *when* a game is over; this module names the results
//! and the rule for turning final piece counts into a winner or a tie.

pub mod outcome;

pub use outcome::{Outcome, TurnStatus};
