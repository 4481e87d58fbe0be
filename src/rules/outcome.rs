//! Game outcomes and turn classification.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a victory check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one side can still move.
    Ongoing,
    /// Neither side can move and this seat holds strictly more pieces.
    Winner(PlayerId),
    /// Neither side can move and the piece counts are equal.
    Tie,
}

impl Outcome {
    /// Decide a finished game from its piece counts.
    #[must_use]
    pub fn from_counts(counts: &PlayerMap<usize>) -> Self {
        let first = counts[PlayerId::FIRST];
        let second = counts[PlayerId::SECOND];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => Outcome::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(p) => Some(p),
            _ => None,
        }
    }
}

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStatus {
    /// The current player has at least one legal move.
    InProgress,
    /// The current player has no move but the opponent does; the caller
    /// should `skip_turn`.
    AwaitingPass,
    /// Neither side can move.
    Finished(Outcome),
}
