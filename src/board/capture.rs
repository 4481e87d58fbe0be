//! Bracketing scan and capture computation.
//!
//! A direction captures when the adjacent cell belongs to the opponent and
//! walking further over opponent cells reaches a cell of the moving player.
//! An empty cell or the board edge before that point captures nothing.
//!
//! Legality and flipping both go through [`bracket_len`], so a placement is
//! legal exactly when [`captures`] is non-empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::grid::Grid;
use super::position::Position;
use crate::core::PlayerId;

/// Flipped positions for one move. Sixteen covers nearly every real move.
pub type Flips = SmallVec<[usize; 16]>;

/// Length of the opponent run bracketed from `origin` toward `dir` for
/// `player`, or 0 when the direction captures nothing.
///
/// `origin` itself is not inspected.
#[must_use]
pub fn bracket_len(grid: &Grid, origin: Position, dir: Direction, player: PlayerId) -> usize {
    let (dx, dy) = dir.delta();
    let opponent = player.opponent();
    let size = grid.size();

    let mut run = 0;
    let mut cursor = origin;
    while let Some(next) = cursor.offset(dx, dy, size) {
        match grid.owner(next) {
            Some(owner) if owner == opponent => run += 1,
            Some(owner) if owner == player => return run,
            _ => return 0,
        }
        cursor = next;
    }
    0
}

/// Whether `player` may place at `origin`: the cell is empty and at least
/// one direction brackets.
#[must_use]
pub fn is_placeable(grid: &Grid, origin: Position, player: PlayerId) -> bool {
    grid.owner(origin).is_none()
        && Direction::ALL
            .iter()
            .any(|&dir| bracket_len(grid, origin, dir, player) > 0)
}

/// Every opponent position `player` would flip by placing at `origin`, in
/// direction order, each run ordered outward from `origin`.
#[must_use]
pub fn captures(grid: &Grid, origin: Position, player: PlayerId) -> Flips {
    let size = grid.size();
    let mut flips = Flips::new();
    for dir in Direction::ALL {
        let run = bracket_len(grid, origin, dir, player);
        let (dx, dy) = dir.delta();
        let mut cursor = origin;
        for _ in 0..run {
            // A non-zero run means every step up to `run` is on the board.
            let Some(next) = cursor.offset(dx, dy, size) else {
                break;
            };
            flips.push(next.list_position(size));
            cursor = next;
        }
    }
    flips
}

/// Positions changed by one applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    placed: usize,
    flipped: Flips,
}

impl Changes {
    pub(crate) fn new(placed: usize, flipped: Flips) -> Self {
        Self { placed, flipped }
    }

    /// The cell the new piece went on.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// The opponent cells that changed owner.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Placed cell followed by every flipped cell.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.placed).chain(self.flipped.iter().copied())
    }

    /// Number of changed cells (always at least 2 for a legal move).
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.flipped.len()
    }

    #[must_use]
    pub fn contains(&self, list_position: usize) -> bool {
        self.placed == list_position || self.flipped.contains(&list_position)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.positions().collect()
    }
}
