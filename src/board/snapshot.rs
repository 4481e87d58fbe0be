//! Field-level board capture and restore.
//!
//! A `BoardSnapshot` holds exactly what is needed to rebuild an equivalent
//! `Board`: both identities, size, scan order, every cell owner and the side
//! to move. Restoring writes those fields back directly; it does not replay
//! the opening. `Board` serializes through this type, so deserializing a
//! board runs the same validation as [`Board::from_snapshot`].
//!
//! The byte format is the caller's choice; anything serde supports works.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::Board;
use super::grid::Grid;
use crate::core::config::validate_size;
use crate::core::identity::validate_pair;
use crate::core::{BoardConfig, EngineError, Identity, PlayerId, PlayerMap, ScanOrder};

/// Plain-data image of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub identities: PlayerMap<Identity>,
    pub size: usize,
    #[serde(default)]
    pub scan_order: ScanOrder,
    /// Row-major owners, `size * size` entries.
    pub cells: Vec<Option<PlayerId>>,
    pub current_player: PlayerId,
}

impl Board {
    /// Capture every field needed to rebuild this board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            identities: self.identities().clone(),
            size: self.size(),
            scan_order: self.config().scan_order,
            cells: self.cells().to_vec(),
            current_player: self.current_player(),
        }
    }

    /// Rebuild a board from a snapshot. Piece counts are recomputed.
    ///
    /// # Errors
    ///
    /// `InvalidSize`, `InvalidIdentity`, or `CorruptSnapshot` when the grid
    /// length does not match the size. Seat values are checked when the
    /// snapshot is deserialized.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, EngineError> {
        let BoardSnapshot {
            identities,
            size,
            scan_order,
            cells,
            current_player,
        } = snapshot;

        validate_size(size)?;
        validate_pair(&identities[PlayerId::FIRST], &identities[PlayerId::SECOND])?;

        let found = cells.len();
        let grid = Grid::from_cells(size, cells).ok_or_else(|| {
            EngineError::CorruptSnapshot(format!(
                "expected {} cells for size {size}, found {found}",
                size * size
            ))
        })?;

        debug!(size, %current_player, "board restored");
        Ok(Board::from_parts(
            BoardConfig::new(size).with_scan_order(scan_order),
            identities,
            grid,
            current_player,
        ))
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        board.snapshot()
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = EngineError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_snapshot(snapshot)
    }
}
