//! Flat cell storage for a square board.
//!
//! Cells live in one `Vec` in row-major order (`x + y * size`), which is the
//! same layout as the public list positions, so a list position indexes the
//! vector directly.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::core::{PlayerId, PlayerMap};

/// `size x size` grid of optional owners.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Grid {
    /// Create an empty grid. Size validation is the caller's concern.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Wrap an existing row-major cell vector. Returns `None` when the length
    /// is not `size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<Option<PlayerId>>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }

    /// Place the standard opening: `first` on the main-diagonal center cells,
    /// `second` on the anti-diagonal ones.
    pub fn seed_opening(&mut self, first: PlayerId, second: PlayerId) {
        let half = self.size / 2;
        self.set(Position::new(half, half), Some(first));
        self.set(Position::new(half - 1, half - 1), Some(first));
        self.set(Position::new(half - 1, half), Some(second));
        self.set(Position::new(half, half - 1), Some(second));
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Owner at an on-board position.
    #[inline]
    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<PlayerId> {
        self.cells[pos.list_position(self.size)]
    }

    /// Owner at a flat index. Outer `None` when the index is off the board.
    #[inline]
    #[must_use]
    pub fn owner_at(&self, list_position: usize) -> Option<Option<PlayerId>> {
        self.cells.get(list_position).copied()
    }

    /// Owner at signed coordinates. Outer `None` when off the board.
    #[must_use]
    pub fn owner_xy(&self, x: isize, y: isize) -> Option<Option<PlayerId>> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.owner(Position::new(x, y)))
    }

    #[inline]
    pub fn set(&mut self, pos: Position, owner: Option<PlayerId>) {
        let idx = pos.list_position(self.size);
        self.cells[idx] = owner;
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Option<PlayerId>] {
        &self.cells
    }

    /// Count every seat's pieces with a full pass over the grid.
    #[must_use]
    pub fn count_pieces(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for owner in self.cells.iter().flatten() {
            counts[*owner] += 1;
        }
        counts
    }

    /// Visit every position in the given order.
    pub fn positions(&self, column_major: bool) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |outer| {
            (0..size).map(move |inner| {
                if column_major {
                    Position::new(outer, inner)
                } else {
                    Position::new(inner, outer)
                }
            })
        })
    }
}
