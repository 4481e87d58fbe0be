//! Grid coordinates and flat addressing.
//!
//! Coordinates are `(x, y)`: `x` is the column (0 = left), `y` the row
//! (0 = top). The flat index ("list position") is `x + y * size`, row-major.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A cell coordinate on a board of known size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Flat index of this position on a `size x size` board.
    ///
    /// ```
    /// use reversi_engine::board::Position;
    ///
    /// assert_eq!(Position::new(3, 2).list_position(8), 19);
    /// ```
    #[inline]
    #[must_use]
    pub const fn list_position(self, size: usize) -> usize {
        self.x + self.y * size
    }

    /// Inverse of [`Position::list_position`].
    #[inline]
    #[must_use]
    pub const fn from_list_position(list_position: usize, size: usize) -> Self {
        Self {
            x: list_position % size,
            y: list_position / size,
        }
    }

    /// Step by `(dx, dy)`, returning `None` when the result leaves a
    /// `size x size` board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Self { x, y })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Read-only view of one cell.
///
/// Lookups return `Option<Cell>`: `None` means the coordinate is off the
/// board, `Some(cell)` with `owner: None` means the cell is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub position: Position,
    pub list_position: usize,
    pub owner: Option<PlayerId>,
}

impl Cell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_position_bijection() {
        for size in [4, 6, 8, 10, 12] {
            for idx in 0..size * size {
                let pos = Position::from_list_position(idx, size);
                assert!(pos.x < size && pos.y < size);
                assert_eq!(pos.list_position(size), idx);
            }
        }
    }

    #[test]
    fn test_offset_inside() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset(-1, -1, 4), Some(Position::new(0, 0)));
        assert_eq!(pos.offset(2, 0, 4), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Position::new(0, 2).offset(-1, 0, 4), None);
        assert_eq!(Position::new(2, 0).offset(0, -1, 4), None);
        assert_eq!(Position::new(3, 3).offset(1, 1, 4), None);
        assert_eq!(Position::new(3, 0).offset(0, 4, 4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}
