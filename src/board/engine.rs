//! The Reversi board engine.
//!
//! `Board` owns the grid, both identities, the side to move and cached piece
//! counts. It changes only through [`Board::apply_move`] and
//! [`Board::skip_turn`]; everything else is a read-only query.
//!
//! ## Turn flow
//!
//! `apply_move` always hands the turn to the opponent, even when the
//! opponent then has no reply. The caller detects that case with
//! [`Board::turn_status`] (or `possible_moves()` being empty while
//! `check_victory()` is `Ongoing`) and calls `skip_turn`.
//!
//! ```
//! use reversi_engine::{Board, Identity, Outcome};
//!
//! let black = Identity::new("Black").unwrap();
//! let white = Identity::new("White").unwrap();
//! let mut board = Board::new(black, white, 8).unwrap();
//!
//! let first = board.possible_moves()[0];
//! let changes = board.apply_move(first).unwrap().expect("legal move");
//! assert!(changes.count() >= 2);
//! assert_eq!(board.check_victory(), Outcome::Ongoing);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::capture::{self, Changes};
use super::grid::Grid;
use super::position::{Cell, Position};
use super::snapshot::BoardSnapshot;
use crate::core::identity::validate_pair;
use crate::core::{BoardConfig, EngineError, Identity, PlayerId, PlayerMap, ScanOrder};
use crate::rules::{Outcome, TurnStatus};

/// A Reversi board: grid, identities, side to move and piece counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    config: BoardConfig,
    identities: PlayerMap<Identity>,
    grid: Grid,
    current_player: PlayerId,
    /// Cached; recomputed from the whole grid after every move.
    pieces: PlayerMap<usize>,
}

impl Board {
    /// Create a `size x size` board with the standard opening, `first` to move.
    ///
    /// # Errors
    ///
    /// `InvalidSize` for odd sizes or sizes outside `[4, 12]`;
    /// `InvalidIdentity` for blank or identical identities.
    pub fn new(first: Identity, second: Identity, size: usize) -> Result<Self, EngineError> {
        Self::with_config(first, second, BoardConfig::new(size))
    }

    /// Create a board from a full configuration.
    #[instrument(skip_all, fields(size = config.size))]
    pub fn with_config(
        first: Identity,
        second: Identity,
        config: BoardConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        validate_pair(&first, &second)?;

        let mut grid = Grid::new(config.size);
        grid.seed_opening(PlayerId::FIRST, PlayerId::SECOND);
        let pieces = grid.count_pieces();

        debug!(first = %first, second = %second, "new board");
        Ok(Self {
            config,
            identities: PlayerMap::from_pair(first, second),
            grid,
            current_player: PlayerId::FIRST,
            pieces,
        })
    }

    /// Assemble a board from already validated parts.
    pub(super) fn from_parts(
        config: BoardConfig,
        identities: PlayerMap<Identity>,
        grid: Grid,
        current_player: PlayerId,
    ) -> Self {
        let pieces = grid.count_pieces();
        Self {
            config,
            identities,
            grid,
            current_player,
            pieces,
        }
    }

    // === Moves ===

    /// Place the current player's piece at `list_position`.
    ///
    /// Returns `Ok(None)` without touching any state when the cell is
    /// occupied or the placement brackets nothing. Otherwise flips every
    /// bracketed run, recounts pieces, passes the turn to the opponent and
    /// returns the changed positions.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` when `list_position >= size * size`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, list_position: usize) -> Result<Option<Changes>, EngineError> {
        let cells = self.grid.cell_count();
        if list_position >= cells {
            return Err(EngineError::InvalidPosition {
                position: list_position,
                cells,
            });
        }

        let size = self.size();
        let player = self.current_player;
        let origin = Position::from_list_position(list_position, size);

        if self.grid.owner(origin).is_some() {
            debug!("cell already occupied");
            return Ok(None);
        }

        let flipped = capture::captures(&self.grid, origin, player);
        if flipped.is_empty() {
            debug!("placement captures nothing");
            return Ok(None);
        }

        self.grid.set(origin, Some(player));
        for &idx in &flipped {
            trace!(position = idx, "flip");
            self.grid
                .set(Position::from_list_position(idx, size), Some(player));
        }

        self.pieces = self.grid.count_pieces();
        self.current_player = player.opponent();

        debug!(
            flipped = flipped.len(),
            first = self.pieces[PlayerId::FIRST],
            second = self.pieces[PlayerId::SECOND],
            "move applied"
        );
        Ok(Some(Changes::new(list_position, flipped)))
    }

    /// Hand the turn to the other player unconditionally.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn skip_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        debug!(next = %self.current_player, "turn skipped");
    }

    // === Queries ===

    /// Whether the current player may place at `list_position`.
    /// Off-board positions are simply not legal.
    #[must_use]
    pub fn is_legal(&self, list_position: usize) -> bool {
        list_position < self.grid.cell_count()
            && capture::is_placeable(
                &self.grid,
                Position::from_list_position(list_position, self.size()),
                self.current_player,
            )
    }

    /// Every position where the current player can move.
    ///
    /// Ordered by the configured [`ScanOrder`]; callers should rely on
    /// membership, not order.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<usize> {
        self.possible_moves_for(self.current_player)
    }

    /// Every position where `player` could move if it were their turn.
    #[must_use]
    pub fn possible_moves_for(&self, player: PlayerId) -> Vec<usize> {
        let size = self.size();
        self.scan()
            .filter(|&pos| capture::is_placeable(&self.grid, pos, player))
            .map(|pos| pos.list_position(size))
            .collect()
    }

    /// Whether `player` has at least one legal placement.
    #[must_use]
    pub fn has_any_move(&self, player: PlayerId) -> bool {
        self.scan()
            .any(|pos| capture::is_placeable(&self.grid, pos, player))
    }

    /// Terminal-state check.
    ///
    /// `Ongoing` while either side can move (including the case where only
    /// the opponent can, which calls for a pass). Once neither can, the seat
    /// with strictly more pieces wins; equal counts are a tie. Never mutates.
    #[must_use]
    pub fn check_victory(&self) -> Outcome {
        match self.turn_status() {
            TurnStatus::Finished(outcome) => outcome,
            TurnStatus::InProgress | TurnStatus::AwaitingPass => Outcome::Ongoing,
        }
    }

    /// Classify the position for the side to move.
    #[must_use]
    pub fn turn_status(&self) -> TurnStatus {
        if self.has_any_move(self.current_player) {
            return TurnStatus::InProgress;
        }
        if self.has_any_move(self.current_player.opponent()) {
            return TurnStatus::AwaitingPass;
        }
        let outcome = Outcome::from_counts(&self.pieces);
        debug!(?outcome, "no moves left for either side");
        TurnStatus::Finished(outcome)
    }

    fn scan(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .positions(self.config.scan_order == ScanOrder::ColumnMajor)
    }

    // === Accessors ===

    /// Cell at a flat index, `None` when off the board.
    #[must_use]
    pub fn cell(&self, list_position: usize) -> Option<Cell> {
        let owner = self.grid.owner_at(list_position)?;
        Some(Cell {
            position: Position::from_list_position(list_position, self.size()),
            list_position,
            owner,
        })
    }

    /// Cell at signed coordinates, `None` when off the board.
    #[must_use]
    pub fn cell_at(&self, x: isize, y: isize) -> Option<Cell> {
        let owner = self.grid.owner_xy(x, y)?;
        // owner_xy only succeeds for in-range, non-negative coordinates.
        let position = Position::new(x as usize, y as usize);
        Some(Cell {
            position,
            list_position: position.list_position(self.size()),
            owner,
        })
    }

    /// Owner at a flat index: outer `None` off the board, inner `None` empty.
    #[must_use]
    pub fn owner(&self, list_position: usize) -> Option<Option<PlayerId>> {
        self.grid.owner_at(list_position)
    }

    /// Row-major owners of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Option<PlayerId>] {
        self.grid.cells()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.config.size
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_identity(&self) -> &Identity {
        &self.identities[self.current_player]
    }

    #[must_use]
    pub fn pieces(&self, player: PlayerId) -> usize {
        self.pieces[player]
    }

    #[must_use]
    pub fn piece_counts(&self) -> &PlayerMap<usize> {
        &self.pieces
    }

    #[must_use]
    pub fn identity(&self, player: PlayerId) -> &Identity {
        &self.identities[player]
    }

    #[must_use]
    pub fn identities(&self) -> &PlayerMap<Identity> {
        &self.identities
    }

    /// Replace one seat's identity, keeping the position untouched.
    pub fn set_identity(&mut self, player: PlayerId, identity: Identity) -> Result<(), EngineError> {
        let other = &self.identities[player.opponent()];
        match player {
            PlayerId::FIRST => validate_pair(&identity, other)?,
            _ => validate_pair(other, &identity)?,
        }
        self.identities[player] = identity;
        Ok(())
    }
}

impl std::fmt::Display for Board {
    /// One line per row: `.` empty, `X` first seat, `O` second seat.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.grid.cells().chunks(self.size()).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for owner in row {
                let symbol = match owner {
                    None => '.',
                    Some(PlayerId::FIRST) => 'X',
                    Some(_) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
