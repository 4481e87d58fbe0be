//! Session: a sequence of games between the same two identities.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Changes};
use crate::core::{BoardConfig, EngineError, Identity, PlayerId, PlayerMap};
use crate::rules::{Outcome, TurnStatus};

/// What happened on one call to [`Session::play`] or [`Session::resolve_turn`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Cells changed by the move, `None` when the move had no effect.
    pub changes: Option<Changes>,
    /// The seat that had to pass after the move, if any.
    pub passed: Option<PlayerId>,
    /// `Ongoing` unless this turn ended the game.
    pub outcome: Outcome,
}

impl TurnReport {
    fn quiet(outcome: Outcome) -> Self {
        Self {
            changes: None,
            passed: None,
            outcome,
        }
    }
}

/// Two identities, the board they are playing on, and their win tallies.
///
/// After every effective move the session settles the position: a stuck
/// player is passed automatically, and a finished game is scored.
///
/// ```
/// use reversi_engine::session::Session;
/// use reversi_engine::core::{BoardConfig, Identity, PlayerId};
///
/// let mut session = Session::new(
///     Identity::new("Ann").unwrap(),
///     Identity::new("Ben").unwrap(),
///     BoardConfig::new(4),
/// )
/// .unwrap();
///
/// let opening = session.board().possible_moves()[0];
/// let report = session.play(opening).unwrap();
/// assert!(report.changes.is_some());
/// assert_eq!(session.board().current_player(), PlayerId::SECOND);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    wins: PlayerMap<u32>,
    outcome: Outcome,
    games_played: u32,
}

impl Session {
    /// Start a session with a fresh board.
    pub fn new(first: Identity, second: Identity, config: BoardConfig) -> Result<Self, EngineError> {
        let board = Board::with_config(first, second, config)?;
        Ok(Self {
            board,
            wins: PlayerMap::with_value(0),
            outcome: Outcome::Ongoing,
            games_played: 0,
        })
    }

    /// Wrap a restored board with the tallies saved alongside it, settling
    /// any pending pass or finished game.
    pub fn resume(board: Board, wins: PlayerMap<u32>, games_played: u32) -> Self {
        let mut session = Self {
            board,
            wins,
            outcome: Outcome::Ongoing,
            games_played,
        };
        session.resolve_turn();
        session
    }

    /// Play at `list_position` for the side to move.
    ///
    /// A move with no effect is reported with `changes: None` and leaves the
    /// session untouched.
    ///
    /// # Errors
    ///
    /// `GameFinished` once the game is over; `InvalidPosition` for
    /// off-board positions.
    #[instrument(skip(self), fields(player = %self.board.current_player()))]
    pub fn play(&mut self, list_position: usize) -> Result<TurnReport, EngineError> {
        if self.outcome.is_finished() {
            return Err(EngineError::GameFinished);
        }

        let Some(changes) = self.board.apply_move(list_position)? else {
            return Ok(TurnReport::quiet(Outcome::Ongoing));
        };

        let mut report = self.resolve_turn();
        report.changes = Some(changes);
        Ok(report)
    }

    /// Pass a stuck player or score a finished game.
    ///
    /// One pass is always enough: `AwaitingPass` means the opponent can move.
    pub fn resolve_turn(&mut self) -> TurnReport {
        if self.outcome.is_finished() {
            return TurnReport::quiet(self.outcome);
        }

        match self.board.turn_status() {
            TurnStatus::InProgress => TurnReport::quiet(Outcome::Ongoing),
            TurnStatus::AwaitingPass => {
                let stuck = self.board.current_player();
                info!(player = %self.board.identity(stuck), "no moves, passing");
                self.board.skip_turn();
                TurnReport {
                    changes: None,
                    passed: Some(stuck),
                    outcome: Outcome::Ongoing,
                }
            }
            TurnStatus::Finished(outcome) => {
                self.finish(outcome);
                TurnReport::quiet(outcome)
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.games_played += 1;
        match outcome.winner() {
            Some(winner) => {
                self.wins[winner] += 1;
                info!(
                    winner = %self.board.identity(winner),
                    pieces = self.board.pieces(winner),
                    "game finished"
                );
            }
            None => info!("game finished in a tie"),
        }
    }

    /// Replace the board with a fresh one, keeping identities and tallies.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        let [first, second] = [PlayerId::FIRST, PlayerId::SECOND]
            .map(|p| self.board.identity(p).clone());
        self.board = Board::with_config(first, second, *self.board.config())?;
        self.outcome = Outcome::Ongoing;
        debug!(games_played = self.games_played, "new game");
        Ok(())
    }

    /// Change a seat's display name.
    pub fn rename_player(&mut self, player: PlayerId, name: &str) -> Result<(), EngineError> {
        let identity = Identity::new(name)?;
        self.board.set_identity(player, identity)
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn identity(&self, player: PlayerId) -> &Identity {
        self.board.identity(player)
    }

    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }

    /// Outcome of the current game, `Ongoing` until it ends.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Games finished in this session.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSnapshot;

    fn session(size: usize) -> Session {
        Session::new(
            Identity::new("Ann").unwrap(),
            Identity::new("Ben").unwrap(),
            BoardConfig::new(size),
        )
        .unwrap()
    }

    fn snapshot(rows: &[&str], to_move: PlayerId) -> BoardSnapshot {
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'X' => Some(PlayerId::FIRST),
                'O' => Some(PlayerId::SECOND),
                _ => None,
            })
            .collect();
        BoardSnapshot {
            identities: PlayerMap::from_pair(
                Identity::new("Ann").unwrap(),
                Identity::new("Ben").unwrap(),
            ),
            size: rows.len(),
            scan_order: Default::default(),
            cells,
            current_player: to_move,
        }
    }

    #[test]
    fn test_no_effect_move_reports_nothing() {
        let mut session = session(4);
        let report = session.play(0).unwrap();
        assert_eq!(report, TurnReport::quiet(Outcome::Ongoing));
        assert_eq!(session.board().current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_move_then_pass() {
        // X plays (2,0) flipping (1,0); O is then left with no placement
        // while X still has (3,0) and (0,3).
        let board = Board::from_snapshot(snapshot(
            &["XO..", "OOOO", "OOOO", ".OOX"],
            PlayerId::FIRST,
        ))
        .unwrap();
        let mut session = Session::resume(board, PlayerMap::with_value(0), 0);
        assert_eq!(session.board().current_player(), PlayerId::FIRST);

        let report = session.play(2).unwrap();
        let changes = report.changes.expect("legal move");
        assert!(changes.contains(1));
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.passed, Some(PlayerId::SECOND));
        assert_eq!(session.board().current_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_resume_scores_finished_board() {
        let board = Board::from_snapshot(snapshot(
            &["XXXX", "XXXX", "XXXX", "XXXO"],
            PlayerId::SECOND,
        ))
        .unwrap();
        let session = Session::resume(board, PlayerMap::from_pair(2, 1), 3);
        assert!(session.is_finished());
        assert_eq!(session.outcome(), Outcome::Winner(PlayerId::FIRST));
        assert_eq!(session.wins(PlayerId::FIRST), 3);
        assert_eq!(session.wins(PlayerId::SECOND), 1);
        assert_eq!(session.games_played(), 4);
    }

    #[test]
    fn test_play_after_finish_is_error() {
        let board = Board::from_snapshot(snapshot(
            &["XXXX", "XXXX", "OOOO", "OOOO"],
            PlayerId::FIRST,
        ))
        .unwrap();
        let mut session = Session::resume(board, PlayerMap::with_value(0), 0);
        assert_eq!(session.outcome(), Outcome::Tie);
        assert_eq!(session.wins(PlayerId::FIRST), 0);
        assert_eq!(session.wins(PlayerId::SECOND), 0);
        assert_eq!(session.play(0), Err(EngineError::GameFinished));
    }

    #[test]
    fn test_new_game_keeps_tallies_and_names() {
        let board = Board::from_snapshot(snapshot(
            &["XXXX", "XXXX", "XXXX", "XXXO"],
            PlayerId::SECOND,
        ))
        .unwrap();
        let mut session = Session::resume(board, PlayerMap::with_value(0), 0);
        session.new_game().unwrap();

        assert!(!session.is_finished());
        assert_eq!(session.wins(PlayerId::FIRST), 1);
        assert_eq!(session.board().pieces(PlayerId::FIRST), 2);
        assert_eq!(session.board().current_player(), PlayerId::FIRST);
        assert_eq!(session.identity(PlayerId::SECOND).name(), "Ben");
    }

    #[test]
    fn test_rename_player() {
        let mut session = session(4);
        session.rename_player(PlayerId::FIRST, "  Dee ").unwrap();
        assert_eq!(session.identity(PlayerId::FIRST).name(), "Dee");
        assert!(session.rename_player(PlayerId::FIRST, "Ben").is_err());
        assert!(session.rename_player(PlayerId::SECOND, " ").is_err());
    }
}
