//! Complete games played through the `Board` API.
//!
//! The fixed games here were recorded move by move; the random games check
//! the bookkeeping invariants that must hold after every move.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reversi_engine::{Board, BoardConfig, Identity, Outcome, PlayerId, ScanOrder, TurnStatus};

fn board_with(config: BoardConfig) -> Board {
    Board::with_config(
        Identity::new("Black").unwrap(),
        Identity::new("White").unwrap(),
        config,
    )
    .unwrap()
}

/// Play `policy`'s choice every turn, skipping stuck players, until the game
/// ends. Returns the outcome, the number of moves and the number of passes.
fn play_out(board: &mut Board, mut policy: impl FnMut(&[usize]) -> usize) -> (Outcome, usize, usize) {
    let mut moves = 0;
    let mut passes = 0;
    loop {
        match board.turn_status() {
            TurnStatus::InProgress => {
                let choice = policy(&board.possible_moves());
                board.apply_move(choice).unwrap().expect("policy picked a legal move");
                moves += 1;
            }
            TurnStatus::AwaitingPass => {
                board.skip_turn();
                passes += 1;
            }
            TurnStatus::Finished(outcome) => return (outcome, moves, passes),
        }
    }
}

// =============================================================================
// Recorded games
// =============================================================================

#[test]
fn test_first_move_policy_full_game() {
    const MOVES: [usize; 60] = [
        20, 19, 10, 11, 2, 1, 0, 3, 4, 13, 12, 5, 6, 14, 17, 9, 16, 8, 18, 21, 15, 7, 22, 23, 29,
        24, 32, 37, 42, 34, 26, 33, 38, 43, 30, 25, 41, 31, 39, 40, 44, 45, 46, 47, 48, 49, 50, 51,
        52, 53, 54, 56, 57, 58, 59, 60, 55, 61, 62, 63,
    ];

    let mut board = board_with(BoardConfig::default());
    for (turn, &position) in MOVES.iter().enumerate() {
        assert_eq!(board.turn_status(), TurnStatus::InProgress, "turn {turn}");
        assert_eq!(board.possible_moves()[0], position, "turn {turn}");
        board.apply_move(position).unwrap().unwrap();

        let total: usize = board.piece_counts().values().sum();
        assert_eq!(total, turn + 5);
    }

    assert_eq!(board.pieces(PlayerId::FIRST), 40);
    assert_eq!(board.pieces(PlayerId::SECOND), 24);
    assert_eq!(board.check_victory(), Outcome::Winner(PlayerId::FIRST));
    assert_eq!(
        board.turn_status(),
        TurnStatus::Finished(Outcome::Winner(PlayerId::FIRST))
    );
    assert_eq!(
        board.to_string(),
        [
            "XXXXXXXO", "XXXXXXXO", "XXXXXXXO", "XOXOXXXO", "XOXXOXXO", "XXOXXOXO", "XXXOOXOO",
            "OOOOOOOO",
        ]
        .join("\n")
    );
}

#[test]
fn test_first_move_policy_column_major_same_result() {
    let config = BoardConfig::new(8).with_scan_order(ScanOrder::ColumnMajor);
    let mut board = board_with(config);
    let (outcome, moves, passes) = play_out(&mut board, |m| m[0]);

    assert_eq!(outcome, Outcome::Winner(PlayerId::FIRST));
    assert_eq!((moves, passes), (60, 0));
    assert_eq!(board.pieces(PlayerId::FIRST), 40);
    assert_eq!(board.pieces(PlayerId::SECOND), 24);
}

#[test]
fn test_first_move_policy_small_boards() {
    for order in [ScanOrder::RowMajor, ScanOrder::ColumnMajor] {
        let mut board = board_with(BoardConfig::new(4).with_scan_order(order));
        let (outcome, moves, passes) = play_out(&mut board, |m| m[0]);
        assert_eq!(outcome, Outcome::Winner(PlayerId::FIRST));
        assert_eq!((moves, passes), (12, 1));
        assert_eq!(board.pieces(PlayerId::FIRST), 12);
        assert_eq!(board.pieces(PlayerId::SECOND), 4);

        let mut board = board_with(BoardConfig::new(6).with_scan_order(order));
        let (outcome, moves, passes) = play_out(&mut board, |m| m[0]);
        assert_eq!(outcome, Outcome::Winner(PlayerId::FIRST));
        assert_eq!((moves, passes), (32, 2));
        assert_eq!(board.pieces(PlayerId::FIRST), 24);
        assert_eq!(board.pieces(PlayerId::SECOND), 12);
    }
}

#[test]
fn test_wipeout_in_nine_moves() {
    let game: [(usize, &[usize]); 9] = [
        (20, &[20, 28]),
        (37, &[37, 36]),
        (44, &[44, 36]),
        (21, &[21, 28]),
        (30, &[30, 37]),
        (19, &[19, 20, 27]),
        (12, &[12, 21, 20, 28]),
        (29, &[29, 28]),
        (26, &[26, 19, 27, 28, 29, 35]),
    ];

    let mut board = board_with(BoardConfig::default());
    for (position, expected) in game {
        let changes = board.apply_move(position).unwrap().unwrap();
        assert_eq!(changes.to_vec(), expected, "move at {position}");
    }

    assert_eq!(board.pieces(PlayerId::FIRST), 13);
    assert_eq!(board.pieces(PlayerId::SECOND), 0);
    assert_eq!(board.current_player(), PlayerId::SECOND);
    assert!(board.possible_moves().is_empty());
    assert!(!board.has_any_move(PlayerId::FIRST));
    assert_eq!(
        board.turn_status(),
        TurnStatus::Finished(Outcome::Winner(PlayerId::FIRST))
    );
}

#[test]
fn test_tie_with_pass_on_4x4() {
    let mut board = board_with(BoardConfig::new(4));
    for position in [8, 14, 3, 0, 11, 4, 2, 1, 12, 7] {
        board.apply_move(position).unwrap().unwrap();
    }

    // Black is stuck; White still has a move.
    assert_eq!(board.current_player(), PlayerId::FIRST);
    assert_eq!(board.turn_status(), TurnStatus::AwaitingPass);
    assert!(board.possible_moves().is_empty());
    assert!(board.has_any_move(PlayerId::SECOND));
    assert_eq!(board.check_victory(), Outcome::Ongoing);

    board.skip_turn();
    board.apply_move(13).unwrap().unwrap();
    board.apply_move(15).unwrap().unwrap();

    assert_eq!(board.pieces(PlayerId::FIRST), 8);
    assert_eq!(board.pieces(PlayerId::SECOND), 8);
    assert_eq!(board.check_victory(), Outcome::Tie);
    assert_eq!(board.turn_status(), TurnStatus::Finished(Outcome::Tie));
    assert_eq!(board.to_string(), "OOXX\nOOOO\nXOOX\nXXXX");
}

// =============================================================================
// Random games
// =============================================================================

#[test]
fn test_random_games_keep_counts_consistent() {
    for seed in 0..20u64 {
        let size = [4, 6, 8, 10, 12][seed as usize % 5];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = board_with(BoardConfig::new(size));

        loop {
            match board.turn_status() {
                TurnStatus::InProgress => {
                    let moves = board.possible_moves();
                    let &position = moves.choose(&mut rng).unwrap();
                    let mover = board.current_player();
                    let before = board.piece_counts().clone();

                    let changes = board.apply_move(position).unwrap().unwrap();
                    let after = board.piece_counts().clone();
                    let flipped = changes.flipped().len();

                    assert!(flipped >= 1);
                    assert_eq!(changes.count(), flipped + 1);
                    assert_eq!(after[mover], before[mover] + flipped + 1);
                    assert_eq!(after[mover.opponent()], before[mover.opponent()] - flipped);
                    assert_eq!(board.current_player(), mover.opponent());
                    for changed in changes.positions() {
                        assert_eq!(board.owner(changed), Some(Some(mover)));
                    }
                }
                TurnStatus::AwaitingPass => {
                    assert!(board.has_any_move(board.current_player().opponent()));
                    board.skip_turn();
                }
                TurnStatus::Finished(outcome) => {
                    let counted = board.cells().iter().flatten().fold([0, 0], |mut acc, p| {
                        acc[p.index()] += 1;
                        acc
                    });
                    assert_eq!(counted, [board.pieces(PlayerId::FIRST), board.pieces(PlayerId::SECOND)]);
                    assert_eq!(outcome, board.check_victory());
                    assert!(!board.has_any_move(PlayerId::FIRST));
                    assert!(!board.has_any_move(PlayerId::SECOND));
                    break;
                }
            }
        }
    }
}
