//! Integration tests for network-player
//!
//! These tests drive the engine through its public interface: whole-game
//! scenarios, legality of everything the engine generates, and the text
//! protocol.

use network_player::board::{Board, Color, Point, is_corner};
use network_player::constants::{LAST, MACHINE_WIN, MAX_PIECES, OPPONENT_WIN};
use network_player::eval::score;
use network_player::moves::Move;
use network_player::network::{find_network, has_network};
use network_player::player::MachinePlayer;
use network_player::protocol::ProtocolEngine;
use network_player::rules::{MoveError, all_legal_moves, check_move, is_legal};
use network_player::selfplay::{Outcome, SelfPlay};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn setpos(own: Color, black: &[Point], white: &[Point]) -> Board {
    let mut board = Board::new(own);
    for &(x, y) in black {
        board.place(x, y, Color::Black);
    }
    for &(x, y) in white {
        board.place(x, y, Color::White);
    }
    board
}

/// A mid-game position, both sides still adding pieces.
fn midgame() -> Board {
    setpos(
        Color::Black,
        &[(3, 0), (4, 7), (2, 2), (5, 3), (2, 5), (6, 5)],
        &[(0, 3), (7, 4), (3, 3), (4, 1), (5, 5)],
    )
}

/// Both sides hold ten pieces, so only steps remain.
fn step_phase() -> Board {
    setpos(
        Color::White,
        &[
            (1, 1),
            (1, 3),
            (1, 5),
            (3, 1),
            (3, 3),
            (3, 5),
            (5, 1),
            (5, 3),
            (5, 5),
            (6, 6),
        ],
        &[
            (0, 2),
            (2, 2),
            (2, 4),
            (2, 6),
            (4, 2),
            (4, 4),
            (4, 6),
            (6, 2),
            (0, 5),
            (6, 4),
        ],
    )
}

// =============================================================================
// Apply / undo
// =============================================================================

#[test]
fn test_apply_undo_restores_every_legal_move() {
    for board in [Board::new(Color::Black), midgame(), step_phase()] {
        for color in [Color::Black, Color::White] {
            let mut board = board.clone();
            let before = board.clone();
            for mv in all_legal_moves(color, &board) {
                board.apply(mv, color);
                board.undo(mv, color);
                assert_eq!(board, before, "{color} {mv} not undone");
            }
        }
    }
}

#[test]
fn test_scoped_apply_undoes_on_drop() {
    let mut board = midgame();
    let before = board.clone();
    {
        let applied = board.apply_scoped(Move::Add { x: 6, y: 1 }, Color::Black);
        assert_eq!(applied.get(6, 1), Some(Color::Black));
        assert_eq!(applied.piece_count(Color::Black), 7);
    }
    assert_eq!(board, before);
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_generated_moves_respect_corners_and_goals() {
    for board in [Board::new(Color::Black), midgame(), step_phase()] {
        for color in [Color::Black, Color::White] {
            for mv in all_legal_moves(color, &board) {
                let (x, y) = mv.destination();
                assert!(!is_corner(x, y), "{color} {mv} lands on a corner");
                match color {
                    Color::Black => assert!(x != 0 && x != LAST, "black {mv} in white goal"),
                    Color::White => assert!(y != 0 && y != LAST, "white {mv} in black goal"),
                }
            }
        }
    }
}

#[test]
fn test_move_kind_follows_piece_count() {
    let board = step_phase();
    assert!(
        all_legal_moves(Color::Black, &board)
            .iter()
            .all(|mv| matches!(mv, Move::Step { .. }))
    );
    assert_eq!(
        check_move(Move::Add { x: 6, y: 3 }, Color::Black, &board),
        Err(MoveError::WrongPhase)
    );

    let board = midgame();
    assert!(
        all_legal_moves(Color::White, &board)
            .iter()
            .all(|mv| matches!(mv, Move::Add { .. }))
    );
}

#[test]
fn test_rejection_reasons() {
    let board = midgame();
    let cases = [
        (Move::Add { x: 0, y: 0 }, Color::Black, MoveError::Corner),
        (Move::Add { x: 3, y: 0 }, Color::White, MoveError::Occupied),
        (Move::Add { x: 5, y: 0 }, Color::White, MoveError::OpponentGoal),
        (Move::Add { x: 0, y: 5 }, Color::Black, MoveError::OpponentGoal),
        (Move::Add { x: 8, y: 2 }, Color::Black, MoveError::OutOfBounds),
        (Move::Add { x: 3, y: 1 }, Color::Black, MoveError::Cluster),
        (
            Move::Step {
                to_x: 6,
                to_y: 2,
                from_x: 3,
                from_y: 3,
            },
            Color::Black,
            MoveError::NotOwnPiece,
        ),
    ];
    for (mv, color, expected) in cases {
        assert_eq!(check_move(mv, color, &board), Err(expected), "{color} {mv}");
    }
}

// =============================================================================
// Machine player scenarios
// =============================================================================

#[test]
fn test_first_moves_follow_book_then_stay_legal() {
    let mut player = MachinePlayer::with_depth(Color::Black, 2);
    let mut shadow = Board::new(Color::Black);

    let mv = player.choose_move().unwrap();
    assert_eq!(mv, Move::Add { x: 3, y: 0 });
    shadow.apply(mv, Color::Black);

    let reply = Move::Add { x: 0, y: 4 };
    assert!(player.opponent_move(reply));
    shadow.apply(reply, Color::White);

    let mv = player.choose_move().unwrap();
    assert_eq!(mv, Move::Add { x: 4, y: 7 });
    shadow.apply(mv, Color::Black);

    for _ in 0..3 {
        let reply = all_legal_moves(Color::White, &shadow)[0];
        assert!(player.opponent_move(reply));
        shadow.apply(reply, Color::White);

        let mv = player.choose_move().unwrap();
        assert!(is_legal(mv, Color::Black, &shadow), "engine played illegal {mv}");
        shadow.apply(mv, Color::Black);
        assert_eq!(player.board(), &shadow);
    }
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut player = MachinePlayer::with_depth(Color::White, 1);
    assert!(player.opponent_move(Move::Add { x: 3, y: 0 }));
    let before = player.board().clone();

    assert!(!player.opponent_move(Move::Add { x: 3, y: 0 }));
    assert!(!player.opponent_move(Move::Add { x: 7, y: 7 }));
    assert!(!player.force_move(Move::Add { x: 4, y: 0 }));
    assert!(!player.force_move(Move::Step {
        to_x: 3,
        to_y: 3,
        from_x: 3,
        from_y: 0,
    }));

    assert_eq!(player.board(), &before);
    assert_eq!(player.board().piece_count(Color::Black), 1);
    assert_eq!(player.board().piece_count(Color::White), 0);
}

#[test]
fn test_engine_completes_network() {
    let mut player = MachinePlayer::with_depth(Color::Black, 2);
    let setup = [(2, 0), (2, 2), (4, 4), (6, 4), (6, 6)];
    for (x, y) in setup {
        assert!(player.force_move(Move::Add { x, y }));
    }
    assert!(player.opponent_move(Move::Add { x: 1, y: 4 }));
    assert!(player.opponent_move(Move::Add { x: 5, y: 1 }));

    assert_eq!(player.choose_move(), Some(Move::Add { x: 5, y: 7 }));
    assert_eq!(player.winner(), Some(Color::Black));

    let network = find_network(Color::Black, player.board()).unwrap();
    assert!(network.len() >= 6);
    assert_eq!(network.first().map(|p| p.y), Some(0));
    assert_eq!(network.last().map(|p| p.y), Some(LAST));
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_selfplay_keeps_invariants() {
    for (color, seed) in [(Color::Black, 11), (Color::White, 12)] {
        let mut game = SelfPlay::new(MachinePlayer::with_depth(color, 1), seed, 50);
        let record = game.play();

        let mut shadow = Board::new(color);
        for &(side, mv) in &record.moves {
            assert!(is_legal(mv, side, &shadow), "{side} played illegal {mv}");
            shadow.apply(mv, side);
            assert!(shadow.piece_count(side) <= MAX_PIECES);

            let s = score(&shadow, 1, side);
            assert!((OPPONENT_WIN..=MACHINE_WIN).contains(&s));
        }
        assert_eq!(game.player().board(), &shadow);

        match record.outcome {
            Outcome::Won(winner) => assert!(has_network(winner, &shadow)),
            Outcome::Stuck(side) => assert!(all_legal_moves(side, &shadow).is_empty()),
            Outcome::TurnLimit => assert_eq!(record.turns(), 50),
        }
    }
}

// =============================================================================
// Move notation
// =============================================================================

#[test]
fn test_notation_round_trips_generated_moves() {
    for board in [midgame(), step_phase()] {
        for mv in all_legal_moves(Color::Black, &board) {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }
    }
    assert_eq!("[4 5 3 0]".parse::<Move>().map(|mv| mv.source()), Ok(Some((3, 0))));
}

// =============================================================================
// Text protocol
// =============================================================================

#[test]
fn test_protocol_session() {
    let script = "\
1 name
2 new white
3 depth 2
4 play 30
5 genmove
6 play 30
7 winner
8 quit
9 genmove
";
    let mut engine = ProtocolEngine::new();
    let mut out = Vec::new();
    engine.run(script.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    let expected = [
        "=1 network-player\n\n",
        "=2 \n\n",
        "=3 \n\n",
        "=4 \n\n",
        "=5 03\n\n",
        "?6 illegal move: cell not empty\n\n",
        "=7 none\n\n",
        "=8 \n\n",
    ]
    .concat();
    assert_eq!(out, expected);
    assert_eq!(engine.player().board().total_pieces(), 2);
}
