//! Move legality and move generation.
//!
//! A move is checked against these rules in order, stopping at the first one
//! that fails:
//!
//! 1. every coordinate is on the board, the destination is empty, and a
//!    stepping piece belongs to the mover
//! 2. the destination is not a corner
//! 3. the destination is not in the *opponent's* goal zone
//! 4. the move does not build a group of three or more adjacent pieces
//! 5. `Add` only below the piece limit, `Step` only at it
//!
//! Checking never mutates the board: the cluster rule looks at the position
//! through a [`Hypothesis`] that already has the piece moved.

use std::fmt;

use crate::board::{on_board, is_corner, Board, Cell, Color, Point};
use crate::constants::MAX_PIECES;
use crate::moves::Move;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate lies off the board
    OutOfBounds,
    /// Destination is not empty
    Occupied,
    /// Step source does not hold one of the mover's pieces
    NotOwnPiece,
    /// Destination is a corner
    Corner,
    /// Destination is in the opponent's goal zone
    OpponentGoal,
    /// Move would form a cluster of three or more
    Cluster,
    /// `Add` with all pieces placed, or `Step` before that
    WrongPhase,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: off the board"),
            MoveError::Occupied => write!(f, "illegal move: cell not empty"),
            MoveError::NotOwnPiece => write!(f, "illegal move: no own piece to step"),
            MoveError::Corner => write!(f, "illegal move: corner"),
            MoveError::OpponentGoal => write!(f, "illegal move: opponent's goal"),
            MoveError::Cluster => write!(f, "illegal move: cluster of three"),
            MoveError::WrongPhase => write!(f, "illegal move: wrong move kind for piece count"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Check `mv` for `color`, reporting the first rule it breaks.
pub fn check_move(mv: Move, color: Color, board: &Board) -> Result<(), MoveError> {
    let (x, y) = mv.destination();
    let source = mv.source();

    if !on_board(x, y) || source.is_some_and(|(sx, sy)| !on_board(sx, sy)) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(x, y).is_some() {
        return Err(MoveError::Occupied);
    }
    if let Some((sx, sy)) = source {
        if board.get(sx, sy) != Some(color) {
            return Err(MoveError::NotOwnPiece);
        }
    }
    if is_corner(x, y) {
        return Err(MoveError::Corner);
    }
    if color.opponent().zones().contains(x, y) {
        return Err(MoveError::OpponentGoal);
    }

    let after = Hypothesis {
        board,
        placed: (x, y),
        vacated: source,
        color,
    };
    if after.forms_cluster() {
        return Err(MoveError::Cluster);
    }

    let full = board.piece_count(color) >= MAX_PIECES;
    match mv {
        Move::Add { .. } if full => Err(MoveError::WrongPhase),
        Move::Step { .. } if !full => Err(MoveError::WrongPhase),
        _ => Ok(()),
    }
}

/// Returns true if `mv` is a legal move for `color`.
#[inline]
pub fn is_legal(mv: Move, color: Color, board: &Board) -> bool {
    check_move(mv, color, board).is_ok()
}

/// Every legal move for `color`.
///
/// Below the piece limit these are `Add` moves over the empty cells; at the
/// limit they are `Step` moves for each own piece to each empty cell. Cells
/// are visited x-major, pieces before destinations, so the order is stable.
pub fn all_legal_moves(color: Color, board: &Board) -> Vec<Move> {
    if board.piece_count(color) >= MAX_PIECES {
        let empties: Vec<Point> = board.empty_cells().collect();
        board
            .pieces(color)
            .flat_map(|(from_x, from_y)| {
                empties.iter().map(move |&(to_x, to_y)| Move::Step {
                    to_x,
                    to_y,
                    from_x,
                    from_y,
                })
            })
            .filter(|&mv| is_legal(mv, color, board))
            .collect()
    } else {
        board
            .empty_cells()
            .map(|(x, y)| Move::Add { x, y })
            .filter(|&mv| is_legal(mv, color, board))
            .collect()
    }
}

/// The 8 cells surrounding (x, y) that lie on the board.
fn neighbors(x: usize, y: usize) -> impl Iterator<Item = Point> {
    (-1isize..=1)
        .flat_map(|dx| (-1isize..=1).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            on_board(nx, ny).then_some((nx, ny))
        })
}

/// A read-only view of the board with one piece already moved.
struct Hypothesis<'a> {
    board: &'a Board,
    placed: Point,
    vacated: Option<Point>,
    color: Color,
}

impl Hypothesis<'_> {
    fn get(&self, p: Point) -> Cell {
        if p == self.placed {
            Some(self.color)
        } else if Some(p) == self.vacated {
            None
        } else {
            self.board.get(p.0, p.1)
        }
    }

    fn friends(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        neighbors(x, y).filter(move |&n| self.get(n) == Some(self.color))
    }

    /// The placed piece may touch at most one friend, and that friend may not
    /// touch any other.
    fn forms_cluster(&self) -> bool {
        let mut friends = self.friends(self.placed);
        match (friends.next(), friends.next()) {
            (None, _) => false,
            (Some(only), None) => self.friends(only).count() >= 2,
            (Some(_), Some(_)) => true,
        }
    }
}
