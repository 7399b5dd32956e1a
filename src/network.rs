//! Network detection.
//!
//! Two pieces of the same color are *connected* when one can see the other
//! along a row, column or diagonal with only empty cells between them. A
//! network is a chain of connected pieces that
//!
//! - starts on the color's start line and ends on its end line,
//! - has at least [`MIN_NETWORK_LEN`] pieces and never repeats one,
//! - changes line at every interior piece (no three in a row), and
//! - touches the start line only with its first piece.
//!
//! The search is a depth-first walk over pieces bounded by
//! [`MAX_NETWORK_LEN`], keeping the visited pieces in a bitmask and the path
//! in a fixed array so nothing is allocated while searching.

use crate::board::{on_board, Board, Color, GoalZones, Point};
use crate::constants::{MAX_NETWORK_LEN, MIN_NETWORK_LEN};

/// A piece on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub x: usize,
    pub y: usize,
}

impl Piece {
    pub fn new(color: Color, x: usize, y: usize) -> Self {
        Self { color, x, y }
    }
}

/// The line a connection runs along. Two consecutive connections on the same
/// line are collinear.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Line {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Ray directions: left, right, up, down, up-left, up-right, down-left,
/// down-right.
const RAYS: [(isize, isize, Line); 8] = [
    (-1, 0, Line::Horizontal),
    (1, 0, Line::Horizontal),
    (0, -1, Line::Vertical),
    (0, 1, Line::Vertical),
    (-1, -1, Line::Diagonal),
    (1, -1, Line::AntiDiagonal),
    (-1, 1, Line::AntiDiagonal),
    (1, 1, Line::Diagonal),
];

/// Nearest piece along (dx, dy) from `from`, if it is `color`.
fn ray_hit(board: &Board, color: Color, from: Point, dx: isize, dy: isize) -> Option<Point> {
    let (mut x, mut y) = from;
    loop {
        x = x.checked_add_signed(dx)?;
        y = y.checked_add_signed(dy)?;
        if !on_board(x, y) {
            return None;
        }
        match board.get(x, y) {
            None => continue,
            Some(c) if c == color => return Some((x, y)),
            Some(_) => return None,
        }
    }
}

/// Connected pieces of `at` together with the line each connection runs on.
fn links(board: &Board, color: Color, at: Point) -> impl Iterator<Item = (Point, Line)> + '_ {
    RAYS.iter()
        .filter_map(move |&(dx, dy, line)| ray_hit(board, color, at, dx, dy).map(|p| (p, line)))
}

/// Pieces connected to `piece`, at most one per ray, in ray order.
pub fn connections(piece: Piece, board: &Board) -> Vec<Piece> {
    links(board, piece.color, (piece.x, piece.y))
        .map(|((x, y), _)| Piece::new(piece.color, x, y))
        .collect()
}

/// Total number of connections over all pieces of `color`.
pub fn connection_count(color: Color, board: &Board) -> usize {
    board
        .pieces(color)
        .map(|at| links(board, color, at).count())
        .sum()
}

/// Returns true if `color` has a network on `board`.
pub fn has_network(color: Color, board: &Board) -> bool {
    NetworkSearch::new(board, color).run().is_some()
}

/// The first network found for `color`, from its start line to its end line.
pub fn find_network(color: Color, board: &Board) -> Option<Vec<Piece>> {
    let mut search = NetworkSearch::new(board, color);
    let len = search.run()?;
    Some(
        search.path[..len]
            .iter()
            .map(|&(x, y)| Piece::new(color, x, y))
            .collect(),
    )
}

#[inline]
fn bit((x, y): Point) -> u64 {
    1u64 << (y * 8 + x)
}

struct NetworkSearch<'a> {
    board: &'a Board,
    color: Color,
    zones: &'static GoalZones,
    path: [Point; MAX_NETWORK_LEN],
    visited: u64,
}

impl<'a> NetworkSearch<'a> {
    fn new(board: &'a Board, color: Color) -> Self {
        Self {
            board,
            color,
            zones: color.zones(),
            path: [(0, 0); MAX_NETWORK_LEN],
            visited: 0,
        }
    }

    /// Search from every start-line piece. Returns the length of the path
    /// left in `self.path`.
    fn run(&mut self) -> Option<usize> {
        let board = self.board;
        let zones = self.zones;
        for start in board
            .pieces(self.color)
            .filter(|&(x, y)| zones.in_start(x, y))
        {
            self.path[0] = start;
            self.visited = bit(start);
            if let Some(len) = self.extend(start, None, 1) {
                return Some(len);
            }
        }
        None
    }

    /// Extend a path of `len` pieces ending at `at`, reached along `incoming`.
    fn extend(&mut self, at: Point, incoming: Option<Line>, len: usize) -> Option<usize> {
        if self.zones.in_end(at.0, at.1) {
            return (len >= MIN_NETWORK_LEN).then_some(len);
        }
        if len >= MAX_NETWORK_LEN {
            return None;
        }

        let board = self.board;
        for (next, line) in links(board, self.color, at) {
            if self.visited & bit(next) != 0
                || self.zones.in_start(next.0, next.1)
                || incoming == Some(line)
            {
                continue;
            }
            self.path[len] = next;
            self.visited |= bit(next);
            if let Some(found) = self.extend(next, Some(line), len + 1) {
                return Some(found);
            }
            self.visited &= !bit(next);
        }
        None
    }
}
