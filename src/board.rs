//! Board state: the 8x8 grid, per-color piece counts and in-place mutation.
//!
//! The search explores positions by applying a move, recursing and undoing it
//! again, so the board is never cloned on the hot path. [`Board::apply_scoped`]
//! ties the undo to a guard's lifetime so early returns cannot skip it.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::constants::{DIMENSION, LAST, MAX_PIECES};
use crate::moves::Move;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Goal zone layout for this color.
    pub fn zones(self) -> &'static GoalZones {
        match self {
            Color::Black => &BLACK_ZONES,
            Color::White => &WHITE_ZONES,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Contents of one cell: `None` is empty.
pub type Cell = Option<Color>;

pub type Point = (usize, usize);

/// Returns true if (x, y) lies on the board.
#[inline]
pub fn on_board(x: usize, y: usize) -> bool {
    x < DIMENSION && y < DIMENSION
}

/// Returns true if (x, y) is one of the four corners.
#[inline]
pub fn is_corner(x: usize, y: usize) -> bool {
    (x == 0 || x == LAST) && (y == 0 || y == LAST)
}

// =============================================================================
// Goal Zones
// =============================================================================

/// Which coordinate a color's goal lines are measured along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Goal lines are rows: the y coordinate picks the line.
    Rows,
    /// Goal lines are columns: the x coordinate picks the line.
    Columns,
}

/// Per-color goal zone layout.
///
/// Black connects row 0 to row 7 and White connects column 0 to column 7.
/// Keeping the orientation here means rules, network search and evaluation
/// never branch on the color themselves.
#[derive(Debug)]
pub struct GoalZones {
    pub axis: Axis,
    /// Line the network search starts from.
    pub start: usize,
    /// Line a network must reach.
    pub end: usize,
}

pub const BLACK_ZONES: GoalZones = GoalZones {
    axis: Axis::Rows,
    start: 0,
    end: LAST,
};

pub const WHITE_ZONES: GoalZones = GoalZones {
    axis: Axis::Columns,
    start: 0,
    end: LAST,
};

impl GoalZones {
    /// The coordinate that selects a goal line.
    #[inline]
    pub fn line_of(&self, x: usize, y: usize) -> usize {
        match self.axis {
            Axis::Rows => y,
            Axis::Columns => x,
        }
    }

    /// Cell at `offset` along goal line `line`.
    #[inline]
    pub fn cell_on_line(&self, line: usize, offset: usize) -> Point {
        match self.axis {
            Axis::Rows => (offset, line),
            Axis::Columns => (line, offset),
        }
    }

    pub fn in_start(&self, x: usize, y: usize) -> bool {
        self.line_of(x, y) == self.start
    }

    pub fn in_end(&self, x: usize, y: usize) -> bool {
        self.line_of(x, y) == self.end
    }

    /// True for a cell in either goal zone.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.in_start(x, y) || self.in_end(x, y)
    }

    pub fn lines(&self) -> [usize; 2] {
        [self.start, self.end]
    }
}

// =============================================================================
// Board
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; DIMENSION]; DIMENSION],
    counts: [usize; 2],
    own: Color,
}

impl Board {
    /// Create an empty board evaluated from `own`'s point of view.
    pub fn new(own: Color) -> Self {
        Self {
            cells: [[None; DIMENSION]; DIMENSION],
            counts: [0; 2],
            own,
        }
    }

    /// The color this board scores positions for.
    pub fn own(&self) -> Color {
        self.own
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(on_board(x, y), "cell ({x}, {y}) is off the board");
        self.cells[x][y]
    }

    /// Overwrite a cell without touching the piece counts.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(on_board(x, y), "cell ({x}, {y}) is off the board");
        self.cells[x][y] = cell;
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.counts[color.index()]
    }

    pub fn total_pieces(&self) -> usize {
        self.counts[0] + self.counts[1]
    }

    /// Place a new piece directly, keeping the counts in step.
    ///
    /// Bypasses the legality rules; meant for building positions.
    pub fn place(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(self.get(x, y).is_none(), "({x}, {y}) is occupied");
        debug_assert!(self.piece_count(color) < MAX_PIECES);
        self.set(x, y, Some(color));
        self.counts[color.index()] += 1;
    }

    /// Play `mv` for `color`. The move must already be known to be legal.
    pub fn apply(&mut self, mv: Move, color: Color) {
        match mv {
            Move::Add { x, y } => {
                debug_assert!(self.get(x, y).is_none());
                self.set(x, y, Some(color));
                self.counts[color.index()] += 1;
            }
            Move::Step {
                to_x,
                to_y,
                from_x,
                from_y,
            } => {
                debug_assert_eq!(self.get(from_x, from_y), Some(color));
                self.set(from_x, from_y, None);
                self.set(to_x, to_y, Some(color));
            }
        }
    }

    /// Exact inverse of [`Board::apply`] for the same `(mv, color)` pair.
    pub fn undo(&mut self, mv: Move, color: Color) {
        match mv {
            Move::Add { x, y } => {
                debug_assert_eq!(self.get(x, y), Some(color));
                self.set(x, y, None);
                self.counts[color.index()] -= 1;
            }
            Move::Step {
                to_x,
                to_y,
                from_x,
                from_y,
            } => {
                debug_assert_eq!(self.get(to_x, to_y), Some(color));
                self.set(to_x, to_y, None);
                self.set(from_x, from_y, Some(color));
            }
        }
    }

    /// Apply `mv` and return a guard that undoes it when dropped.
    pub fn apply_scoped(&mut self, mv: Move, color: Color) -> Applied<'_> {
        self.apply(mv, color);
        Applied {
            board: self,
            mv,
            color,
        }
    }

    /// Coordinates holding `color`, x-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        (0..DIMENSION)
            .flat_map(|x| (0..DIMENSION).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.get(x, y) == Some(color))
    }

    /// Empty coordinates, x-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..DIMENSION)
            .flat_map(|x| (0..DIMENSION).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.get(x, y).is_none())
    }

    /// Clear every cell and count, keeping the assigned color.
    pub fn clear(&mut self) {
        *self = Board::new(self.own);
    }
}

/// A move applied to a board, undone when the guard goes out of scope.
pub struct Applied<'a> {
    board: &'a mut Board,
    mv: Move,
    color: Color,
}

impl Deref for Applied<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Applied<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Applied<'_> {
    fn drop(&mut self) {
        self.board.undo(self.mv, self.color);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..DIMENSION {
            write!(f, "{x} ")?;
        }
        writeln!(f)?;
        for y in 0..DIMENSION {
            write!(f, "{y} ")?;
            for x in 0..DIMENSION {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
