//! Moves and their compact text notation.
//!
//! An `Add` is written as its two digits (`30` places a piece at x=3, y=0).
//! A `Step` is written destination first, then source (`4530` moves the piece
//! at (3,0) to (4,5)). Parsing also accepts surrounding brackets and spaces
//! between digits, so `[4 5 3 0]` reads the same as `4530`.

use std::fmt;
use std::str::FromStr;

use crate::board::Point;

/// A move, without the color making it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place a new piece.
    Add { x: usize, y: usize },
    /// Move an existing piece from (`from_x`, `from_y`) to (`to_x`, `to_y`).
    Step {
        to_x: usize,
        to_y: usize,
        from_x: usize,
        from_y: usize,
    },
}

impl Move {
    /// The cell the moving piece ends up on.
    pub fn destination(&self) -> Point {
        match *self {
            Move::Add { x, y } => (x, y),
            Move::Step { to_x, to_y, .. } => (to_x, to_y),
        }
    }

    /// The cell a stepping piece leaves, if any.
    pub fn source(&self) -> Option<Point> {
        match *self {
            Move::Add { .. } => None,
            Move::Step { from_x, from_y, .. } => Some((from_x, from_y)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Add { x, y } => write!(f, "{x}{y}"),
            Move::Step {
                to_x,
                to_y,
                from_x,
                from_y,
            } => write!(f, "{to_x}{to_y}{from_x}{from_y}"),
        }
    }
}

/// Error returned when move text cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    input: String,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid move '{}': expected 2 digits (add) or 4 digits (step)",
            self.input
        )
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let mut digits = Vec::with_capacity(4);
        for ch in inner.chars() {
            if ch.is_whitespace() {
                continue;
            }
            digits.push(ch.to_digit(10).ok_or_else(err)? as usize);
        }

        match digits[..] {
            [x, y] => Ok(Move::Add { x, y }),
            [to_x, to_y, from_x, from_y] => Ok(Move::Step {
                to_x,
                to_y,
                from_x,
                from_y,
            }),
            _ => Err(err()),
        }
    }
}
