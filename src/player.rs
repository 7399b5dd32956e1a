//! The machine player: the engine's game-facing interface.
//!
//! A [`MachinePlayer`] owns the board for one game. It records the opponent's
//! moves ([`MachinePlayer::opponent_move`]), accepts set-up moves for its own
//! color ([`MachinePlayer::force_move`]) and picks its own moves
//! ([`MachinePlayer::choose_move`]).
//!
//! ## Example
//!
//! ```
//! use network_player::board::Color;
//! use network_player::moves::Move;
//! use network_player::player::MachinePlayer;
//!
//! let mut player = MachinePlayer::with_depth(Color::Black, 2);
//! assert_eq!(player.choose_move(), Some(Move::Add { x: 3, y: 0 }));
//! assert!(player.opponent_move(Move::Add { x: 0, y: 3 }));
//! ```

use log::{debug, info};

use crate::board::{Board, Color};
use crate::constants::{
    DEFAULT_DEPTH, MAX_PIECES, OPENING_FIRST_OFFSET, OPENING_SECOND_OFFSET, STEP_PHASE_DEPTH,
};
use crate::moves::Move;
use crate::network::has_network;
use crate::rules::check_move;
use crate::search::Search;

/// Engine state for one game.
pub struct MachinePlayer {
    board: Board,
    color: Color,
    depth: u32,
    last_mover: Option<Color>,
}

impl MachinePlayer {
    /// Create a player for `color` searching at the default depth.
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_DEPTH)
    }

    /// Create a player for `color` with a specific search depth.
    pub fn with_depth(color: Color, depth: u32) -> Self {
        Self {
            board: Board::new(color),
            color,
            depth,
            last_mover: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start a new game with the same color and depth.
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_mover = None;
    }

    /// Pick a move for this player's color and play it.
    ///
    /// The first two moves come from the opening book. After that the move is
    /// found by search, at depth 1 once all pieces are on the board. Returns
    /// `None` only when no legal move exists.
    pub fn choose_move(&mut self) -> Option<Move> {
        let mv = match self.opening_move() {
            Some(mv) => {
                debug!("book move {mv} for {}", self.color);
                mv
            }
            None => {
                let depth = if self.board.piece_count(self.color) >= MAX_PIECES {
                    STEP_PHASE_DEPTH
                } else {
                    self.depth
                };
                let best = Search::new(depth).best_move(&mut self.board, self.color);
                match best.mv {
                    Some(mv) => mv,
                    None => {
                        info!("{} has no legal move", self.color);
                        return None;
                    }
                }
            }
        };

        self.board.apply(mv, self.color);
        self.last_mover = Some(self.color);
        Some(mv)
    }

    /// Book move for the current piece count, if it is still playable.
    fn opening_move(&self) -> Option<Move> {
        let zones = self.color.zones();
        let (x, y) = match self.board.piece_count(self.color) {
            0 => zones.cell_on_line(zones.start, OPENING_FIRST_OFFSET),
            1 => zones.cell_on_line(zones.end, OPENING_SECOND_OFFSET),
            _ => return None,
        };
        let mv = Move::Add { x, y };
        check_move(mv, self.color, &self.board).is_ok().then_some(mv)
    }

    /// Record a move by the opponent. Returns false, changing nothing, if
    /// the move is illegal.
    pub fn opponent_move(&mut self, mv: Move) -> bool {
        self.play(mv, self.color.opponent())
    }

    /// Play a move for this player's own color, bypassing search. Returns
    /// false, changing nothing, if the move is illegal.
    pub fn force_move(&mut self, mv: Move) -> bool {
        self.play(mv, self.color)
    }

    fn play(&mut self, mv: Move, color: Color) -> bool {
        match check_move(mv, color, &self.board) {
            Ok(()) => {
                self.board.apply(mv, color);
                self.last_mover = Some(color);
                true
            }
            Err(err) => {
                debug!("rejected {mv} for {color}: {err}");
                false
            }
        }
    }

    /// The winner, if either side has a network.
    ///
    /// When one move completes networks for both sides, the side that made
    /// it loses.
    pub fn winner(&self) -> Option<Color> {
        let black = has_network(Color::Black, &self.board);
        let white = has_network(Color::White, &self.board);
        match (black, white) {
            (true, true) => self.last_mover.map(Color::opponent),
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_legal;

    #[test]
    fn test_black_opening_book() {
        let mut player = MachinePlayer::with_depth(Color::Black, 2);
        assert_eq!(player.choose_move(), Some(Move::Add { x: 3, y: 0 }));
        assert!(player.opponent_move(Move::Add { x: 0, y: 3 }));
        assert_eq!(player.choose_move(), Some(Move::Add { x: 4, y: 7 }));
        assert_eq!(player.board().piece_count(Color::Black), 2);
    }

    #[test]
    fn test_white_opening_book() {
        let mut player = MachinePlayer::with_depth(Color::White, 2);
        assert!(player.opponent_move(Move::Add { x: 3, y: 0 }));
        assert_eq!(player.choose_move(), Some(Move::Add { x: 0, y: 3 }));
        assert!(player.opponent_move(Move::Add { x: 4, y: 7 }));
        assert_eq!(player.choose_move(), Some(Move::Add { x: 7, y: 4 }));
    }

    #[test]
    fn test_book_skipped_when_blocked() {
        let mut player = MachinePlayer::with_depth(Color::Black, 1);
        // Own piece on the second book cell: the book cannot be followed.
        assert!(player.force_move(Move::Add { x: 4, y: 7 }));
        let mv = player.choose_move().unwrap();
        assert_ne!(mv, Move::Add { x: 4, y: 7 });
        assert_eq!(player.board().piece_count(Color::Black), 2);
    }

    #[test]
    fn test_opponent_move_rejects_occupied() {
        let mut player = MachinePlayer::with_depth(Color::Black, 1);
        player.choose_move();
        let before = player.board().clone();
        assert!(!player.opponent_move(Move::Add { x: 3, y: 0 }));
        assert_eq!(player.board(), &before);
    }

    #[test]
    fn test_force_move_validates_own_color() {
        let mut player = MachinePlayer::with_depth(Color::White, 1);
        // Row 0 belongs to Black's goal.
        assert!(!player.force_move(Move::Add { x: 3, y: 0 }));
        assert!(player.force_move(Move::Add { x: 0, y: 3 }));
        assert_eq!(player.board().get(0, 3), Some(Color::White));
    }

    #[test]
    fn test_step_phase_after_ten_pieces() {
        let mut player = MachinePlayer::with_depth(Color::Black, 3);
        let cells = [
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
        ];
        for (x, y) in cells {
            assert!(player.force_move(Move::Add { x, y }));
        }
        let before = player.board().clone();
        let mv = player.choose_move().unwrap();
        assert!(matches!(mv, Move::Step { .. }));
        assert!(is_legal(mv, Color::Black, &before));
        assert_eq!(player.board().piece_count(Color::Black), MAX_PIECES);
    }

    #[test]
    fn test_winner() {
        let mut player = MachinePlayer::with_depth(Color::White, 1);
        assert_eq!(player.winner(), None);
        for (x, y) in [(2, 0), (2, 2), (4, 4), (6, 4), (6, 6), (5, 7)] {
            assert!(player.opponent_move(Move::Add { x, y }));
        }
        assert_eq!(player.winner(), Some(Color::Black));
    }

    #[test]
    fn test_reset() {
        let mut player = MachinePlayer::with_depth(Color::Black, 1);
        player.choose_move();
        player.reset();
        assert_eq!(player.board().total_pieces(), 0);
        assert_eq!(player.choose_move(), Some(Move::Add { x: 3, y: 0 }));
    }
}
