//! Minimax game-tree search with alpha-beta pruning.
//!
//! The search works on a single board. Each candidate move is applied through
//! [`Board::apply_scoped`], searched, and undone when the guard drops, so a
//! pruned subtree can never leave a move behind on the board.
//!
//! Scores come from [`crate::eval::score`] and are always from the board's own
//! color's point of view: that side maximizes, the other side minimizes.

use log::debug;

use crate::board::{Board, Color};
use crate::constants::{MACHINE_WIN, OPPONENT_WIN};
use crate::eval::score;
use crate::moves::Move;
use crate::network::has_network;
use crate::rules::all_legal_moves;

/// A move together with the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// `None` at leaves and when the side to move has no legal move
    pub mv: Option<Move>,
    pub score: i32,
}

/// Fixed-depth alpha-beta search.
pub struct Search {
    depth: u32,
    nodes: u64,
}

impl Search {
    pub fn new(depth: u32) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited by the last call to [`Search::best_move`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search for the best move for `color`, which must be `board.own()`.
    ///
    /// The board is returned to its original state.
    pub fn best_move(&mut self, board: &mut Board, color: Color) -> Candidate {
        debug_assert_eq!(color, board.own());
        self.nodes = 0;
        let best = self.alpha_beta(board, true, color, self.depth, OPPONENT_WIN, MACHINE_WIN);
        debug!(
            "depth {} search for {color}: {} nodes, best {} ({})",
            self.depth,
            self.nodes,
            best.mv.map(|mv| mv.to_string()).unwrap_or_else(|| "none".into()),
            best.score
        );
        best
    }

    fn leaf(&self, board: &Board, color: Color, depth: u32) -> Candidate {
        Candidate {
            mv: None,
            score: score(board, self.depth - depth, color.opponent()),
        }
    }

    /// `ours` is true when `color` is the maximizing side.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        ours: bool,
        color: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Candidate {
        self.nodes += 1;

        if depth == 0 || has_network(color, board) || has_network(color.opponent(), board) {
            return self.leaf(board, color, depth);
        }

        let moves = all_legal_moves(color, board);
        // A side that cannot move is scored where it stands.
        let Some(&first) = moves.first() else {
            return self.leaf(board, color, depth);
        };

        let mut best = Candidate {
            mv: Some(first),
            score: if ours { alpha } else { beta },
        };

        for mv in moves {
            let reply = {
                let mut next = board.apply_scoped(mv, color);
                self.alpha_beta(&mut next, !ours, color.opponent(), depth - 1, alpha, beta)
            };

            if ours && reply.score > best.score {
                best = Candidate {
                    mv: Some(mv),
                    score: reply.score,
                };
                alpha = reply.score;
            } else if !ours && reply.score < best.score {
                best = Candidate {
                    mv: Some(mv),
                    score: reply.score,
                };
                beta = reply.score;
            }

            if alpha >= beta {
                return best;
            }
        }

        best
    }
}
