//! Games between the engine and a random mover.
//!
//! Used by the demo and by tests to drive the engine through whole games,
//! including the step phase. The random side draws uniformly from its legal
//! moves with a seeded generator, so a seed always replays the same game.

use fastrand::Rng;
use log::info;

use crate::board::Color;
use crate::moves::Move;
use crate::player::MachinePlayer;
use crate::rules::all_legal_moves;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A side completed a network.
    Won(Color),
    /// The side to move had no legal move.
    Stuck(Color),
    /// Neither side won within the turn limit.
    TurnLimit,
}

/// The moves of a finished game, in order, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<(Color, Move)>,
    pub outcome: Outcome,
}

impl GameRecord {
    pub fn turns(&self) -> usize {
        self.moves.len()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            Outcome::Won(color) => Some(color),
            _ => None,
        }
    }
}

/// Plays the engine against a seeded random mover. Black moves first.
pub struct SelfPlay {
    player: MachinePlayer,
    rng: Rng,
    max_turns: usize,
}

impl SelfPlay {
    pub fn new(player: MachinePlayer, seed: u64, max_turns: usize) -> Self {
        Self {
            player,
            rng: Rng::with_seed(seed),
            max_turns,
        }
    }

    pub fn player(&self) -> &MachinePlayer {
        &self.player
    }

    /// Play one game from the player's current position.
    pub fn play(&mut self) -> GameRecord {
        let engine = self.player.color();
        let mut moves = Vec::new();
        let mut to_move = Color::Black;

        let outcome = loop {
            if let Some(winner) = self.player.winner() {
                break Outcome::Won(winner);
            }
            if moves.len() >= self.max_turns {
                break Outcome::TurnLimit;
            }

            let mv = if to_move == engine {
                self.player.choose_move()
            } else {
                self.random_move(to_move)
            };
            let Some(mv) = mv else {
                break Outcome::Stuck(to_move);
            };

            info!("turn {}: {to_move} plays {mv}", moves.len() + 1);
            moves.push((to_move, mv));
            to_move = to_move.opponent();
        };

        match outcome {
            Outcome::Won(color) => info!("{color} wins after {} turns", moves.len()),
            Outcome::Stuck(color) => info!("{color} has no legal move"),
            Outcome::TurnLimit => info!("no winner after {} turns", moves.len()),
        }
        GameRecord { moves, outcome }
    }

    fn random_move(&mut self, color: Color) -> Option<Move> {
        let mv = self
            .rng
            .choice(all_legal_moves(color, self.player.board()))?;
        self.player.opponent_move(mv).then_some(mv)
    }
}
