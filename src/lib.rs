//! Network-Player: an alpha-beta engine for the board game Network.
//!
//! Network is played on an 8x8 board by Black and White. Each side places up
//! to ten pieces, then moves them one at a time, trying to build a chain of
//! pieces (a network) linking its two goal lines.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, game limits and scoring parameters
//! - [`board`] - Board state, colors and goal zones
//! - [`moves`] - Move type and its text notation
//! - [`rules`] - Move legality and move generation
//! - [`network`] - Connections between pieces and network detection
//! - [`eval`] - Static position evaluation
//! - [`search`] - Alpha-beta game-tree search
//! - [`player`] - The machine player used by drivers
//! - [`protocol`] - Line-oriented text protocol
//! - [`selfplay`] - Games against a seeded random mover
//!
//! ## Example
//!
//! ```
//! use network_player::board::Color;
//! use network_player::moves::Move;
//! use network_player::player::MachinePlayer;
//!
//! // The engine plays White and searches two plies deep
//! let mut player = MachinePlayer::with_depth(Color::White, 2);
//!
//! // Record Black's move, then let the engine answer
//! player.opponent_move("30".parse::<Move>().unwrap());
//! let reply = player.choose_move().unwrap();
//! println!("Engine plays {reply}");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod moves;
pub mod network;
pub mod player;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod selfplay;
