//! Network-Player: an alpha-beta engine for the board game Network.
//!
//! ## Usage
//!
//! - `network-player` - Play a demo game against a random mover
//! - `network-player protocol` - Start the text protocol on stdin/stdout
//! - `network-player demo --seed 3` - Replay the demo with another seed
//!
//! Set `RUST_LOG=info` (or `debug` for search statistics) to see game events
//! on stderr.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use network_player::board::Color;
use network_player::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use network_player::player::MachinePlayer;
use network_player::protocol::ProtocolEngine;
use network_player::selfplay::{Outcome, SelfPlay};

/// Network-Player: an alpha-beta engine for the board game Network
#[derive(Parser)]
#[command(name = "network-player")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Protocol {
        /// Color the engine plays
        #[arg(long, value_enum, default_value_t = Side::Black)]
        color: Side,
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64))]
        depth: u32,
    },
    /// Play the engine against a seeded random mover
    Demo {
        /// Color the engine plays
        #[arg(long, value_enum, default_value_t = Side::Black)]
        color: Side,
        /// Search depth in plies
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64))]
        depth: u32,
        /// Seed for the random mover
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Stop after this many moves without a winner
        #[arg(long, default_value_t = 60)]
        max_turns: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol { color, depth }) => {
            let player = MachinePlayer::with_depth(color.into(), depth);
            let mut engine = ProtocolEngine::with_player(player);
            engine.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo {
            color,
            depth,
            seed,
            max_turns,
        }) => {
            run_demo(color.into(), depth, seed, max_turns);
            Ok(())
        }
        None => {
            run_demo(Color::Black, 2, 1, 60);
            Ok(())
        }
    }
}

fn run_demo(color: Color, depth: u32, seed: u64, max_turns: usize) {
    println!("Network-Player: engine ({color}, depth {depth}) vs random mover (seed {seed})\n");

    let mut game = SelfPlay::new(MachinePlayer::with_depth(color, depth), seed, max_turns);
    let record = game.play();

    for (turn, (side, mv)) in record.moves.iter().enumerate() {
        let who = if *side == color { "engine" } else { "random" };
        println!("{:>3}. {:<5} ({who}) {mv}", turn + 1, side.to_string());
    }
    println!("\n{}", game.player().board());

    match record.outcome {
        Outcome::Won(winner) if winner == color => println!("Engine wins as {winner}."),
        Outcome::Won(winner) => println!("Random mover wins as {winner}."),
        Outcome::Stuck(side) => println!("{side} has no legal move."),
        Outcome::TurnLimit => println!("No winner after {} moves.", record.turns()),
    }
}
