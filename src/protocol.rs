//! Line-oriented text protocol for driving the engine from another program.
//!
//! The protocol follows the shape of GTP: one command per line, an optional
//! numeric id in front, and a response of `=` (success) or `?` (failure)
//! followed by the id, the message and a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - identify the engine
//! - `list_commands`, `known_command <cmd>` - introspection
//! - `quit` - leave the command loop
//! - `new <black|white>` - start a new game with the engine playing that color
//! - `depth <n>` - set the search depth
//! - `play <move>` - record an opponent move
//! - `force <move>` - play a move for the engine's own color
//! - `genmove` - let the engine choose and play a move
//! - `showboard` - print the board
//! - `winner` - `black`, `white` or `none`
//!
//! Moves use the compact notation of [`crate::moves`]: `30` adds a piece at
//! (3,0) and `4530` steps the piece at (3,0) to (4,5).
//!
//! ## Example
//!
//! ```
//! use network_player::protocol::ProtocolEngine;
//!
//! let mut engine = ProtocolEngine::new();
//! let mut out = Vec::new();
//! engine.run("1 genmove\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("=1 30"));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use log::info;

use crate::board::Color;
use crate::constants::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::moves::Move;
use crate::player::MachinePlayer;
use crate::rules::check_move;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "depth",
    "force",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "new",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    player: MachinePlayer,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    /// Create an engine playing Black at the default depth.
    pub fn new() -> Self {
        Self::with_player(MachinePlayer::with_depth(Color::Black, DEFAULT_DEPTH))
    }

    pub fn with_player(player: MachinePlayer) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &MachinePlayer {
        &self.player
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = match self.execute(&command, args) {
                Ok(message) => (true, message),
                Err(err) => (false, err.to_string()),
            };
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute one command, returning the response text.
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("1".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let name = first_arg(args)?;
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "new" => {
                let color = parse_color(first_arg(args)?)?;
                let depth = self.player.depth();
                self.player = MachinePlayer::with_depth(color, depth);
                info!("new game, engine plays {color} at depth {depth}");
                Ok(String::new())
            }

            "depth" => {
                let depth: u32 = first_arg(args)?
                    .parse()
                    .context("depth must be a number")?;
                if !(1..=MAX_DEPTH).contains(&depth) {
                    bail!("depth must be between 1 and {MAX_DEPTH}");
                }
                self.player.set_depth(depth);
                Ok(String::new())
            }

            "play" => {
                let mv = parse_move(args)?;
                let color = self.player.color().opponent();
                check_move(mv, color, self.player.board())?;
                self.player.opponent_move(mv);
                Ok(String::new())
            }

            "force" => {
                let mv = parse_move(args)?;
                check_move(mv, self.player.color(), self.player.board())?;
                self.player.force_move(mv);
                Ok(String::new())
            }

            "genmove" => match self.player.choose_move() {
                Some(mv) => {
                    info!("{} plays {mv}", self.player.color());
                    Ok(mv.to_string())
                }
                None => Ok("resign".to_string()),
            },

            "showboard" => Ok(format!("\n{}", self.player.board())),

            "winner" => Ok(self
                .player
                .winner()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string())),

            _ => bail!("unknown command: {command}"),
        }
    }
}

fn first_arg<'a>(args: &[&'a str]) -> Result<&'a str> {
    args.first().copied().context("missing argument")
}

fn parse_color(s: &str) -> Result<Color> {
    match s.to_lowercase().as_str() {
        "black" | "b" => Ok(Color::Black),
        "white" | "w" => Ok(Color::White),
        other => bail!("invalid color: {other}"),
    }
}

fn parse_move(args: &[&str]) -> Result<Move> {
    if args.is_empty() {
        bail!("missing argument");
    }
    Ok(args.concat().parse::<Move>()?)
}
