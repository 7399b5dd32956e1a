//! Static position evaluation.
//!
//! Scores are always from the point of view of the board's own color and lie
//! in `[OPPONENT_WIN, MACHINE_WIN]`. Finished positions score near the
//! extremes, pulled toward zero by the number of moves it took to get there,
//! so the search prefers quick wins and slow losses.

use crate::board::{Board, Color};
use crate::constants::{
    ANCHOR_BONUS, ANCHOR_OFFSETS, CROWDED_GOAL_LIMIT, CROWDED_GOAL_PENALTY, DIMENSION,
    LONE_GOAL_BONUS, MACHINE_WIN, OPPONENT_WIN,
};
use crate::network::{connection_count, has_network};

/// Score `board` for its own color.
///
/// `moves_so_far` is the number of plies searched to reach the position and
/// `last_mover` the color that played the last of them.
pub fn score(board: &Board, moves_so_far: u32, last_mover: Color) -> i32 {
    let own = board.own();
    let moves = moves_so_far as i32;
    let ours = has_network(own, board);
    let theirs = has_network(own.opponent(), board);

    let score = match (ours, theirs) {
        // Completing the opponent's network along with your own loses.
        (true, true) if last_mover == own => OPPONENT_WIN + (moves - 1) / 2,
        (true, true) => MACHINE_WIN - (moves - 2) / 2,
        (true, false) => MACHINE_WIN - (moves - 1) / 2,
        (false, true) => OPPONENT_WIN + (moves - 2) / 2,
        (false, false) => positional(board, own),
    };
    score.clamp(OPPONENT_WIN, MACHINE_WIN)
}

/// Heuristic value of an unfinished position.
fn positional(board: &Board, own: Color) -> i32 {
    let zones = own.zones();
    let holds = |(x, y): (usize, usize)| board.get(x, y) == Some(own);

    let mut score = 0;
    for line in zones.lines() {
        if ANCHOR_OFFSETS
            .iter()
            .any(|&offset| holds(zones.cell_on_line(line, offset)))
        {
            score += ANCHOR_BONUS;
        }
        let on_line = (0..DIMENSION)
            .filter(|&offset| holds(zones.cell_on_line(line, offset)))
            .count();
        if on_line == 1 {
            score += LONE_GOAL_BONUS;
        } else if on_line > CROWDED_GOAL_LIMIT {
            score += CROWDED_GOAL_PENALTY;
        }
    }

    score + connection_count(own, board) as i32 - connection_count(own.opponent(), board) as i32
}
