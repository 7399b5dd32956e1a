//! Constants for board geometry, game limits, scoring and search.
//!
//! Everything tunable about the engine lives here, grouped by concern. Runtime
//! knobs (color, depth, seed) come from the command line or the text protocol.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (DIMENSION x DIMENSION).
pub const DIMENSION: usize = 8;

/// Index of the last row/column.
pub const LAST: usize = DIMENSION - 1;

// =============================================================================
// Game Limits
// =============================================================================

/// Pieces each color may hold. `Add` moves stop and `Step` moves start here.
pub const MAX_PIECES: usize = 10;

/// Shortest chain that counts as a network.
pub const MIN_NETWORK_LEN: usize = 6;

/// Longest chain the network search will follow before giving up.
pub const MAX_NETWORK_LEN: usize = 10;

// =============================================================================
// Scoring
// =============================================================================

/// Score of a position the engine has already won.
pub const MACHINE_WIN: i32 = 100;

/// Score of a position the opponent has already won.
pub const OPPONENT_WIN: i32 = -100;

/// Bonus for holding one of the two middle cells of a goal line.
pub const ANCHOR_BONUS: i32 = 4;

/// Bonus for a goal line that holds exactly one own piece.
pub const LONE_GOAL_BONUS: i32 = 4;

/// Penalty for a goal line holding more pieces than this.
pub const CROWDED_GOAL_LIMIT: usize = 2;

/// Penalty applied when a goal line is crowded.
pub const CROWDED_GOAL_PENALTY: i32 = -20;

/// Offsets (along the goal line) of the anchor cells.
pub const ANCHOR_OFFSETS: [usize; 2] = [3, 4];

// =============================================================================
// Search
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Search depth once all pieces are on the board and only steps remain.
pub const STEP_PHASE_DEPTH: u32 = 1;

/// Deepest search the protocol will accept.
pub const MAX_DEPTH: u32 = 6;

// =============================================================================
// Opening Book
// =============================================================================

/// Offset along the start line of the first book move.
pub const OPENING_FIRST_OFFSET: usize = 3;

/// Offset along the end line of the second book move.
pub const OPENING_SECOND_OFFSET: usize = 4;
