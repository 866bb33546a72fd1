//! # Engine Constants - Piece Values, Directions and Search Parameters
//!
//! ## Centipawn Valuation
//!
//! Scores are measured in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 300
//! - **Bishop**: 300
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 0
//!
//! The king carries no material value because it is never captured; losing it
//! is expressed through [`MATE_SCORE`] instead. Any score whose magnitude is
//! above [`MATE_THRESHOLD`] means a forced mate was found, and the distance
//! from [`MATE_SCORE`] is the number of plies to it.
//!
//! ## Direction Vectors
//!
//! Directions are `(file delta, rank delta)` pairs. Sliding pieces repeat a
//! direction until they hit the edge or a piece; knights and kings apply each
//! offset once.

/// Squares along one side of the board
pub const BOARD_SIZE: usize = 8;
/// Total number of squares
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Pawns per side at setup
pub const STARTING_PAWNS: usize = 8;

// Material values (centipawns)
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

/// Score of delivering mate at the root; reduced by one per ply of distance
pub const MATE_SCORE: i32 = 100_000;
/// Scores beyond this magnitude are forced mates
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;
/// Alpha-beta window bound
pub const INFINITY: i32 = 1_000_000;

// Search defaults
pub const DEFAULT_MAX_DEPTH: u32 = 4;
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1_500;
/// Hard ceiling on iterative deepening regardless of configuration
pub const MAX_SEARCH_DEPTH: u32 = 32;

// Move ordering weights
pub const ORDER_CAPTURE_MULTIPLIER: i32 = 10;
pub const ORDER_PAWN_ATTACKED_PENALTY: i32 = 350;
pub const ORDER_CASTLE_BONUS: i32 = 50;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, 2),
    (1, 2),
    (-1, -2),
    (1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

/// Back-rank order of pieces at setup, a-file first
pub(crate) const BACK_RANK: [crate::types::PieceKind; BOARD_SIZE] = {
    use crate::types::PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};
