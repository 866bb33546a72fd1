//! Attack detection
//!
//! A piece attacks a square when the generator, run with castling disabled,
//! would produce a capture onto that square if an enemy piece stood there.
//! Instead of generating the whole move list for every enemy piece we test
//! the geometry directly:
//!
//! - pawns attack the two forward diagonals only (never the push square)
//! - knights and kings attack their fixed offsets
//! - sliders attack along their lines up to and including the first
//!   occupied square
//!
//! En passant never matters here: its victim is a pawn, not a king, and
//! no other caller asks about the en passant destination square.

use crate::board::Board;
use crate::types::*;

/// Check if any live piece of `by` attacks `target`
///
/// # Arguments
///
/// * `board` - Position to inspect
/// * `target` - Square being tested
/// * `by` - Team whose pieces might attack it
///
/// # Returns
///
/// `true` as soon as one attacker is found
pub fn is_square_attacked(board: &Board, target: Square, by: Team) -> bool {
    board.pieces(by).any(|piece| attacks_square(board, piece, target))
}

/// Check if one piece attacks `target` on the given board
pub fn attacks_square(board: &Board, piece: &Piece, target: Square) -> bool {
    let from = piece.location();
    if from == target {
        return false;
    }
    let file_delta = target.file() as i8 - from.file() as i8;
    let rank_delta = target.rank() as i8 - from.rank() as i8;
    let straight = file_delta == 0 || rank_delta == 0;
    let diagonal = file_delta.abs() == rank_delta.abs();

    match piece.kind() {
        PieceKind::Pawn => rank_delta == piece.team().forward() && file_delta.abs() == 1,
        PieceKind::Knight => {
            matches!((file_delta.abs(), rank_delta.abs()), (1, 2) | (2, 1))
        }
        PieceKind::King => file_delta.abs() <= 1 && rank_delta.abs() <= 1,
        PieceKind::Bishop => diagonal && line_is_clear(board, from, target),
        PieceKind::Rook => straight && line_is_clear(board, from, target),
        PieceKind::Queen => (straight || diagonal) && line_is_clear(board, from, target),
    }
}

/// Every square strictly between two aligned squares is empty
fn line_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_file = (to.file() as i8 - from.file() as i8).signum();
    let step_rank = (to.rank() as i8 - from.rank() as i8).signum();

    let mut current = from;
    while let Some(next) = current.offset(step_file, step_rank) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
