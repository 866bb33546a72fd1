//! Sliding piece move generation
//!
//! Common walk for bishops, rooks and queens. For each direction vector the
//! piece steps square by square:
//! 1. an empty square is a quiet move and the walk continues
//! 2. an enemy piece is a capture and ends the walk
//! 3. an own piece ends the walk without a move
//! 4. the board edge ends the walk

use crate::board::Board;
use crate::types::*;

pub(super) fn generate_sliding_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let from = piece.location();
    for &(file_delta, rank_delta) in directions {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            match board.piece_at(next) {
                None => moves.push(Move::quiet(piece.id(), from, next)),
                Some(other) => {
                    if other.team() != piece.team() {
                        moves.push(Move::capture(piece.id(), from, next, other.id(), next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
