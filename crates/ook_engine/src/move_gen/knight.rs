//! Knight move generation
//!
//! Knights jump, so only the destination square matters: it must be on the
//! board and not hold a piece of the knight's own team.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

pub(super) fn generate_knight_moves(board: &Board, knight: &Piece, moves: &mut Vec<Move>) {
    super::push_step_moves(board, knight, &KNIGHT_OFFSETS, moves);
}
