//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, destination empty
//! - **Double push**: from the starting rank with a move count of zero, both
//!   squares empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: from the fifth rank (relative), onto the empty square
//!   behind an enemy pawn standing beside us, if that pawn has moved exactly
//!   once and was the last piece moved
//! - **Promotion**: any of the above landing on the last rank is emitted once
//!   per [`PromotionKind`]

use crate::board::Board;
use crate::types::*;

/// Append the pseudo-legal moves of a pawn
pub(super) fn generate_pawn_moves(
    board: &Board,
    pawn: &Piece,
    last_moved: Option<PieceId>,
    moves: &mut Vec<Move>,
) {
    let team = pawn.team();
    let from = pawn.location();
    let forward = team.forward();

    if let Some(one) = from.offset(0, forward) {
        if board.is_empty(one) {
            push_with_promotions(Move::quiet(pawn.id(), from, one), team, moves);

            if pawn.move_count() == 0 && from.rank() == team.pawn_rank() {
                if let Some(two) = from.offset(0, 2 * forward) {
                    if board.is_empty(two) {
                        moves.push(Move::quiet(pawn.id(), from, two));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(diagonal) = from.offset(side, forward) else {
            continue;
        };

        match board.piece_at(diagonal) {
            Some(target) if target.team() != team => {
                let mv = Move::capture(pawn.id(), from, diagonal, target.id(), diagonal);
                push_with_promotions(mv, team, moves);
            }
            Some(_) => {}
            None => {
                if let Some(mv) = en_passant(board, pawn, side, diagonal, last_moved) {
                    moves.push(mv);
                }
            }
        }
    }
}

fn en_passant(
    board: &Board,
    pawn: &Piece,
    side: i8,
    diagonal: Square,
    last_moved: Option<PieceId>,
) -> Option<Move> {
    if pawn.location().rank() != pawn.team().en_passant_rank() {
        return None;
    }
    let beside = pawn.location().offset(side, 0)?;
    let victim = board.piece_at(beside)?;
    let eligible = victim.team() != pawn.team()
        && victim.kind() == PieceKind::Pawn
        && victim.move_count() == 1
        && last_moved == Some(victim.id());

    eligible.then(|| Move::capture(pawn.id(), pawn.location(), diagonal, victim.id(), beside))
}

fn push_with_promotions(mv: Move, team: Team, moves: &mut Vec<Move>) {
    if mv.destination.rank() == team.promotion_rank() {
        for promotion in PromotionKind::ALL {
            moves.push(mv.with_promotion(promotion));
        }
    } else {
        moves.push(mv);
    }
}
