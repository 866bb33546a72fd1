//! Move ordering for alpha-beta pruning
//!
//! Alpha-beta cuts more when strong moves are searched first. Each move
//! gets a guess score:
//! - captures: MVV-LVA (victim value × 10 − attacker value)
//! - promotions: value of the promoted piece
//! - castling: small bonus
//! - landing where an enemy pawn attacks: penalty, for every mover

use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Sort moves by descending guess score
pub(crate) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| std::cmp::Reverse(score_move(board, mv)));
}

/// Guess how good a move is before searching it
pub(crate) fn score_move(board: &Board, mv: &Move) -> i32 {
    let mover = board.piece(mv.piece);
    let mut score = 0;

    if let Some(victim) = mv.captured {
        score += board.piece(victim).kind().value() * ORDER_CAPTURE_MULTIPLIER - mover.kind().value();
    }
    if let Some(promotion) = mv.promotion {
        score += promotion.kind().value();
    }
    if mv.is_castle() {
        score += ORDER_CASTLE_BONUS;
    }
    if attacked_by_enemy_pawn(board, mover.team(), mv.destination) {
        score -= ORDER_PAWN_ATTACKED_PENALTY;
    }
    score
}

fn attacked_by_enemy_pawn(board: &Board, team: Team, square: Square) -> bool {
    [-1, 1].into_iter().any(|side| {
        square
            .offset(side, team.forward())
            .and_then(|from| board.piece_at(from))
            .is_some_and(|piece| piece.team() != team && piece.kind() == PieceKind::Pawn)
    })
}
