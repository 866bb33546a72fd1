//! Material evaluation
//!
//! Sums the values of a team's live pieces.

use crate::board::Board;
use crate::types::*;

/// Total material of one team in centipawns
pub fn material(board: &Board, team: Team) -> i32 {
    board.pieces(team).map(|piece| piece.kind().value()).sum()
}

/// Material difference from `perspective`'s point of view
pub fn material_balance(board: &Board, perspective: Team) -> i32 {
    material(board, perspective) - material(board, perspective.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::starting_position();
        assert_eq!(material_balance(&board, Team::White), 0);
        assert_eq!(material(&board, Team::White), 3_900);
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = Board::starting_position();
        let queen = board.id_at("d8".parse().unwrap()).unwrap();
        board.take(queen);
        assert_eq!(material_balance(&board, Team::White), QUEEN_VALUE);
        assert_eq!(material_balance(&board, Team::Black), -QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = Board::starting_position();
        let pawn = board.id_at("e2".parse().unwrap()).unwrap();
        board.take(pawn);
        assert_eq!(material_balance(&board, Team::Black), PAWN_VALUE);
    }
}
