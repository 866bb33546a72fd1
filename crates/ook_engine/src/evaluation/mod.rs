//! Static position evaluation
//!
//! Scores a position from one team's point of view:
//!
//! ```text
//! score = (material + positional)[own] - (material + positional)[opponent]
//! ```
//!
//! ## Module Organization
//!
//! - `material` - piece values summed per team
//! - `pst` - piece-square tables for the positional term
//!
//! The king reads its endgame table once the configured [`EndgameRule`]
//! says the endgame has begun.

mod material;
mod pst;

pub use material::{material, material_balance};
pub use pst::PieceSquareTables;

use crate::board::Board;
use crate::config::EndgameRule;
use crate::constants::STARTING_PAWNS;
use crate::types::*;

/// Material plus piece-square-table evaluator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluator {
    tables: PieceSquareTables,
    endgame_rule: EndgameRule,
}

impl Evaluator {
    pub fn new(tables: PieceSquareTables, endgame_rule: EndgameRule) -> Self {
        Self { tables, endgame_rule }
    }

    pub fn tables(&self) -> &PieceSquareTables {
        &self.tables
    }

    pub fn endgame_rule(&self) -> EndgameRule {
        self.endgame_rule
    }

    /// Score of `board` for `perspective`; positive is good for that team
    pub fn evaluate(&self, board: &Board, perspective: Team) -> i32 {
        let endgame = self.is_endgame(board);
        self.side_total(board, perspective, endgame) - self.side_total(board, perspective.opposite(), endgame)
    }

    fn side_total(&self, board: &Board, team: Team, endgame: bool) -> i32 {
        board
            .pieces(team)
            .map(|piece| {
                piece.kind().value() + self.tables.value(team, piece.kind(), piece.location(), endgame)
            })
            .sum()
    }

    /// Whether kings should use their endgame table
    pub fn is_endgame(&self, board: &Board) -> bool {
        match self.endgame_rule {
            EndgameRule::FullPawnCount => Team::ALL
                .iter()
                .all(|team| board.count(*team, PieceKind::Pawn) == STARTING_PAWNS),
            EndgameRule::ReducedMaterial => Team::ALL.iter().all(|team| {
                let queens = board.count(*team, PieceKind::Queen);
                let rooks = board.count(*team, PieceKind::Rook);
                let minors = board.count(*team, PieceKind::Knight) + board.count(*team, PieceKind::Bishop);
                queens == 0 || (rooks == 0 && minors <= 1)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_is_balanced() {
        let evaluator = Evaluator::default();
        let board = Board::starting_position();
        assert_eq!(evaluator.evaluate(&board, Team::White), 0);
        assert_eq!(evaluator.evaluate(&board, Team::Black), 0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let evaluator = Evaluator::default();
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "g1"),
            (Team::White, PieceKind::Rook, "d1"),
            (Team::Black, PieceKind::King, "e8"),
            (Team::Black, PieceKind::Knight, "c6"),
        ])
        .unwrap();
        let white = evaluator.evaluate(&board, Team::White);
        assert!(white > 0, "rook beats knight");
        assert_eq!(white, -evaluator.evaluate(&board, Team::Black));
    }

    #[test]
    fn test_zeroed_tables_give_material_only() {
        let evaluator = Evaluator::new(PieceSquareTables::zeroed(), EndgameRule::default());
        let mut board = Board::starting_position();
        let knight = board.id_at("g8".parse().unwrap()).unwrap();
        board.take(knight);
        assert_eq!(evaluator.evaluate(&board, Team::White), 300);
    }

    #[test]
    fn test_full_pawn_count_rule() {
        let evaluator = Evaluator::default();
        let mut board = Board::starting_position();
        assert!(evaluator.is_endgame(&board));
        let pawn = board.id_at("a2".parse().unwrap()).unwrap();
        board.take(pawn);
        assert!(!evaluator.is_endgame(&board));
    }

    #[test]
    fn test_reduced_material_queen_with_rook_is_middlegame() {
        let evaluator = Evaluator::new(PieceSquareTables::standard(), EndgameRule::ReducedMaterial);
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "g1"),
            (Team::White, PieceKind::Queen, "d1"),
            (Team::White, PieceKind::Rook, "a1"),
            (Team::Black, PieceKind::King, "g8"),
        ])
        .unwrap();
        assert!(!evaluator.is_endgame(&board), "queen plus rook keeps the middlegame table");
    }

    #[test]
    fn test_reduced_material_rule() {
        let evaluator = Evaluator::new(PieceSquareTables::standard(), EndgameRule::ReducedMaterial);
        assert!(!evaluator.is_endgame(&Board::starting_position()));

        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "g1"),
            (Team::White, PieceKind::Queen, "d1"),
            (Team::White, PieceKind::Bishop, "c1"),
            (Team::Black, PieceKind::King, "g8"),
            (Team::Black, PieceKind::Rook, "a8"),
            (Team::Black, PieceKind::Rook, "h8"),
        ])
        .unwrap();
        assert!(evaluator.is_endgame(&board));
    }
}
