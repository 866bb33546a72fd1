//! King move generation
//!
//! Kings step one square in any direction onto an empty or enemy-held
//! square. Stepping into check is left to the legality filter.
//!
//! ## Castling
//!
//! Castling is generated here when the caller asks for it. It requires:
//! - the king has never moved and stands on its home square (e-file)
//! - the king is not currently attacked
//! - an unmoved rook of the same team stands in that side's corner
//! - every square between king and rook is empty
//! - the square the king passes over is not attacked
//!
//! The landing square is checked afterwards by the legality filter, which
//! sees the king and rook already relocated.

use super::attack::is_square_attacked;
use super::Castling;
use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// King file at setup
const KING_HOME_FILE: u8 = 4;

pub(super) fn generate_king_moves(board: &Board, king: &Piece, castling: Castling, moves: &mut Vec<Move>) {
    super::push_step_moves(board, king, &KING_OFFSETS, moves);

    if castling == Castling::Include {
        generate_castling_moves(board, king, moves);
    }
}

fn generate_castling_moves(board: &Board, king: &Piece, moves: &mut Vec<Move>) {
    let team = king.team();
    let home = team.home_rank();
    if king.has_moved() || Square::new(KING_HOME_FILE, home) != Some(king.location()) {
        return;
    }

    let enemy = team.opposite();
    if is_square_attacked(board, king.location(), enemy) {
        return;
    }

    for side in CastleSide::ALL {
        if let Some(mv) = castle_move(board, king, side, enemy) {
            moves.push(mv);
        }
    }
}

/// Castling toward `side`, if the rook, the path and the enemy allow it
///
/// Besides an empty path, the square the king crosses must not be attacked.
/// This is the conventional rule and is applied on purpose; the landing
/// square is left to the legality filter.
fn castle_move(board: &Board, king: &Piece, side: CastleSide, enemy: Team) -> Option<Move> {
    let team = king.team();
    let home = team.home_rank();

    let rook = board.piece_at(Square::new(side.rook_file(), home)?)?;
    if rook.team() != team || rook.kind() != PieceKind::Rook || rook.has_moved() {
        return None;
    }

    let (low, high) = if side.rook_file() < KING_HOME_FILE {
        (side.rook_file() + 1, KING_HOME_FILE)
    } else {
        (KING_HOME_FILE + 1, side.rook_file())
    };
    for file in low..high {
        if !board.is_empty(Square::new(file, home)?) {
            return None;
        }
    }

    let transit = king.location().offset(side.direction(), 0)?;
    if is_square_attacked(board, transit, enemy) {
        return None;
    }

    let destination = Square::new(side.king_file(), home)?;
    Some(Move {
        castle: Some(side),
        ..Move::quiet(king.id(), king.location(), destination)
    })
}

#[cfg(test)]
mod tests {
    use super::super::pseudo_legal_moves;
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn castles(board: &Board, king_square: &str) -> Vec<CastleSide> {
        let id = board.id_at(sq(king_square)).unwrap();
        pseudo_legal_moves(board, id, None)
            .iter()
            .filter_map(|mv| mv.castle)
            .collect()
    }

    #[test]
    fn test_both_sides_available_with_clear_path() {
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "e1"),
            (Team::White, PieceKind::Rook, "a1"),
            (Team::White, PieceKind::Rook, "h1"),
        ])
        .unwrap();
        let sides = castles(&board, "e1");
        assert!(sides.contains(&CastleSide::KingSide));
        assert!(sides.contains(&CastleSide::QueenSide));
    }

    #[test]
    fn test_no_castling_after_king_moved() {
        let mut board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "e1"),
            (Team::White, PieceKind::Rook, "h1"),
        ])
        .unwrap();
        let king = board.id_at(sq("e1")).unwrap();
        board.set_move_count(king, 2).unwrap();
        assert!(castles(&board, "e1").is_empty());
    }

    #[test]
    fn test_queen_side_blocked_by_knight_on_b_file() {
        let board = Board::from_pieces(&[
            (Team::Black, PieceKind::King, "e8"),
            (Team::Black, PieceKind::Rook, "a8"),
            (Team::Black, PieceKind::Knight, "b8"),
        ])
        .unwrap();
        assert!(castles(&board, "e8").is_empty());
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "e1"),
            (Team::White, PieceKind::Rook, "h1"),
            (Team::Black, PieceKind::Rook, "e8"),
        ])
        .unwrap();
        assert!(castles(&board, "e1").is_empty());
    }

    #[test]
    fn test_no_castling_through_attacked_square() {
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "e1"),
            (Team::White, PieceKind::Rook, "h1"),
            (Team::Black, PieceKind::Rook, "f8"),
        ])
        .unwrap();
        assert!(castles(&board, "e1").is_empty());
    }

    #[test]
    fn test_attack_scan_excludes_castling() {
        let board = Board::from_pieces(&[
            (Team::White, PieceKind::King, "e1"),
            (Team::White, PieceKind::Rook, "h1"),
        ])
        .unwrap();
        let id = board.id_at(sq("e1")).unwrap();
        let mut moves = Vec::new();
        super::super::generate_piece_moves(&board, id, None, Castling::Exclude, &mut moves);
        assert!(moves.iter().all(|mv| mv.castle.is_none()));
    }
}
