//! Pseudo-legal move generation
//!
//! Turns a board and a piece into the moves that piece's movement pattern
//! allows, without asking whether the mover's own king ends up attacked
//! (that is the [`legality`](crate::legality) module's job).
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double pushes, diagonal captures, en passant, promotion
//! - `knight` - fixed L-shaped offsets
//! - `sliding` - bishops, rooks and queens walking direction vectors
//! - `king` - single steps plus castling
//! - `attack` - "does this piece attack that square" predicates
//!
//! ## Game Context
//!
//! En passant cannot be decided from the board alone: the victim must be the
//! piece moved on the previous turn. Every generator entry point therefore
//! takes `last_moved`, the id of that piece if any.

mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;

pub use attack::{attacks_square, is_square_attacked};

use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Whether king moves should include castling
///
/// Attack scans turn castling off: a castle never captures, and deciding
/// castling eligibility itself needs an attack scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Castling {
    Include,
    Exclude,
}

/// All pseudo-legal moves of one piece
pub fn pseudo_legal_moves(board: &Board, id: PieceId, last_moved: Option<PieceId>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    generate_piece_moves(board, id, last_moved, Castling::Include, &mut moves);
    moves
}

/// All pseudo-legal moves of every live piece of a team
pub fn team_pseudo_legal_moves(board: &Board, team: Team, last_moved: Option<PieceId>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for id in board.team_pieces(team) {
        generate_piece_moves(board, *id, last_moved, Castling::Include, &mut moves);
    }
    moves
}

/// Append the pseudo-legal moves of one piece to `moves`
pub fn generate_piece_moves(
    board: &Board,
    id: PieceId,
    last_moved: Option<PieceId>,
    castling: Castling,
    moves: &mut Vec<Move>,
) {
    if !board.is_live(id) {
        return;
    }
    let piece = board.piece(id);
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, piece, last_moved, moves),
        PieceKind::Knight => knight::generate_knight_moves(board, piece, moves),
        PieceKind::Bishop => sliding::generate_sliding_moves(board, piece, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => sliding::generate_sliding_moves(board, piece, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => sliding::generate_sliding_moves(board, piece, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => king::generate_king_moves(board, piece, castling, moves),
    }
}

/// Moves to each in-bounds offset that is empty or enemy-held
fn push_step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
    let from = piece.location();
    for &(file_delta, rank_delta) in offsets {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        match board.piece_at(to) {
            None => moves.push(Move::quiet(piece.id(), from, to)),
            Some(other) if other.team() != piece.team() => {
                moves.push(Move::capture(piece.id(), from, to, other.id(), to));
            }
            Some(_) => {}
        }
    }
}
