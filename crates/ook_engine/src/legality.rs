//! Legality filter: make/unmake and the check test
//!
//! ## Overview
//!
//! A pseudo-legal move becomes legal once it has been played on the board
//! and the mover's king is not attacked afterwards. Rather than copying the
//! board for every candidate, the move is applied in place with
//! [`make_move`], tested, and reverted with [`unmake_move`] using the
//! returned [`UndoInfo`].
//!
//! ## Make step
//!
//! 1. the captured piece (if any) leaves the grid and its team collection,
//!    remembering its slot in that collection
//! 2. the mover is relocated and its move count incremented
//! 3. a promotion changes the mover's kind in place
//! 4. a castle relocates the rook in the same step, so the check test sees
//!    the final position
//!
//! Unmake performs the same steps in reverse. Calls must be strictly
//! nested: every `make_move` is undone before the previous one is.

use tracing::warn;

use crate::board::Board;
use crate::move_gen::{is_square_attacked, team_pseudo_legal_moves};
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    captured_index: Option<usize>,
    previous_kind: PieceKind,
    rook: Option<(PieceId, Square)>,
}

/// Apply a move to the board and return what is needed to revert it
pub fn make_move(board: &mut Board, mv: &Move) -> UndoInfo {
    let previous_kind = board.piece(mv.piece).kind();

    let captured_index = mv.captured.and_then(|victim| {
        let index = board.take(victim);
        if index.is_none() {
            warn!("[RULES] captured piece {} was not in its team collection", victim);
        }
        index
    });

    board.relocate(mv.piece, mv.destination);
    board.increment_move_count(mv.piece);

    if let Some(promotion) = mv.promotion {
        board.set_kind(mv.piece, promotion.kind());
    }

    let rook = mv.castle.and_then(|side| move_castling_rook(board, mv, side));

    UndoInfo {
        captured_index,
        previous_kind,
        rook,
    }
}

fn move_castling_rook(board: &mut Board, mv: &Move, side: CastleSide) -> Option<(PieceId, Square)> {
    let rank = mv.origin.rank();
    let corner = Square::new(side.rook_file(), rank)?;
    let target = Square::new(side.rook_destination_file(), rank)?;

    let Some(rook) = board.id_at(corner) else {
        warn!("[RULES] castling {} without a rook on {}", side.notation(), corner);
        return None;
    };
    board.relocate(rook, target);
    board.increment_move_count(rook);
    Some((rook, corner))
}

/// Revert a move made with [`make_move`]
pub fn unmake_move(board: &mut Board, mv: &Move, undo: UndoInfo) {
    if let Some((rook, corner)) = undo.rook {
        board.relocate(rook, corner);
        board.decrement_move_count(rook);
    }

    board.set_kind(mv.piece, undo.previous_kind);
    board.relocate(mv.piece, mv.origin);
    board.decrement_move_count(mv.piece);

    if let (Some(victim), Some(index)) = (mv.captured, undo.captured_index) {
        board.restore(victim, index);
    }
}

/// Whether the team's king is attacked
///
/// A board without that team's king reports `false`; games validate king
/// presence up front.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    board
        .king_square(team)
        .is_some_and(|square| is_square_attacked(board, square, team.opposite()))
}

/// Play the move if it does not expose the mover's king
///
/// # Returns
///
/// `true` with the move left on the board, or `false` with the board
/// untouched.
pub fn try_move(board: &mut Board, mv: &Move) -> bool {
    let team = board.piece(mv.piece).team();
    let undo = make_move(board, mv);
    if is_in_check(board, team) {
        unmake_move(board, mv, undo);
        return false;
    }
    true
}

/// Whether a pseudo-legal move keeps the mover's king safe
pub fn is_legal(board: &mut Board, mv: &Move) -> bool {
    let team = board.piece(mv.piece).team();
    let undo = make_move(board, mv);
    let legal = !is_in_check(board, team);
    unmake_move(board, mv, undo);
    legal
}

/// All legal moves of a team
///
/// Takes the board mutably for the make/unmake probes; it is returned in
/// the state it was passed in.
pub fn legal_moves(board: &mut Board, team: Team, last_moved: Option<PieceId>) -> Vec<Move> {
    let mut moves = team_pseudo_legal_moves(board, team, last_moved);
    moves.retain(|mv| is_legal(board, mv));
    moves
}

/// Whether the team has at least one legal move
pub fn has_legal_move(board: &mut Board, team: Team, last_moved: Option<PieceId>) -> bool {
    team_pseudo_legal_moves(board, team, last_moved)
        .iter()
        .any(|mv| is_legal(board, mv))
}

/// Count leaf positions reachable in `depth` plies
///
/// Used to cross-check the generator against known node counts.
pub fn perft(board: &mut Board, team: Team, last_moved: Option<PieceId>, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, team, last_moved);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in &moves {
        let undo = make_move(board, mv);
        nodes += perft(board, team.opposite(), Some(mv.piece), depth - 1);
        unmake_move(board, mv, undo);
    }
    nodes
}
