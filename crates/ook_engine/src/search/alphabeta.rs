//! Minimax with alpha-beta pruning
//!
//! Scores are always from the root side's point of view: layers where the
//! root side moves maximise, the others minimise. A subtree is abandoned as
//! soon as `beta <= alpha`, since neither player would steer into it.
//!
//! A side with no legal moves is either mated (scored `MATE_SCORE - ply`
//! against it, so quicker mates score higher for the winner) or
//! stalemated (scored 0). This holds at every node, leaves included; only a
//! leaf where the side to move still has a move is scored by the evaluator.

use super::ordering::order_moves;
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::legality::{has_legal_move, is_in_check, legal_moves, make_move, unmake_move};
use crate::types::*;

/// Search state for one root position
pub struct Search<'a> {
    evaluator: &'a Evaluator,
    root: Team,
    nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(evaluator: &'a Evaluator, root: Team) -> Self {
        Self {
            evaluator,
            root,
            nodes: 0,
        }
    }

    /// Positions visited so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best root move at a fixed depth
    ///
    /// `hint` is tried first when it is among the legal moves (the best move
    /// of the previous iteration). Returns `None` when the root side has no
    /// legal move.
    pub fn search_root(
        &mut self,
        board: &mut Board,
        last_moved: Option<PieceId>,
        depth: u32,
        hint: Option<Move>,
    ) -> Option<(Move, i32)> {
        self.nodes += 1;
        let mut moves = legal_moves(board, self.root, last_moved);
        order_moves(board, &mut moves);
        if let Some(position) = hint.and_then(|hint| moves.iter().position(|mv| *mv == hint)) {
            moves[..=position].rotate_right(1);
        }

        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -INFINITY;
        for mv in &moves {
            let undo = make_move(board, mv);
            let score = self.alphabeta(
                board,
                self.root.opposite(),
                Some(mv.piece),
                depth.saturating_sub(1),
                1,
                alpha,
                INFINITY,
            );
            unmake_move(board, mv, undo);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*mv, score));
                alpha = alpha.max(score);
            }
        }
        best
    }

    /// Alpha-beta value of the position with `side` to move
    ///
    /// # Arguments
    ///
    /// * `board` - Position, restored before returning
    /// * `side` - Team to move at this node
    /// * `last_moved` - Piece moved into this node (en passant eligibility)
    /// * `depth` - Remaining plies
    /// * `ply` - Distance from the root
    /// * `alpha` - Score the root side is already guaranteed
    /// * `beta` - Score the opponent is already guaranteed
    #[allow(clippy::too_many_arguments)]
    pub fn alphabeta(
        &mut self,
        board: &mut Board,
        side: Team,
        last_moved: Option<PieceId>,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.leaf_score(board, side, last_moved, ply);
        }

        let mut moves = legal_moves(board, side, last_moved);
        if moves.is_empty() {
            return self.terminal_score(board, side, ply);
        }
        order_moves(board, &mut moves);

        let maximizing = side == self.root;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let undo = make_move(board, mv);
            let score = self.alphabeta(board, side.opposite(), Some(mv.piece), depth - 1, ply + 1, alpha, beta);
            unmake_move(board, mv, undo);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Plain minimax value, visiting every node
    pub fn minimax(&mut self, board: &mut Board, side: Team, last_moved: Option<PieceId>, depth: u32, ply: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.leaf_score(board, side, last_moved, ply);
        }

        let moves = legal_moves(board, side, last_moved);
        if moves.is_empty() {
            return self.terminal_score(board, side, ply);
        }

        let scores = moves.iter().map(|mv| {
            let undo = make_move(board, mv);
            let score = self.minimax(board, side.opposite(), Some(mv.piece), depth - 1, ply + 1);
            unmake_move(board, mv, undo);
            score
        });
        let scores: Vec<i32> = scores.collect();

        if side == self.root {
            scores.into_iter().max().unwrap_or(-INFINITY)
        } else {
            scores.into_iter().min().unwrap_or(INFINITY)
        }
    }

    fn leaf_score(&self, board: &mut Board, side: Team, last_moved: Option<PieceId>, ply: i32) -> i32 {
        if has_legal_move(board, side, last_moved) {
            self.evaluator.evaluate(board, self.root)
        } else {
            self.terminal_score(board, side, ply)
        }
    }

    fn terminal_score(&self, board: &Board, side: Team, ply: i32) -> i32 {
        if !is_in_check(board, side) {
            return 0;
        }
        let mate = MATE_SCORE - ply;
        if side == self.root {
            -mate
        } else {
            mate
        }
    }
}

/// Alpha-beta score of a position for the side to move, full window
pub fn alphabeta(
    board: &mut Board,
    evaluator: &Evaluator,
    side: Team,
    last_moved: Option<PieceId>,
    depth: u32,
) -> i32 {
    Search::new(evaluator, side).alphabeta(board, side, last_moved, depth, 0, -INFINITY, INFINITY)
}

/// Minimax score of a position for the side to move, no pruning
pub fn minimax(
    board: &mut Board,
    evaluator: &Evaluator,
    side: Team,
    last_moved: Option<PieceId>,
    depth: u32,
) -> i32 {
    Search::new(evaluator, side).minimax(board, side, last_moved, depth, 0)
}
