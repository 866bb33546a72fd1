//! Iterative deepening search
//!
//! Searches depth 1, 2, 3, ... up to the configured maximum. Elapsed time is
//! only checked after a depth completes, so the result always comes from a
//! fully searched depth and the budget can be overrun by at most one
//! iteration. The best move of each depth is tried first at the next.

use std::time::Duration;

use tracing::debug;
use web_time::Instant;

use super::alphabeta::Search;
use crate::board::Board;
use crate::constants::*;
use crate::evaluation::Evaluator;
use crate::types::*;

/// Outcome of an iterative deepening search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score from the searching side's point of view
    pub score: i32,
    /// Deepest completed depth
    pub depth: u32,
    /// Positions visited across all depths
    pub nodes: u64,
}

impl SearchResult {
    /// Whether the score is a forced mate (for either side)
    pub fn is_mate(&self) -> bool {
        self.score.abs() > MATE_THRESHOLD
    }
}

/// Iterative deepening search
///
/// # Arguments
///
/// * `board` - Position to search; restored before returning
/// * `side` - Team to move
/// * `last_moved` - Piece moved on the previous turn
/// * `evaluator` - Leaf evaluator
/// * `max_depth` - Deepest iteration (capped at [`MAX_SEARCH_DEPTH`])
/// * `time_budget` - No new depth is started once this has elapsed
///
/// # Returns
///
/// The deepest completed result, or `None` if `side` has no legal move.
pub fn iterative_deepening(
    board: &mut Board,
    side: Team,
    last_moved: Option<PieceId>,
    evaluator: &Evaluator,
    max_depth: u32,
    time_budget: Duration,
) -> Option<SearchResult> {
    let start_time = Instant::now();
    let mut best: Option<SearchResult> = None;
    let mut nodes = 0;

    for depth in 1..=max_depth.clamp(1, MAX_SEARCH_DEPTH) {
        let mut search = Search::new(evaluator, side);
        let hint = best.map(|result| result.best_move);
        let (best_move, score) = search.search_root(board, last_moved, depth, hint)?;
        nodes += search.nodes();

        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes,
        };
        debug!(
            "[SEARCH] depth {} best {} score {} nodes {} ({} ms)",
            depth,
            best_move,
            score,
            nodes,
            start_time.elapsed().as_millis()
        );
        best = Some(result);

        if result.is_mate() {
            debug!("[SEARCH] forced mate found at depth {}", depth);
            break;
        }
        if start_time.elapsed() >= time_budget {
            break;
        }
    }

    best
}
