//! The computer opponent
//!
//! [`Engine`] decides a move for the side to move in a [`Game`]:
//!
//! 1. with [`Strategy::Random`], any legal move
//! 2. otherwise the opening book, while the game is still in a known line
//! 3. otherwise iterative deepening alpha-beta within the time budget
//!
//! The search runs on a copy of the game's board; the game itself only
//! changes through [`Engine::play`], which goes through the same checks as
//! a human move.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{EngineConfig, Strategy};
use crate::error::{ChessError, ChessResult};
use crate::evaluation::{Evaluator, PieceSquareTables};
use crate::game::Game;
use crate::notation::parse_move;
use crate::search::{iterative_deepening, OpeningBook};
use crate::types::Move;

/// Where an engine move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search,
    Random,
}

/// A move chosen by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMove {
    pub mv: Move,
    pub san: String,
    /// Search score for the mover; `None` for book and random moves
    pub score: Option<i32>,
    /// Deepest completed search depth (0 when not searched)
    pub depth: u32,
    pub nodes: u64,
    pub source: MoveSource,
}

/// Computer opponent
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    evaluator: Evaluator,
    book: OpeningBook,
    rng: StdRng,
}

impl Engine {
    pub fn new(config: EngineConfig) -> ChessResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            evaluator: Evaluator::new(PieceSquareTables::standard(), config.endgame_rule),
            book: OpeningBook::standard(),
            rng,
            config,
        })
    }

    /// Replace the opening book
    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self
    }

    /// Replace the evaluator (custom tables)
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Pick a move for the side to move without playing it
    pub fn choose_move(&mut self, game: &Game) -> ChessResult<EngineMove> {
        if game.is_over() {
            return Err(ChessError::GameOver { status: game.status() });
        }

        if self.config.strategy == Strategy::Random {
            return self.random_move(game);
        }

        if self.config.use_book {
            if let Some(chosen) = self.book_move(game) {
                return Ok(chosen);
            }
        }

        self.search_move(game)
    }

    /// Pick a move and play it
    pub fn play(&mut self, game: &mut Game) -> ChessResult<EngineMove> {
        let chosen = self.choose_move(game)?;
        game.play_move(chosen.mv)?;
        Ok(chosen)
    }

    fn random_move(&mut self, game: &Game) -> ChessResult<EngineMove> {
        let mv = game
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves)?;
        Ok(EngineMove {
            san: game.to_notation(&mv),
            mv,
            score: None,
            depth: 0,
            nodes: 0,
            source: MoveSource::Random,
        })
    }

    fn book_move(&mut self, game: &Game) -> Option<EngineMove> {
        let text = self.book.pick(game.history(), &mut self.rng)?;
        match parse_move(text).and_then(|parsed| game.resolve(&parsed)) {
            Ok(mv) => {
                info!("[BOOK] {} plays {} from the book", game.side_to_move(), text);
                Some(EngineMove {
                    san: game.to_notation(&mv),
                    mv,
                    score: None,
                    depth: 0,
                    nodes: 0,
                    source: MoveSource::Book,
                })
            }
            Err(e) => {
                warn!("[BOOK] book move {} rejected: {}", text, e);
                None
            }
        }
    }

    fn search_move(&self, game: &Game) -> ChessResult<EngineMove> {
        let mut board = game.board().clone();
        let result = iterative_deepening(
            &mut board,
            game.side_to_move(),
            game.last_moved(),
            &self.evaluator,
            self.config.max_depth,
            Duration::from_millis(self.config.time_budget_ms),
        )
        .ok_or(ChessError::NoLegalMoves)?;

        let san = game.to_notation(&result.best_move);
        info!(
            "[ENGINE] {} plays {} (score {}, depth {}, {} nodes)",
            game.side_to_move(),
            san,
            result.score,
            result.depth,
            result.nodes
        );
        Ok(EngineMove {
            mv: result.best_move,
            san,
            score: Some(result.score),
            depth: result.depth,
            nodes: result.nodes,
            source: MoveSource::Search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn config(use_book: bool) -> EngineConfig {
        EngineConfig {
            max_depth: 2,
            time_budget_ms: 10_000,
            use_book,
            seed: Some(3),
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_opening_comes_from_book() {
        let mut engine = Engine::new(config(true)).unwrap();
        let game = Game::new();
        let chosen = engine.choose_move(&game).unwrap();
        assert_eq!(chosen.source, MoveSource::Book);
        assert!(["e4", "d4", "c4", "Nf3"].contains(&chosen.san.as_str()));
    }

    #[test]
    fn test_search_used_without_book() {
        let mut engine = Engine::new(config(false)).unwrap();
        let mut game = Game::new();
        let chosen = engine.play(&mut game).unwrap();
        assert_eq!(chosen.source, MoveSource::Search);
        assert_eq!(chosen.depth, 2);
        assert_eq!(game.history().to_vec(), vec![chosen.san.clone()]);
        assert_eq!(game.side_to_move(), crate::types::Team::Black);
    }

    #[test]
    fn test_leaves_book_when_line_ends() {
        let mut engine = Engine::new(config(true)).unwrap();
        let game = Game::from_moves(["a3"]).unwrap();
        let chosen = engine.choose_move(&game).unwrap();
        assert_eq!(chosen.source, MoveSource::Search);
    }

    #[test]
    fn test_random_strategy_plays_legal_move() {
        let mut engine = Engine::new(EngineConfig {
            strategy: Strategy::Random,
            seed: Some(11),
            ..EngineConfig::default()
        })
        .unwrap();
        let mut game = Game::new();
        for _ in 0..6 {
            if game.is_over() {
                break;
            }
            let chosen = engine.play(&mut game).unwrap();
            assert_eq!(chosen.source, MoveSource::Random);
        }
        assert!(!game.history().is_empty());
    }

    #[test]
    fn test_refuses_finished_game() {
        let mut engine = Engine::new(config(false)).unwrap();
        let mut game = Game::new();
        game.resign(crate::types::Team::White).unwrap();
        assert!(matches!(
            engine.choose_move(&game),
            Err(ChessError::GameOver {
                status: GameStatus::Resigned
            })
        ));
    }
}
