//! # OOK Chess Engine
//!
//! Chess rules and a computer opponent.
//!
//! ## Overview
//!
//! The crate is split into a rules core and a search on top of it:
//!
//! - [`board`] - grid, piece arena and team collections
//! - [`move_gen`] - pseudo-legal moves per piece, attack detection
//! - [`legality`] - make/unmake and the king-safety filter
//! - [`notation`] - parsing and writing algebraic notation
//! - [`game`] - turns, special moves, draw/resign and game end
//! - [`evaluation`] - material plus piece-square tables
//! - [`search`] - alpha-beta, iterative deepening, opening book
//! - [`engine`] - the opponent facade tying book and search to a game
//!
//! ## Example
//!
//! ```rust
//! use ook_engine::{Engine, EngineConfig, Game};
//!
//! let mut game = Game::new();
//! game.play_san("e4").unwrap();
//!
//! let config = EngineConfig { max_depth: 2, seed: Some(1), ..EngineConfig::default() };
//! let mut engine = Engine::new(config).unwrap();
//! let reply = engine.play(&mut game).unwrap();
//! assert_eq!(game.history().len(), 2);
//! println!("engine answers {}", reply.san);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod legality;
pub mod move_gen;
pub mod notation;
pub mod search;
pub mod types;

pub use board::Board;
pub use config::{EndgameRule, EngineConfig, Strategy};
pub use engine::{Engine, EngineMove, MoveSource};
pub use error::{ChessError, ChessResult};
pub use evaluation::{Evaluator, PieceSquareTables};
pub use game::{Game, GameStatus};
pub use notation::{move_to_notation, parse_move, ParsedMove, Specifier};
pub use search::{OpeningBook, SearchResult};
pub use types::{CastleSide, Move, Piece, PieceId, PieceKind, PromotionKind, Square, Team};
