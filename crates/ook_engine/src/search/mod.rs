//! Alpha-beta search with iterative deepening
//!
//! This module implements the opponent's move choice using:
//! - Minimax with alpha-beta pruning, scored from the root side
//! - Iterative deepening for time management
//! - Move ordering for better pruning
//! - An opening book consulted before any search
//!
//! The search works on a [`Board`](crate::board::Board) in place through
//! make/unmake and always returns it unchanged.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search and the unpruned minimax reference
//! - `ordering` - Move ordering heuristics
//! - `iterative` - Iterative deepening wrapper
//! - `book` - Opening lines

mod alphabeta;
mod book;
mod iterative;
mod ordering;

pub use alphabeta::{alphabeta, minimax, Search};
pub use book::OpeningBook;
pub use iterative::{iterative_deepening, SearchResult};
